//! Core grid geometry logic, independent of the UI toolkit.

pub mod grid_operations;
