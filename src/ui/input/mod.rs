//! Input handling for the media grid.

pub mod grid_input_handler;
