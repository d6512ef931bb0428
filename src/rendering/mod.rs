//! Low-level drawing for grid cells and preview pages.

pub mod cell_renderer;
