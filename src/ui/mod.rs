//! UI panel rendering subsystem
//!
//! This module contains all panel rendering logic for the picker GUI:
//! - Host panel (source choice, pick button, last results)
//! - Top bar (album switcher, cancel)
//! - Grid panel (thumbnail grid with tap and drag selection)
//! - Bottom bar (selection count, preview and add buttons)
//! - Preview panel (full-screen pager over the selection)
//! - Panel manager (screen orchestration and the alert modal)
//! - Input handling (tap, drag-select, edge auto-scroll)

pub mod bottom_bar;
pub mod grid_panel;
pub mod host_panel;
pub mod input;
pub mod panel_manager;
pub mod preview_panel;
pub mod top_bar;
