//! Utility functions for the picker GUI.

pub mod formatting;
