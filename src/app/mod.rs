//! Application state and coordination modules.

pub mod app_state;
pub mod picker_coordinator;
pub mod settings_coordinator;

// Re-export main types for convenience
pub use app_state::{AppState, Screen};
pub use picker_coordinator::PickerCoordinator;
pub use settings_coordinator::SettingsCoordinator;
