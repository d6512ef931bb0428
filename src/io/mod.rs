//! Background I/O: page fetching and thumbnail loading.

pub mod page_loader;
pub mod thumbnail_loader;

// Re-export commonly used types
pub use page_loader::{PageLoader, PageResult};
pub use thumbnail_loader::ThumbnailLoader;
