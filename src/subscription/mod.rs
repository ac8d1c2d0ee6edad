pub mod keyboard;
pub mod watcher;

pub use keyboard::{preview_action, FrameKeys};
pub use watcher::CatalogWatcher;
