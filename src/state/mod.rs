pub mod contact;
pub mod header;
pub mod loader;
pub mod navigation;
pub mod preview;
pub mod scroll;
pub mod slider;
pub mod status;

pub use contact::{ContactModal, ContactSubmission};
pub use header::HeaderVisibilityController;
pub use loader::PageLoader;
pub use navigation::NavigationState;
pub use preview::{ImagePreviewController, PreviewAction};
pub use scroll::{ScrollDirectionTracker, ScrollThresholds};
pub use slider::BeforeAfterSlider;
pub use status::StatusLine;
