pub mod content;
mod image;
mod listing;
mod route;

pub use image::resolve_image;
pub use listing::{format_price, sample_listing, Listing, ListingFilter, ListingStatus};
pub use route::{Anchor, NavTarget, Route, MENU_ITEMS};
