pub mod header;
pub mod lightbox;
pub mod listing;
pub mod modals;
pub mod pages;
pub mod slider;
