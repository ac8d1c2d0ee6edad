// Layout constants for Homefront

use eframe::egui;

// --- Header ---
pub const HEADER_HEIGHT: f32 = 56.0;
pub const BOTTOM_NAV_HEIGHT: f32 = 48.0;
pub const MENU_WIDTH: f32 = 384.0;
pub const CONTENT_MAX_WIDTH: f32 = 1240.0;

// --- Listings ---
pub const CARD_WIDTH: f32 = 360.0;
pub const CARD_IMAGE_HEIGHT: f32 = 240.0;
pub const HERO_IMAGE_HEIGHT: f32 = 460.0;
pub const THUMB_SIZE: f32 = 96.0;

// --- Staging ---
pub const SLIDER_HEIGHT: f32 = 560.0;
pub const SLIDER_HANDLE_RADIUS: f32 = 28.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 320.0;
pub const MODAL_MAX_WIDTH: f32 = 560.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;
pub const MODAL_HEIGHT_RATIO: f32 = 0.85;
pub const LIGHTBOX_RATIO: f32 = 0.9;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

fn viewport_size(ctx: &egui::Context) -> egui::Vec2 {
    ctx.input(|i| i.content_rect().size())
}

/// Responsive modal width based on window size
pub fn modal_width(ctx: &egui::Context) -> f32 {
    (viewport_size(ctx).x * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

pub fn modal_max_height(ctx: &egui::Context) -> f32 {
    viewport_size(ctx).y * MODAL_HEIGHT_RATIO
}

/// Largest box the lightbox image may occupy.
pub fn lightbox_size(ctx: &egui::Context) -> egui::Vec2 {
    viewport_size(ctx) * LIGHTBOX_RATIO
}

/// Offset of a home-page section once laid out; used for anchor scrolling.
pub fn section_offset(sections: &[(crate::model::Anchor, f32)], anchor: crate::model::Anchor) -> Option<f32> {
    sections
        .iter()
        .find(|(a, _)| *a == anchor)
        .map(|(_, y)| (*y - HEADER_HEIGHT).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Anchor;

    #[test]
    fn test_section_offset_accounts_for_header() {
        let sections = [(Anchor::Listings, 900.0), (Anchor::Team, 30.0)];
        assert_eq!(section_offset(&sections, Anchor::Listings), Some(844.0));
        assert_eq!(section_offset(&sections, Anchor::Team), Some(0.0));
        assert_eq!(section_offset(&sections, Anchor::Contact), None);
    }
}
