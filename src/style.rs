use eframe::egui::{self, Color32};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        };
        visuals.selection.bg_fill = ACCENT;
        visuals.hyperlink_color = ACCENT;
        ctx.set_visuals(visuals);
    }

    pub fn ink(&self) -> Color32 {
        match self {
            Self::Light => INK,
            Self::Dark => Color32::from_gray(235),
        }
    }

    pub fn muted(&self) -> Color32 {
        match self {
            Self::Light => Color32::from_gray(110),
            Self::Dark => Color32::from_gray(160),
        }
    }

    pub fn bar_fill(&self) -> Color32 {
        match self {
            Self::Light => Color32::from_rgba_unmultiplied(255, 255, 255, 247),
            Self::Dark => Color32::from_rgba_unmultiplied(17, 17, 18, 247),
        }
    }
}

// --- Palette ---
pub const INK: Color32 = Color32::from_rgb(0x11, 0x11, 0x12);
pub const ACCENT: Color32 = Color32::from_rgb(0xff, 0x66, 0xc4);
pub const MENU_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 242);
pub const SCRIM: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 178);
pub const FOOTER_FILL: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a);

pub fn status_color(status: crate::model::ListingStatus) -> Color32 {
    use crate::model::ListingStatus;
    match status {
        ListingStatus::Sold => Color32::from_rgb(0xb0, 0x3a, 0x2e),
        ListingStatus::UnderContract => Color32::from_rgb(0xc9, 0x8a, 0x1b),
        ListingStatus::Active | ListingStatus::Unknown => Color32::from_rgb(0x2e, 0x8b, 0x57),
    }
}

/// Small uppercase label preceded by a pink dot.
pub fn eyebrow(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 4.0, ACCENT);
        ui.label(
            egui::RichText::new(text.to_uppercase())
                .size(11.0)
                .color(Color32::GRAY),
        );
    });
}

/// Render a label that truncates overflowing text with an ellipsis.
pub fn truncated_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}
