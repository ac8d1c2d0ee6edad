// Staging page: before/after photos split by a draggable handle

use super::pages::content_column;
use crate::app::Homefront;
use crate::layout;
use crate::model::content::STAGING;
use crate::state::BeforeAfterSlider;
use crate::style;
use eframe::egui;

impl Homefront {
    pub(crate) fn render_staging(&mut self, ui: &mut egui::Ui) {
        let assets = self.assets_dir.clone();
        let muted = self.theme.muted();
        let sliders = &mut self.sliders;
        content_column(ui, |ui| {
            style::eyebrow(ui, "Staging");
            ui.heading("Before & after");
            ui.label(
                egui::RichText::new("Drag the handle to compare each room before and after staging.")
                    .color(muted),
            );
            ui.add_space(16.0);
            for (comparison, slider) in STAGING.iter().zip(sliders.iter_mut()) {
                ui.label(egui::RichText::new(comparison.title).size(18.0).strong());
                let before = crate::model::resolve_image(comparison.before, &assets);
                let after = crate::model::resolve_image(comparison.after, &assets);
                before_after(ui, slider, &before, &after);
                ui.add_space(32.0);
            }
            ui.add_space(32.0);
        });
    }
}

fn before_after(
    ui: &mut egui::Ui,
    slider: &mut BeforeAfterSlider,
    before: &str,
    after: &str,
) {
    let size = egui::vec2(ui.available_width(), layout::SLIDER_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

    let split = rect.left() + rect.width() * slider.position / 100.0;
    if response.drag_started() {
        let on_handle = ui
            .input(|i| i.pointer.press_origin())
            .is_some_and(|origin| (origin.x - split).abs() <= layout::SLIDER_HANDLE_RADIUS);
        if on_handle {
            slider.press();
        }
    }
    if let Some(pos) = response.interact_pointer_pos() {
        if ui.input(|i| i.any_touches()) {
            slider.touch_moved(pos.x, rect.left(), rect.width());
        } else {
            slider.pointer_moved(pos.x, rect.left(), rect.width());
        }
    }
    // Releasing the button or leaving the frame ends the drag.
    if response.drag_stopped()
        || !response.is_pointer_button_down_on()
        || !response.contains_pointer()
    {
        slider.release();
    }

    let split = rect.left() + rect.width() * slider.position / 100.0;

    // Before fills the frame; after is clipped to the revealed share on the left.
    egui::Image::new(before)
        .corner_radius(12.0)
        .paint_at(ui, rect);
    let revealed = egui::Rect::from_min_max(rect.min, egui::pos2(split, rect.bottom()));
    let mut after_ui = ui.new_child(egui::UiBuilder::new().max_rect(rect));
    after_ui.set_clip_rect(revealed.intersect(ui.clip_rect()));
    egui::Image::new(after)
        .corner_radius(12.0)
        .paint_at(&after_ui, rect);

    let painter = ui.painter_at(rect);
    painter.line_segment(
        [egui::pos2(split, rect.top()), egui::pos2(split, rect.bottom())],
        egui::Stroke::new(3.0, egui::Color32::WHITE),
    );
    let handle = egui::pos2(split, rect.center().y);
    painter.circle_filled(handle, layout::SLIDER_HANDLE_RADIUS, egui::Color32::WHITE);
    painter.text(
        handle,
        egui::Align2::CENTER_CENTER,
        "⟷",
        egui::FontId::proportional(20.0),
        style::INK,
    );
    for (text, align, x) in [
        ("After", egui::Align2::LEFT_TOP, rect.left() + 16.0),
        ("Before", egui::Align2::RIGHT_TOP, rect.right() - 16.0),
    ] {
        painter.text(
            egui::pos2(x, rect.top() + 16.0),
            align,
            text,
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
        );
    }

    if slider.dragging {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
    }
}
