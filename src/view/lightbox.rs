// Full-screen photo viewer driven by the image preview controller

use crate::app::Homefront;
use crate::layout;
use crate::state::PreviewAction;
use eframe::egui;

const STRIP_THUMB: f32 = 64.0;

impl Homefront {
    pub(crate) fn render_lightbox(&mut self, ctx: &egui::Context) {
        let Some(current) = self.preview.current_image().map(str::to_owned) else {
            return;
        };
        let index = self.preview.current_index();
        let count = self.preview.images().len();
        let max = layout::lightbox_size(ctx);
        let mut action = None;
        let mut jump = None;

        let modal = egui::Modal::new(egui::Id::new("lightbox"))
            .frame(egui::Frame::NONE)
            .backdrop_color(egui::Color32::from_black_alpha(230))
            .show(ctx, |ui| {
                ui.set_max_width(max.x);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{} / {}", index + 1, count))
                            .color(egui::Color32::LIGHT_GRAY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add(nav_button("✕")).clicked() {
                            action = Some(PreviewAction::Close);
                        }
                    });
                });

                ui.horizontal(|ui| {
                    let arrows = count > 1;
                    if arrows && ui.add(nav_button("‹")).clicked() {
                        action = Some(PreviewAction::Previous);
                    }
                    let image_max = egui::vec2(
                        max.x - if arrows { 96.0 } else { 0.0 },
                        max.y - STRIP_THUMB - 48.0,
                    );
                    ui.add(
                        egui::Image::new(current.as_str())
                            .max_size(image_max)
                            .maintain_aspect_ratio(true)
                            .shrink_to_fit(),
                    );
                    if arrows && ui.add(nav_button("›")).clicked() {
                        action = Some(PreviewAction::Next);
                    }
                });

                if count > 1 {
                    egui::ScrollArea::horizontal()
                        .id_salt("lightbox_strip")
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                for (i, uri) in self.preview.images().iter().enumerate() {
                                    let mut image = egui::Image::new(uri.as_str())
                                        .fit_to_exact_size(egui::vec2(STRIP_THUMB, STRIP_THUMB))
                                        .corner_radius(4.0)
                                        .sense(egui::Sense::click());
                                    if i != index {
                                        image = image.tint(egui::Color32::from_gray(140));
                                    }
                                    let thumb = ui.add(image);
                                    if i == index {
                                        ui.painter().rect_stroke(
                                            thumb.rect,
                                            4.0,
                                            egui::Stroke::new(2.0, egui::Color32::WHITE),
                                            egui::StrokeKind::Outside,
                                        );
                                    }
                                    if thumb.clicked() {
                                        jump = Some(i);
                                    }
                                }
                            });
                        });
                }
            });

        if modal.should_close() {
            action = Some(PreviewAction::Close);
        }
        if let Some(i) = jump {
            self.preview.jump_to(i);
        }
        if let Some(action) = action {
            self.preview.handle_action(action);
        }
    }
}

fn nav_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text)
            .size(28.0)
            .color(egui::Color32::WHITE),
    )
    .frame(false)
}
