// Contact modal and the transient overlays: page loader splash and status toast

use super::pages::accent_button;
use crate::app::Homefront;
use crate::io::worker::IoCommand;
use crate::layout;
use crate::state::contact::CLOSE_ANIMATION;
use crate::style;
use eframe::egui;
use std::time::Instant;

impl Homefront {
    pub(crate) fn render_contact_modal(&mut self, ctx: &egui::Context, now: Instant) {
        let opacity = ctx.animate_bool_with_time(
            egui::Id::new("contact_open"),
            self.contact.is_open(),
            CLOSE_ANIMATION.as_secs_f32(),
        );
        if !self.contact.is_visible() {
            return;
        }

        let width = layout::modal_width(ctx);
        let max_height = layout::modal_max_height(ctx);
        let contact = &mut self.contact;
        let mut submit = false;
        let mut close = false;

        let modal = egui::Modal::new(egui::Id::new("contact_modal")).show(ctx, |ui| {
            ui.set_opacity(opacity);
            ui.set_width(width);
            ui.set_max_height(max_height);
            ui.horizontal(|ui| {
                ui.heading("Get in touch");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        close = true;
                    }
                });
            });
            ui.label("Leave your details and a good time to reach you; we'll be in touch.");
            ui.separator();

            if contact.success {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Thank you! Your message has been sent.")
                            .size(16.0)
                            .color(style::ACCENT),
                    );
                });
                ui.add_space(24.0);
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                let form = &mut contact.form;
                egui::Grid::new("contact_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Name *");
                        ui.text_edit_singleline(&mut form.name);
                        ui.end_row();
                        ui.label("Email *");
                        ui.text_edit_singleline(&mut form.email);
                        ui.end_row();
                        ui.label("Phone");
                        ui.text_edit_singleline(&mut form.phone);
                        ui.end_row();
                        ui.label("Best time *");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.best_time)
                                .hint_text("e.g. weekday evenings"),
                        );
                        ui.end_row();
                    });
                ui.label("Message");
                ui.add(
                    egui::TextEdit::multiline(&mut form.message)
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );
            });

            if let Some(error) = &contact.error {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let label = if contact.sending { "Sending..." } else { "Send message" };
                if ui.add_enabled(!contact.sending, accent_button(label)).clicked() {
                    submit = true;
                }
                if contact.sending {
                    ui.spinner();
                }
            });
        });

        if modal.should_close() || close {
            self.contact.request_close(now);
        }
        if submit {
            if let Some(submission) = self.contact.submit() {
                tracing::info!(email = %submission.email, "contact request submitted");
                let command = IoCommand::SubmitContact {
                    outbox: self.config.outbox_path(),
                    submission,
                };
                if self.command_tx.send(command).is_err() {
                    tracing::error!("io worker unavailable");
                    self.contact.on_send_failed();
                }
            }
        }
    }

    pub(crate) fn render_loader(&mut self, ctx: &egui::Context) {
        let fade = ctx.animate_bool_with_time(
            egui::Id::new("page_loader"),
            self.loader.is_visible(),
            0.25,
        );
        if fade <= 0.0 {
            return;
        }

        let screen = ctx.input(|i| i.content_rect());
        egui::Area::new(egui::Id::new("page_loader"))
            .order(egui::Order::Tooltip)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                // Swallows clicks while the splash is up.
                let (rect, _) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
                let painter = ui.painter();
                painter.rect_filled(rect, 0.0, style::INK.gamma_multiply(fade));
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "KM&co Realty",
                    egui::FontId::proportional(32.0),
                    egui::Color32::WHITE.gamma_multiply(fade),
                );
                let t = ui.input(|i| i.time) as f32;
                let dot = egui::pos2(rect.center().x + 60.0 * (t * 3.0).sin(), rect.center().y + 36.0);
                painter.circle_filled(dot, 5.0, style::ACCENT.gamma_multiply(fade));
            });
        ctx.request_repaint();
    }

    pub(crate) fn render_status(&mut self, ctx: &egui::Context) {
        if self.status.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("status_toast"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -(layout::BOTTOM_NAV_HEIGHT + 16.0)])
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    if let Some((message, _)) = &self.status.error_message {
                        ui.colored_label(ui.visuals().error_fg_color, message);
                    }
                    if let Some((message, _)) = &self.status.info_message {
                        ui.label(message);
                    }
                });
            });
    }
}
