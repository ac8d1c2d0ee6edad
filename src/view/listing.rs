// Listing detail page: hero photo, thumbnails, facts and a contact prompt

use super::pages::{accent_button, content_column, facts_line};
use crate::app::Homefront;
use crate::layout;
use crate::message::AppEvent;
use crate::model::{NavTarget, Route};
use crate::style;
use eframe::egui;

impl Homefront {
    pub(crate) fn render_listing_detail(&mut self, ui: &mut egui::Ui, key: &str) {
        let events = self.bus.sender();
        let Some(listing) = self.find_listing(key) else {
            content_column(ui, |ui| {
                ui.add_space(48.0);
                if self.listings_loaded {
                    ui.heading("Listing not found");
                    ui.label(
                        egui::RichText::new("It may have sold or been taken off the market.")
                            .color(self.theme.muted()),
                    );
                    ui.add_space(12.0);
                    if ui.add(accent_button("Browse all listings")).clicked() {
                        events.send(AppEvent::NavLink(NavTarget::Route(Route::AllListings)));
                    }
                } else {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading listing...");
                    });
                }
                ui.add_space(160.0);
            });
            return;
        };

        // The preview controller owns the resolved gallery for this page.
        let photos = self.preview.images();

        content_column(ui, |ui| {
            if ui.link("← All listings").clicked() {
                events.send(AppEvent::NavLink(NavTarget::Route(Route::AllListings)));
            }
            ui.add_space(8.0);

            let hero_size = egui::vec2(ui.available_width(), layout::HERO_IMAGE_HEIGHT);
            match photos.first() {
                Some(uri) => {
                    let hero = ui.add(
                        egui::Image::new(uri.as_str())
                            .fit_to_exact_size(hero_size)
                            .corner_radius(12.0)
                            .sense(egui::Sense::click()),
                    );
                    if hero.clicked() {
                        events.send(AppEvent::OpenPreview(0));
                    }
                    hero.on_hover_cursor(egui::CursorIcon::ZoomIn);
                }
                None => {
                    let (rect, _) = ui.allocate_exact_size(hero_size, egui::Sense::hover());
                    ui.painter().rect_filled(rect, 12.0, egui::Color32::from_gray(200));
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "No photos yet",
                        egui::FontId::proportional(16.0),
                        egui::Color32::DARK_GRAY,
                    );
                }
            }

            if photos.len() > 1 {
                ui.add_space(8.0);
                egui::ScrollArea::horizontal()
                    .id_salt("listing_thumbs")
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            for (index, uri) in photos.iter().enumerate() {
                                let thumb = ui.add(
                                    egui::Image::new(uri.as_str())
                                        .fit_to_exact_size(egui::vec2(
                                            layout::THUMB_SIZE,
                                            layout::THUMB_SIZE,
                                        ))
                                        .corner_radius(6.0)
                                        .sense(egui::Sense::click()),
                                );
                                if thumb.clicked() {
                                    events.send(AppEvent::OpenPreview(index));
                                }
                            }
                        });
                    });
            }

            ui.add_space(20.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(listing.status.label())
                        .strong()
                        .color(style::status_color(listing.status)),
                );
                ui.label(listing.property_type());
                if let Some(kind) = &listing.listing_type {
                    ui.label(egui::RichText::new(kind).color(self.theme.muted()));
                }
            });
            ui.label(
                egui::RichText::new(format!("${}", listing.formatted_price()))
                    .size(32.0)
                    .strong(),
            );
            if !listing.title.is_empty() {
                ui.label(egui::RichText::new(&listing.title).size(20.0));
            }
            ui.label(egui::RichText::new(&listing.address).color(self.theme.muted()));
            let facts = facts_line(listing);
            if !facts.is_empty() {
                ui.label(facts);
            }

            if !listing.description.is_empty() {
                ui.add_space(16.0);
                style::eyebrow(ui, "About this home");
                ui.label(&listing.description);
            }

            if !listing.features.is_empty() {
                ui.add_space(16.0);
                style::eyebrow(ui, "Features");
                for feature in &listing.features {
                    ui.label(format!("• {}", feature));
                }
            }

            ui.add_space(24.0);
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new("Interested in this property?").strong());
                    ui.label("Book a viewing or ask us anything about the home.");
                    ui.add_space(8.0);
                    if ui.add(accent_button("Contact us")).clicked() {
                        events.send(AppEvent::OpenContactModal);
                    }
                });
            ui.add_space(64.0);
        });
    }
}
