// Page bodies: one scroll area per route, so a route change behaves like a remount

use crate::app::Homefront;
use crate::layout;
use crate::message::{AppEvent, EventSender};
use crate::model::content::{self, TeamMember, Testimonial};
use crate::model::{Anchor, Listing, ListingFilter, NavTarget, Route, MENU_ITEMS};
use crate::style;
use chrono::Datelike;
use eframe::egui;

const FEATURED_COUNT: usize = 6;

impl Homefront {
    pub(crate) fn render_page(&mut self, ctx: &egui::Context) {
        let route = self.navigation.current.clone();
        let scroll_to = self.scroll_to.take();
        let mut offset = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .id_salt(("page", route.path()))
                    .auto_shrink([false, false]);
                if let Some(y) = scroll_to {
                    area = area.vertical_scroll_offset(y);
                }
                let output = area.show(ui, |ui| {
                    let origin = ui.cursor().top();
                    ui.add_space(layout::HEADER_HEIGHT + 24.0);
                    match &route {
                        Route::Home => self.render_home(ui, origin),
                        Route::AllListings => self.render_all_listings(ui),
                        Route::ListingDetail(key) => self.render_listing_detail(ui, key),
                        Route::Staging => self.render_staging(ui),
                        Route::Testimonials => self.render_testimonials(ui),
                        Route::OurTeam => self.render_team(ui),
                        Route::NotFound(path) => self.render_not_found(ui, path),
                    }
                    self.render_footer(ui);
                });
                offset = Some(output.state.offset.y);
            });

        if let Some(y) = offset {
            self.record_scroll_offset(ctx, y);
        }
    }

    fn render_home(&mut self, ui: &mut egui::Ui, origin: f32) {
        let events = self.bus.sender();
        self.sections.clear();

        content_column(ui, |ui| {
            ui.add_space(48.0);
            style::eyebrow(ui, "Durham Region & the GTA");
            ui.label(
                egui::RichText::new("Find the place you'll call home.")
                    .size(44.0)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(
                    "Buying, selling or leasing: clear guidance, honest conversations, \
                     and practical strategy from people who know the neighbourhoods.",
                )
                .size(16.0)
                .color(self.theme.muted()),
            );
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.add(accent_button("View listings")).clicked() {
                    events.send(AppEvent::NavLink(NavTarget::Anchor(Anchor::Listings)));
                }
                if ui.button("Book a consultation").clicked() {
                    events.send(AppEvent::OpenContactModal);
                }
            });
            ui.add_space(64.0);
        });

        self.sections.push((Anchor::Listings, ui.cursor().top() - origin));
        content_column(ui, |ui| {
            style::eyebrow(ui, "Listings");
            ui.heading("Featured properties");
            ui.add_space(12.0);
            let featured: Vec<&Listing> = ListingFilter::ForSale
                .apply(&self.listings)
                .into_iter()
                .take(FEATURED_COUNT)
                .collect();
            self.listing_grid(ui, &featured, &events);
            ui.add_space(12.0);
            if ui.button("View all listings →").clicked() {
                events.send(AppEvent::NavLink(NavTarget::Route(Route::AllListings)));
            }
            ui.add_space(64.0);
        });

        self.sections.push((Anchor::Team, ui.cursor().top() - origin));
        content_column(ui, |ui| {
            style::eyebrow(ui, "Our team");
            ui.heading("The people behind the keys");
            ui.add_space(12.0);
            for member in content::TEAM {
                self.team_member(ui, member, &events);
                ui.add_space(24.0);
            }
            ui.add_space(40.0);
        });

        content_column(ui, |ui| {
            style::eyebrow(ui, "Testimonials");
            ui.heading("What clients say");
            ui.add_space(12.0);
            ui.horizontal_wrapped(|ui| {
                for testimonial in content::TESTIMONIALS.iter().take(2) {
                    testimonial_card(ui, testimonial);
                }
            });
            ui.add_space(64.0);
        });

        self.sections.push((Anchor::Contact, ui.cursor().top() - origin));
        content_column(ui, |ui| {
            style::eyebrow(ui, "Contact");
            ui.heading("Thinking about a move?");
            ui.label("Tell us a little about what you need and when suits you to talk.");
            ui.add_space(12.0);
            if ui.add(accent_button("Get in touch")).clicked() {
                events.send(AppEvent::OpenContactModal);
            }
            ui.add_space(64.0);
        });
    }

    fn render_all_listings(&mut self, ui: &mut egui::Ui) {
        let events = self.bus.sender();
        let mut filter = self.filter;
        content_column(ui, |ui| {
            style::eyebrow(ui, "Listings");
            ui.heading("All properties");
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                for option in ListingFilter::ALL {
                    ui.selectable_value(&mut filter, option, option.label());
                }
            });
            ui.add_space(16.0);

            if !self.listings_loaded {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading listings...");
                });
                return;
            }

            let shown = filter.apply(&self.listings);
            if shown.is_empty() {
                ui.label(
                    egui::RichText::new("No listings match this filter.")
                        .color(self.theme.muted()),
                );
            } else {
                self.listing_grid(ui, &shown, &events);
            }
            ui.add_space(64.0);
        });
        self.filter = filter;
    }

    fn render_team(&mut self, ui: &mut egui::Ui) {
        let events = self.bus.sender();
        content_column(ui, |ui| {
            style::eyebrow(ui, "Our team");
            ui.heading("Meet the team");
            ui.add_space(16.0);
            for member in content::TEAM {
                self.team_member(ui, member, &events);
                ui.separator();
                ui.add_space(16.0);
            }
            ui.add_space(48.0);
        });
    }

    fn render_testimonials(&mut self, ui: &mut egui::Ui) {
        content_column(ui, |ui| {
            style::eyebrow(ui, "Testimonials");
            ui.heading("Client stories");
            ui.add_space(16.0);
            ui.horizontal_wrapped(|ui| {
                for testimonial in content::TESTIMONIALS {
                    testimonial_card(ui, testimonial);
                }
            });
            ui.add_space(64.0);
        });
    }

    fn render_not_found(&mut self, ui: &mut egui::Ui, path: &str) {
        let events = self.bus.sender();
        content_column(ui, |ui| {
            ui.add_space(64.0);
            ui.heading("Page not found");
            ui.label(
                egui::RichText::new(format!("Nothing lives at {}.", path))
                    .color(self.theme.muted()),
            );
            ui.add_space(16.0);
            if ui.add(accent_button("Back to home")).clicked() {
                events.send(AppEvent::NavLink(NavTarget::Route(Route::Home)));
            }
            ui.add_space(160.0);
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        let events = self.bus.sender();
        egui::Frame::NONE
            .fill(style::FOOTER_FILL)
            .inner_margin(egui::Margin::symmetric(24, 32))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                content_column(ui, |ui| {
                    ui.label(
                        egui::RichText::new("KM&co Realty")
                            .size(20.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.add_space(8.0);
                    ui.horizontal_wrapped(|ui| {
                        for item in MENU_ITEMS {
                            let link = egui::Button::new(
                                egui::RichText::new(item.label).color(egui::Color32::LIGHT_GRAY),
                            )
                            .frame(false);
                            if ui.add(link).clicked() {
                                match NavTarget::from_href(item.href) {
                                    Some(NavTarget::Route(route)) => {
                                        events.send(AppEvent::StartPageLoad);
                                        events.send(AppEvent::Navigate(route));
                                    }
                                    Some(target) => events.send(AppEvent::NavLink(target)),
                                    None => {}
                                }
                            }
                        }
                    });
                    ui.horizontal(|ui| {
                        for social in content::AGENCY_SOCIALS {
                            if ui.link(social.label).clicked() {
                                events.send(AppEvent::OpenExternal(social.href.to_string()));
                            }
                        }
                    });
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(format!(
                            "© {} KM&co Realty. All rights reserved.",
                            chrono::Local::now().year()
                        ))
                        .size(11.0)
                        .color(egui::Color32::GRAY),
                    );
                });
            });
    }

    pub(crate) fn listing_grid(&self, ui: &mut egui::Ui, listings: &[&Listing], events: &EventSender) {
        if listings.is_empty() {
            ui.label(egui::RichText::new("No properties right now.").color(self.theme.muted()));
            return;
        }
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(20.0, 20.0);
            for listing in listings {
                let cover = listing.cover().map(|src| self.image_uri(src));
                listing_card(ui, listing, cover, events);
            }
        });
    }

    fn team_member(&self, ui: &mut egui::Ui, member: &TeamMember, events: &EventSender) {
        ui.horizontal_top(|ui| {
            ui.add(
                egui::Image::new(self.image_uri(member.image))
                    .fit_to_exact_size(egui::vec2(160.0, 200.0))
                    .corner_radius(8.0),
            );
            ui.add_space(16.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(member.name).size(22.0).strong());
                ui.label(egui::RichText::new(member.title).color(style::ACCENT));
                if let Some(email) = member.email {
                    if ui.link(email).clicked() {
                        events.send(AppEvent::OpenExternal(format!("mailto:{}", email)));
                    }
                }
                ui.horizontal(|ui| {
                    for social in member.socials {
                        if ui.link(social.label).clicked() {
                            events.send(AppEvent::OpenExternal(social.href.to_string()));
                        }
                    }
                });
                ui.add_space(8.0);
                ui.label(member.bio);
            });
        });
    }
}

/// Centers page content at a readable width.
pub(crate) fn content_column<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let available = ui.available_width();
    let width = available.min(layout::CONTENT_MAX_WIDTH) - 48.0;
    let pad = ((available - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(pad);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

pub(crate) fn accent_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text).color(egui::Color32::WHITE))
        .fill(style::ACCENT)
        .corner_radius(16.0)
}

fn listing_card(ui: &mut egui::Ui, listing: &Listing, cover: Option<String>, events: &EventSender) {
    let size = egui::vec2(layout::CARD_WIDTH, layout::CARD_IMAGE_HEIGHT);
    let response = ui
        .vertical(|ui| {
            ui.set_width(layout::CARD_WIDTH);
            let image = match cover {
                Some(uri) => ui.add(
                    egui::Image::new(uri)
                        .fit_to_exact_size(size)
                        .corner_radius(8.0)
                        .sense(egui::Sense::click()),
                ),
                None => {
                    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
                    ui.painter().rect_filled(rect, 8.0, egui::Color32::from_gray(200));
                    response
                }
            };
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(listing.status.label())
                        .size(11.0)
                        .color(style::status_color(listing.status)),
                );
                ui.label(egui::RichText::new(listing.property_type()).size(11.0));
            });
            ui.label(
                egui::RichText::new(format!("${}", listing.formatted_price()))
                    .size(20.0)
                    .strong(),
            );
            let title = if listing.title.is_empty() {
                &listing.address
            } else {
                &listing.title
            };
            let title = style::truncated_label(ui, egui::RichText::new(title.as_str()).strong())
                .interact(egui::Sense::click());
            ui.label(egui::RichText::new(facts_line(listing)).size(12.0));
            image.clicked() || title.clicked()
        })
        .inner;

    if response {
        events.send(AppEvent::NavLink(NavTarget::Route(Route::ListingDetail(
            listing.key().to_string(),
        ))));
    }
}

fn testimonial_card(ui: &mut egui::Ui, testimonial: &Testimonial) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(layout::CARD_WIDTH);
            ui.label(egui::RichText::new("★★★★★").color(style::ACCENT));
            ui.label(egui::RichText::new(testimonial.title).strong().size(16.0));
            ui.label(testimonial.text);
        });
}

/// "3 bd · 2 ba · 1,450 sqft", skipping unknown facts.
pub(crate) fn facts_line(listing: &Listing) -> String {
    let mut facts = Vec::new();
    if let Some(beds) = listing.bedrooms() {
        facts.push(format!("{} bd", beds));
    }
    if let Some(baths) = listing.bathrooms() {
        facts.push(format!("{} ba", baths));
    }
    if let Some(area) = listing.area() {
        facts.push(format!("{} sqft", crate::model::format_price(Some(area))));
    }
    facts.join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facts_line_skips_missing() {
        let listing = Listing {
            beds: Some(3.0),
            total_bathrooms: Some(2.5),
            baths: Some(1.0),
            living_area: Some(1450.0),
            ..Listing::default()
        };
        assert_eq!(facts_line(&listing), "3 bd · 2.5 ba · 1,450 sqft");
        assert_eq!(facts_line(&Listing::default()), "");
    }
}
