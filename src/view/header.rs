// Top bar, slide-out menu and bottom bar
// Positions follow the header visibility controller; egui animates the slide

use crate::app::Homefront;
use crate::layout;
use crate::message::AppEvent;
use crate::model::{NavTarget, Route, MENU_ITEMS};
use crate::state::header::HeaderPhase;
use crate::style;
use eframe::egui;

const SLIDE_SECS: f32 = 0.3;
const BRAND: &str = "KM&co Realty";

impl Homefront {
    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        let visibility = self.header.visibility();
        let shown = ctx.animate_bool_with_time(
            egui::Id::new("header_shown"),
            visibility.header_shown,
            SLIDE_SECS,
        );
        if shown <= 0.0 {
            return;
        }

        let screen = ctx.input(|i| i.content_rect());
        let top = screen.top() - layout::HEADER_HEIGHT * (1.0 - shown);
        let events = self.bus.sender();
        let can_go_back = self.navigation.can_go_back();
        let scrolled = self.header.phase() != HeaderPhase::Top && !visibility.menu_open;
        let theme = self.theme;
        let fill = if visibility.menu_open {
            egui::Color32::TRANSPARENT
        } else {
            self.theme.bar_fill()
        };
        let ink = if visibility.menu_open {
            egui::Color32::WHITE
        } else {
            self.theme.ink()
        };

        egui::Area::new(egui::Id::new("header_bar"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(screen.left(), top))
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(fill)
                    .inner_margin(egui::Margin::symmetric(24, 0))
                    .show(ui, |ui| {
                        ui.set_width(screen.width() - 48.0);
                        ui.set_height(layout::HEADER_HEIGHT);
                        if scrolled {
                            let rect = ui.max_rect().expand2(egui::vec2(24.0, 0.0));
                            ui.painter().hline(
                                rect.x_range(),
                                rect.bottom(),
                                egui::Stroke::new(1.0, egui::Color32::from_black_alpha(20)),
                            );
                        }
                        ui.horizontal_centered(|ui| {
                            if can_go_back {
                                let back = egui::Button::new(egui::RichText::new("←").color(ink))
                                    .frame(false);
                                if ui.add(back).on_hover_text("Back (Alt+←)").clicked() {
                                    events.send(AppEvent::Back);
                                }
                            }
                            let brand = ui.add(
                                egui::Button::new(
                                    egui::RichText::new(BRAND).strong().size(18.0).color(ink),
                                )
                                .frame(false),
                            );
                            if brand.clicked() {
                                events.send(AppEvent::NavLink(NavTarget::Route(Route::Home)));
                            }

                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                let toggle = if visibility.menu_open { "✕ Close" } else { "☰ Menu" };
                                if ui
                                    .add(
                                        egui::Button::new(egui::RichText::new(toggle).color(ink))
                                            .frame(false),
                                    )
                                    .clicked()
                                {
                                    events.send(AppEvent::ToggleMenu);
                                }
                                let theme_icon = match theme {
                                    style::Theme::Light => "☾",
                                    style::Theme::Dark => "☀",
                                };
                                let theme_button = egui::Button::new(
                                    egui::RichText::new(theme_icon).color(ink),
                                )
                                .frame(false);
                                if ui.add(theme_button).clicked() {
                                    events.send(AppEvent::ToggleTheme);
                                }
                                ui.add_space(12.0);
                                let contact = egui::Button::new(
                                    egui::RichText::new("Contact").color(egui::Color32::WHITE),
                                )
                                .fill(style::ACCENT)
                                .corner_radius(16.0);
                                if ui.add(contact).clicked() {
                                    events.send(AppEvent::OpenContactModal);
                                }
                            });
                        });
                    });
            });
    }

    /// Compact bar pinned to the bottom once the page leaves the top.
    pub(crate) fn render_bottom_nav(&mut self, ctx: &egui::Context) {
        let visibility = self.header.visibility();
        let shown = ctx.animate_bool_with_time(
            egui::Id::new("bottom_nav_shown"),
            visibility.bottom_nav_shown,
            SLIDE_SECS,
        );
        if shown <= 0.0 {
            return;
        }

        let screen = ctx.input(|i| i.content_rect());
        let top = screen.bottom() - layout::BOTTOM_NAV_HEIGHT * shown;
        let events = self.bus.sender();
        let ink = self.theme.ink();

        egui::Area::new(egui::Id::new("bottom_nav"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(screen.left(), top))
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(self.theme.bar_fill())
                    .inner_margin(egui::Margin::symmetric(24, 0))
                    .show(ui, |ui| {
                        ui.set_width(screen.width() - 48.0);
                        ui.set_height(layout::BOTTOM_NAV_HEIGHT);
                        ui.horizontal_centered(|ui| {
                            ui.spacing_mut().item_spacing.x = 24.0;
                            for item in MENU_ITEMS {
                                let link = egui::Button::new(
                                    egui::RichText::new(item.label).size(13.0).color(ink),
                                )
                                .frame(false);
                                if ui.add(link).clicked() {
                                    if let Some(target) = NavTarget::from_href(item.href) {
                                        events.send(AppEvent::NavLink(target));
                                    }
                                }
                            }
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.button("Get in touch").clicked() {
                                    events.send(AppEvent::OpenContactModal);
                                }
                            });
                        });
                    });
            });
    }

    pub(crate) fn render_menu(&mut self, ctx: &egui::Context) {
        let open = self.header.menu_open();
        let slide = ctx.animate_bool_with_time(egui::Id::new("menu_open"), open, SLIDE_SECS);
        if slide <= 0.0 {
            return;
        }

        let screen = ctx.input(|i| i.content_rect());
        let events = self.bus.sender();

        // Clicking the scrim closes the menu.
        egui::Area::new(egui::Id::new("menu_scrim"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
                ui.painter()
                    .rect_filled(rect, 0.0, style::SCRIM.gamma_multiply(slide));
                if response.clicked() {
                    events.send(AppEvent::CloseMenu);
                }
            });

        let width = layout::MENU_WIDTH.min(screen.width());
        let left = screen.right() - width * slide;
        // Middle keeps the header, with its close button, above the panel.
        egui::Area::new(egui::Id::new("menu_panel"))
            .order(egui::Order::Middle)
            .fixed_pos(egui::pos2(left, screen.top()))
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(style::MENU_FILL)
                    .inner_margin(egui::Margin::symmetric(32, 0))
                    .show(ui, |ui| {
                        ui.set_width(width - 64.0);
                        ui.set_height(screen.height());
                        ui.add_space(layout::HEADER_HEIGHT + 32.0);
                        for item in MENU_ITEMS {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(item.number)
                                        .size(12.0)
                                        .color(style::ACCENT),
                                );
                                let link = egui::Button::new(
                                    egui::RichText::new(item.label)
                                        .size(26.0)
                                        .color(egui::Color32::WHITE),
                                )
                                .frame(false);
                                if ui.add(link).clicked() {
                                    if let Some(target) = NavTarget::from_href(item.href) {
                                        events.send(AppEvent::NavLink(target));
                                    }
                                }
                            });
                            ui.add_space(12.0);
                        }
                        ui.add_space(24.0);
                        let contact = egui::Button::new(
                            egui::RichText::new("Contact us").color(egui::Color32::WHITE),
                        )
                        .fill(style::ACCENT)
                        .corner_radius(16.0);
                        if ui.add(contact).clicked() {
                            events.send(AppEvent::OpenContactModal);
                        }
                    });
            });
    }
}
