// Keyboard routing: the topmost overlay gets the keys first

use crate::app::Homefront;
use crate::state::PreviewAction;
use crate::subscription::keyboard::{history_action, HistoryAction};
use crate::subscription::{preview_action, FrameKeys};
use eframe::egui;
use std::time::Instant;

/// Which overlays were open when the frame's keys arrived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Overlays {
    pub preview: bool,
    pub contact: bool,
    pub menu: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KeyCommand {
    Preview(PreviewAction),
    CloseContact,
    CloseMenu,
    History(HistoryAction),
}

/// Lightbox, then contact modal, then menu, then history. The first open
/// overlay consumes every key, even those it has no binding for.
pub(crate) fn route_keys(overlays: Overlays, keys: &FrameKeys) -> Vec<KeyCommand> {
    if overlays.preview {
        return keys
            .pressed
            .iter()
            .filter_map(|(key, modifiers)| preview_action(*key, *modifiers))
            .map(KeyCommand::Preview)
            .collect();
    }
    if overlays.contact {
        return keys.escape().then_some(KeyCommand::CloseContact).into_iter().collect();
    }
    if overlays.menu {
        return keys.escape().then_some(KeyCommand::CloseMenu).into_iter().collect();
    }
    // Text fields own plain arrows; history needs Alt so it never collides.
    keys.pressed
        .iter()
        .filter_map(|(key, modifiers)| history_action(*key, *modifiers))
        .map(KeyCommand::History)
        .collect()
}

impl Homefront {
    pub(crate) fn handle_input(&mut self, ctx: &egui::Context, now: Instant) {
        let keys = FrameKeys::collect(ctx);
        if keys.pressed.is_empty() {
            return;
        }

        let overlays = Overlays {
            preview: self.preview.is_open(),
            contact: self.contact.is_open(),
            menu: self.header.menu_open(),
        };
        for command in route_keys(overlays, &keys) {
            match command {
                // A key after Close in the same frame is ignored by the controller.
                KeyCommand::Preview(action) => {
                    self.preview.handle_action(action);
                }
                KeyCommand::CloseContact => self.contact.request_close(now),
                KeyCommand::CloseMenu => {
                    self.header.set_menu_open(false);
                }
                KeyCommand::History(HistoryAction::Back) => self.navigate_back(now),
                KeyCommand::History(HistoryAction::Forward) => self.navigate_forward(now),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ImagePreviewController;
    use eframe::egui::{Key, Modifiers};

    fn keys(pressed: &[(Key, Modifiers)]) -> FrameKeys {
        FrameKeys {
            pressed: pressed.to_vec(),
        }
    }

    #[test]
    fn test_lightbox_takes_keys_over_other_overlays() {
        let overlays = Overlays {
            preview: true,
            contact: true,
            menu: true,
        };
        let commands = route_keys(overlays, &keys(&[(Key::Escape, Modifiers::NONE)]));
        assert_eq!(commands, vec![KeyCommand::Preview(PreviewAction::Close)]);
    }

    #[test]
    fn test_contact_modal_shadows_menu() {
        let overlays = Overlays {
            contact: true,
            menu: true,
            ..Overlays::default()
        };
        let pressed = keys(&[
            (Key::Escape, Modifiers::NONE),
            (Key::Escape, Modifiers::NONE),
        ]);
        assert_eq!(route_keys(overlays, &pressed), vec![KeyCommand::CloseContact]);
    }

    #[test]
    fn test_open_menu_swallows_history_keys() {
        let overlays = Overlays {
            menu: true,
            ..Overlays::default()
        };
        assert!(route_keys(overlays, &keys(&[(Key::ArrowLeft, Modifiers::ALT)])).is_empty());
        assert_eq!(
            route_keys(overlays, &keys(&[(Key::Escape, Modifiers::NONE)])),
            vec![KeyCommand::CloseMenu]
        );
    }

    #[test]
    fn test_history_only_without_overlays() {
        let pressed = keys(&[
            (Key::ArrowLeft, Modifiers::ALT),
            (Key::ArrowRight, Modifiers::NONE),
            (Key::Escape, Modifiers::NONE),
            (Key::ArrowRight, Modifiers::ALT),
        ]);
        assert_eq!(
            route_keys(Overlays::default(), &pressed),
            vec![
                KeyCommand::History(HistoryAction::Back),
                KeyCommand::History(HistoryAction::Forward),
            ]
        );
    }

    #[test]
    fn test_lightbox_key_after_close_is_inert() {
        let mut preview =
            ImagePreviewController::new(vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()]);
        preview.open(1);
        let overlays = Overlays {
            preview: preview.is_open(),
            ..Overlays::default()
        };
        let pressed = keys(&[
            (Key::Escape, Modifiers::NONE),
            (Key::ArrowRight, Modifiers::NONE),
        ]);
        for command in route_keys(overlays, &pressed) {
            if let KeyCommand::Preview(action) = command {
                preview.handle_action(action);
            }
        }
        assert!(!preview.is_open());
        assert_eq!(preview.current_index(), 1);
    }
}
