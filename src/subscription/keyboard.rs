use crate::state::PreviewAction;
use eframe::egui::{self, Key, Modifiers};

/// Lightbox bindings; only consulted while the lightbox is open.
pub fn preview_action(key: Key, modifiers: Modifiers) -> Option<PreviewAction> {
    if !modifiers.is_none() {
        return None;
    }
    match key {
        Key::Escape => Some(PreviewAction::Close),
        Key::ArrowRight => Some(PreviewAction::Next),
        Key::ArrowLeft => Some(PreviewAction::Previous),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryAction {
    Back,
    Forward,
}

/// Alt+Arrow walks the route history.
pub fn history_action(key: Key, modifiers: Modifiers) -> Option<HistoryAction> {
    if !modifiers.alt {
        return None;
    }
    match key {
        Key::ArrowLeft => Some(HistoryAction::Back),
        Key::ArrowRight => Some(HistoryAction::Forward),
        _ => None,
    }
}

/// Key presses collected once per frame, in arrival order.
#[derive(Clone, Debug, Default)]
pub struct FrameKeys {
    pub pressed: Vec<(Key, Modifiers)>,
}

impl FrameKeys {
    pub fn collect(ctx: &egui::Context) -> Self {
        let pressed = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some((*key, *modifiers)),
                    _ => None,
                })
                .collect()
        });
        Self { pressed }
    }

    pub fn escape(&self) -> bool {
        self.pressed.iter().any(|(key, _)| *key == Key::Escape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_bindings() {
        assert_eq!(
            preview_action(Key::Escape, Modifiers::NONE),
            Some(PreviewAction::Close)
        );
        assert_eq!(
            preview_action(Key::ArrowRight, Modifiers::NONE),
            Some(PreviewAction::Next)
        );
        assert_eq!(
            preview_action(Key::ArrowLeft, Modifiers::NONE),
            Some(PreviewAction::Previous)
        );
        assert_eq!(preview_action(Key::Enter, Modifiers::NONE), None);
    }

    #[test]
    fn test_modified_arrows_are_history_not_preview() {
        assert_eq!(preview_action(Key::ArrowLeft, Modifiers::ALT), None);
        assert_eq!(
            history_action(Key::ArrowLeft, Modifiers::ALT),
            Some(HistoryAction::Back)
        );
        assert_eq!(
            history_action(Key::ArrowRight, Modifiers::ALT),
            Some(HistoryAction::Forward)
        );
        assert_eq!(history_action(Key::ArrowRight, Modifiers::NONE), None);
    }

    #[test]
    fn test_frame_keys_escape() {
        let keys = FrameKeys {
            pressed: vec![(Key::A, Modifiers::NONE), (Key::Escape, Modifiers::NONE)],
        };
        assert!(keys.escape());
        assert!(!FrameKeys::default().escape());
    }
}
