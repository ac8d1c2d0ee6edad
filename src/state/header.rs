// Header visibility - derives top bar / bottom bar visibility from scroll state
use super::scroll::{ScrollDirection, ScrollSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderPhase {
    Top,
    VisibleScrolled,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityState {
    pub header_shown: bool,
    pub bottom_nav_shown: bool,
    pub menu_open: bool,
}

pub struct HeaderVisibilityController {
    phase: HeaderPhase,
    menu_open: bool,
    last: ScrollSnapshot,
    hide_after: f32,
}

impl HeaderVisibilityController {
    pub fn new(hide_after: f32) -> Self {
        Self {
            phase: HeaderPhase::Top,
            menu_open: false,
            last: ScrollSnapshot::default(),
            hide_after,
        }
    }

    pub fn phase(&self) -> HeaderPhase {
        self.phase
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn apply(&mut self, snapshot: ScrollSnapshot) -> VisibilityState {
        self.last = snapshot;
        self.transition();
        self.visibility()
    }

    pub fn set_menu_open(&mut self, open: bool) -> VisibilityState {
        if self.menu_open != open {
            tracing::debug!(open, "menu toggled");
        }
        self.menu_open = open;
        self.transition();
        self.visibility()
    }

    pub fn toggle_menu(&mut self) -> VisibilityState {
        self.set_menu_open(!self.menu_open)
    }

    /// Page remount: header shown, at top, menu closed.
    pub fn reset(&mut self) {
        self.phase = HeaderPhase::Top;
        self.menu_open = false;
        self.last = ScrollSnapshot::default();
    }

    pub fn visibility(&self) -> VisibilityState {
        let header_shown = self.menu_open || self.phase != HeaderPhase::Hidden;
        VisibilityState {
            header_shown,
            bottom_nav_shown: !self.last.at_top && !self.menu_open,
            menu_open: self.menu_open,
        }
    }

    fn transition(&mut self) {
        let next = self.next_phase();
        if next != self.phase {
            tracing::trace!(from = ?self.phase, to = ?next, "header phase");
            self.phase = next;
        }
    }

    fn next_phase(&self) -> HeaderPhase {
        let snap = &self.last;
        if snap.at_top {
            return HeaderPhase::Top;
        }
        if self.menu_open {
            return HeaderPhase::VisibleScrolled;
        }
        match snap.direction {
            Some(ScrollDirection::Down) if snap.position > self.hide_after => HeaderPhase::Hidden,
            Some(ScrollDirection::Up) => HeaderPhase::VisibleScrolled,
            _ => match self.phase {
                HeaderPhase::Top => HeaderPhase::VisibleScrolled,
                current => current,
            },
        }
    }
}

impl Default for HeaderVisibilityController {
    fn default() -> Self {
        Self::new(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scroll::ScrollDirectionTracker;

    fn drive(positions: &[f32]) -> (ScrollDirectionTracker, HeaderVisibilityController, Vec<VisibilityState>) {
        let mut tracker = ScrollDirectionTracker::default();
        let mut header = HeaderVisibilityController::default();
        let states = positions
            .iter()
            .map(|&p| header.apply(tracker.on_scroll_sample(p)))
            .collect();
        (tracker, header, states)
    }

    #[test]
    fn test_near_top_always_shows_header_without_bottom_bar() {
        let (_, _, states) = drive(&[0.0, 10.0, 49.0, 3.0, 40.0, 0.0, 48.5]);
        for state in states {
            assert!(state.header_shown);
            assert!(!state.bottom_nav_shown);
        }
    }

    #[test]
    fn test_menu_open_keeps_header_shown() {
        let mut tracker = ScrollDirectionTracker::default();
        let mut header = HeaderVisibilityController::default();
        header.set_menu_open(true);
        for p in [0.0, 300.0, 900.0, 600.0, 2000.0, 120.0] {
            let state = header.apply(tracker.on_scroll_sample(p));
            assert!(state.header_shown);
            assert!(!state.bottom_nav_shown);
        }
    }

    #[test]
    fn test_down_then_dead_zone_stays_hidden() {
        let (_, header, states) = drive(&[0.0, 200.0, 205.0]);
        assert!(!states[1].header_shown);
        assert_eq!(states[1], states[2]);
        assert_eq!(header.phase(), HeaderPhase::Hidden);
    }

    #[test]
    fn test_scroll_up_reveals_header() {
        let (_, header, states) = drive(&[0.0, 200.0, 150.0]);
        assert!(!states[1].header_shown);
        assert!(states[2].header_shown);
        assert!(states[2].bottom_nav_shown);
        assert_eq!(header.phase(), HeaderPhase::VisibleScrolled);
    }

    #[test]
    fn test_hidden_keeps_bottom_bar() {
        let (_, _, states) = drive(&[0.0, 400.0]);
        assert!(!states[1].header_shown);
        assert!(states[1].bottom_nav_shown);
    }

    #[test]
    fn test_hysteresis_below_hide_threshold() {
        // Down past the top threshold but not past hide_after.
        let (_, header, states) = drive(&[0.0, 80.0]);
        assert!(states[1].header_shown);
        assert!(states[1].bottom_nav_shown);
        assert_eq!(header.phase(), HeaderPhase::VisibleScrolled);
    }

    #[test]
    fn test_opening_menu_while_hidden_shows_header() {
        let (_, mut header, _) = drive(&[0.0, 500.0]);
        assert_eq!(header.phase(), HeaderPhase::Hidden);

        let state = header.set_menu_open(true);
        assert!(state.header_shown);
        assert!(!state.bottom_nav_shown);

        // Closing resumes from the current position: still past hide_after, heading down.
        let state = header.set_menu_open(false);
        assert!(!state.header_shown);
        assert!(state.bottom_nav_shown);
        assert_eq!(header.phase(), HeaderPhase::Hidden);
    }

    #[test]
    fn test_menu_close_after_scrolling_up_keeps_header() {
        let (mut tracker, mut header, _) = drive(&[0.0, 500.0, 300.0]);
        header.set_menu_open(true);
        header.set_menu_open(false);
        assert_eq!(header.phase(), HeaderPhase::VisibleScrolled);

        // Dead-zone jitter keeps the current phase.
        let state = header.apply(tracker.on_scroll_sample(303.0));
        assert!(state.header_shown);
    }

    #[test]
    fn test_menu_close_then_scroll_down_hides() {
        let mut tracker = ScrollDirectionTracker::default();
        let mut header = HeaderVisibilityController::default();
        header.apply(tracker.on_scroll_sample(300.0));
        header.toggle_menu();
        header.toggle_menu();
        let state = header.apply(tracker.on_scroll_sample(450.0));
        assert!(!state.header_shown);
    }

    #[test]
    fn test_reset_restores_top() {
        let (_, mut header, _) = drive(&[0.0, 500.0]);
        header.set_menu_open(true);
        header.reset();
        assert_eq!(header.phase(), HeaderPhase::Top);
        let state = header.visibility();
        assert!(state.header_shown);
        assert!(!state.bottom_nav_shown);
        assert!(!state.menu_open);
    }
}
