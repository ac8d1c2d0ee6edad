// Page loader splash - shown on start, on route changes, and on explicit page loads
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct PageLoader {
    visible: bool,
    hide_at: Option<Instant>,
    initial: Duration,
    route_change: Duration,
}

impl PageLoader {
    pub fn new(initial: Duration, route_change: Duration) -> Self {
        Self {
            visible: false,
            hide_at: None,
            initial,
            route_change,
        }
    }

    pub fn on_start(&mut self, now: Instant) {
        self.show_for(now, self.initial);
    }

    pub fn on_route_change(&mut self, now: Instant) {
        self.show_for(now, self.route_change);
    }

    /// Show with no deadline; the next route change arms the timer.
    pub fn begin(&mut self) {
        self.visible = true;
        self.hide_at = None;
    }

    /// Drop the pending timer and hide.
    pub fn cancel(&mut self) {
        self.visible = false;
        self.hide_at = None;
    }

    /// Returns true while the splash should be drawn.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.hide_at {
            if now >= deadline {
                self.visible = false;
                self.hide_at = None;
            }
        }
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Time left on the timer, for scheduling a repaint.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.hide_at.map(|deadline| deadline.saturating_duration_since(now))
    }

    fn show_for(&mut self, now: Instant, duration: Duration) {
        self.visible = true;
        self.hide_at = Some(now + duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> PageLoader {
        PageLoader::new(Duration::from_millis(1000), Duration::from_millis(1100))
    }

    #[test]
    fn test_initial_splash_expires() {
        let mut loader = loader();
        let t0 = Instant::now();
        loader.on_start(t0);
        assert!(loader.tick(t0 + Duration::from_millis(999)));
        assert!(!loader.tick(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn test_route_change_uses_longer_timer() {
        let mut loader = loader();
        let t0 = Instant::now();
        loader.on_route_change(t0);
        assert!(loader.tick(t0 + Duration::from_millis(1050)));
        assert!(!loader.tick(t0 + Duration::from_millis(1100)));
    }

    #[test]
    fn test_begin_holds_until_route_change_timer() {
        let mut loader = loader();
        let t0 = Instant::now();
        loader.begin();
        assert!(loader.tick(t0 + Duration::from_secs(60)));
        assert_eq!(loader.remaining(t0), None);

        loader.on_route_change(t0);
        assert_eq!(loader.remaining(t0), Some(Duration::from_millis(1100)));
        assert!(!loader.tick(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn test_cancel_clears_timer() {
        let mut loader = loader();
        let t0 = Instant::now();
        loader.on_start(t0);
        loader.cancel();
        assert!(!loader.is_visible());
        assert_eq!(loader.remaining(t0), None);
        loader.cancel();
        assert!(!loader.tick(t0));
    }
}
