// Scroll direction tracking - turns raw scroll offsets into a direction signal
use crate::config::ScrollConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Thresholds shared by the tracker and the header controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    /// Positions strictly below this count as "at top".
    pub top: f32,
    /// Deltas within `[-dead_zone, dead_zone]` leave the direction unchanged.
    pub dead_zone: f32,
    /// The header only hides once the position is past this.
    pub hide_after: f32,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            top: 50.0,
            dead_zone: 10.0,
            hide_after: 100.0,
        }
    }
}

impl From<&ScrollConfig> for ScrollThresholds {
    fn from(config: &ScrollConfig) -> Self {
        Self {
            top: config.top_threshold,
            dead_zone: config.dead_zone,
            hide_after: config.hide_after,
        }
    }
}

/// Result of applying one or more samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSnapshot {
    pub position: f32,
    pub direction: Option<ScrollDirection>,
    pub at_top: bool,
}

impl Default for ScrollSnapshot {
    fn default() -> Self {
        Self {
            position: 0.0,
            direction: None,
            at_top: true,
        }
    }
}

pub struct ScrollDirectionTracker {
    thresholds: ScrollThresholds,
    last_position: f32,
    direction: Option<ScrollDirection>,
    at_top: bool,
    pending: Vec<f32>,
    frame_pending: bool,
}

impl ScrollDirectionTracker {
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self {
            thresholds,
            last_position: 0.0,
            direction: None,
            at_top: true,
            pending: Vec::new(),
            frame_pending: false,
        }
    }

    /// Apply a single sample immediately.
    pub fn on_scroll_sample(&mut self, position: f32) -> ScrollSnapshot {
        let position = sanitize(position);
        self.at_top = position < self.thresholds.top;

        if !self.at_top {
            let delta = position - self.last_position;
            if delta > self.thresholds.dead_zone {
                self.direction = Some(ScrollDirection::Down);
            } else if delta < -self.thresholds.dead_zone {
                self.direction = Some(ScrollDirection::Up);
            }
        }

        self.last_position = position;
        self.snapshot()
    }

    /// Buffer a sample for the next frame commit.
    ///
    /// Returns true when this sample opened a new burst, i.e. the caller
    /// has to schedule a frame. Later samples in the same burst return false.
    pub fn queue_sample(&mut self, position: f32) -> bool {
        self.pending.push(position);
        if self.frame_pending {
            false
        } else {
            self.frame_pending = true;
            true
        }
    }

    /// Commit buffered samples in arrival order.
    pub fn flush_frame(&mut self) -> Option<ScrollSnapshot> {
        self.frame_pending = false;
        if self.pending.is_empty() {
            return None;
        }

        let samples = std::mem::take(&mut self.pending);
        let mut snapshot = self.snapshot();
        for position in samples {
            snapshot = self.on_scroll_sample(position);
        }
        tracing::trace!(?snapshot, "scroll frame committed");
        Some(snapshot)
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            position: self.last_position,
            direction: self.direction,
            at_top: self.at_top,
        }
    }

    /// Back to the mount state: top of page, no direction, nothing queued.
    pub fn reset(&mut self) {
        self.last_position = 0.0;
        self.direction = None;
        self.at_top = true;
        self.pending.clear();
        self.frame_pending = false;
    }
}

impl Default for ScrollDirectionTracker {
    fn default() -> Self {
        Self::new(ScrollThresholds::default())
    }
}

fn sanitize(position: f32) -> f32 {
    if position.is_finite() {
        position.max(0.0)
    } else {
        0.0
    }
}
