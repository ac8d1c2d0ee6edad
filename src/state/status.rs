// Status line - transient error and info messages
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct StatusLine {
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
}

impl StatusLine {
    pub fn set_error(&mut self, message: String, now: Instant) {
        self.error_message = Some((message, now));
    }

    pub fn set_info(&mut self, message: String, now: Instant) {
        self.info_message = Some((message, now));
    }

    pub fn clear_expired_messages(&mut self, now: Instant, timeout: Duration) {
        let expired = |at: &Instant| now.saturating_duration_since(*at) >= timeout;
        if self.error_message.as_ref().is_some_and(|(_, at)| expired(at)) {
            self.error_message = None;
        }
        if self.info_message.as_ref().is_some_and(|(_, at)| expired(at)) {
            self.info_message = None;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.error_message.is_none() && self.info_message.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_expire_independently() {
        let t0 = Instant::now();
        let mut status = StatusLine::default();
        status.set_error("boom".into(), t0);
        status.set_info("saved".into(), t0 + Duration::from_secs(3));

        status.clear_expired_messages(t0 + Duration::from_secs(5), Duration::from_secs(5));
        assert!(status.error_message.is_none());
        assert!(status.info_message.is_some());

        status.clear_expired_messages(t0 + Duration::from_secs(8), Duration::from_secs(5));
        assert!(status.is_empty());
    }
}
