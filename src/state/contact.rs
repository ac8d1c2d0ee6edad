// Contact modal state - form fields, validation and open/close timing
use chrono::{DateTime, Local};
use serde::Serialize;
use std::time::{Duration, Instant};

pub const CLOSE_ANIMATION: Duration = Duration::from_millis(400);
pub const SUCCESS_AUTO_CLOSE: Duration = Duration::from_millis(1800);
pub const MISSING_FIELDS: &str = "Please provide your name, email and a preferred date/time.";
pub const SEND_FAILED: &str = "Failed to send message. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub best_time: String,
    pub message: String,
}

/// What gets handed to the outbox.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub best_time: String,
    pub message: String,
    pub submitted_at: DateTime<Local>,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        let best_time = self.best_time.trim();
        if name.is_empty() || email.is_empty() || best_time.is_empty() {
            return Err(MISSING_FIELDS);
        }

        let message = if self.message.trim().is_empty() {
            format!("Preferred time: {best_time}")
        } else {
            self.message.clone()
        };

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
            best_time: best_time.to_string(),
            message,
            submitted_at: Local::now(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Open,
    Closing { until: Instant },
}

#[derive(Debug)]
pub struct ContactModal {
    pub form: ContactForm,
    pub phase: ModalPhase,
    pub sending: bool,
    pub success: bool,
    pub error: Option<String>,
    auto_close_at: Option<Instant>,
}

impl Default for ContactModal {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            phase: ModalPhase::Closed,
            sending: false,
            success: false,
            error: None,
            auto_close_at: None,
        }
    }
}

impl ContactModal {
    pub fn open(&mut self) {
        self.phase = ModalPhase::Open;
        self.success = false;
        self.error = None;
    }

    /// Starts the close animation; a no-op unless open.
    pub fn request_close(&mut self, now: Instant) {
        if self.phase == ModalPhase::Open {
            self.phase = ModalPhase::Closing {
                until: now + CLOSE_ANIMATION,
            };
            self.auto_close_at = None;
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// Open or still animating out.
    pub fn is_visible(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Returns the submission to send, or sets the validation error.
    pub fn submit(&mut self) -> Option<ContactSubmission> {
        self.error = None;
        if self.sending {
            return None;
        }
        match self.form.validate() {
            Ok(submission) => {
                self.sending = true;
                Some(submission)
            }
            Err(message) => {
                self.error = Some(message.to_string());
                None
            }
        }
    }

    pub fn on_sent(&mut self, now: Instant) {
        self.sending = false;
        self.success = true;
        self.form = ContactForm::default();
        self.auto_close_at = Some(now + SUCCESS_AUTO_CLOSE);
    }

    pub fn on_send_failed(&mut self) {
        self.sending = false;
        self.error = Some(SEND_FAILED.to_string());
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.auto_close_at {
            if now >= at {
                self.request_close(now);
            }
        }
        if let ModalPhase::Closing { until } = self.phase {
            if now >= until {
                self.phase = ModalPhase::Closed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            best_time: "Friday 3pm".into(),
            message: String::new(),
        }
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.best_time = "  ".into();
        assert_eq!(form.validate(), Err(MISSING_FIELDS));
    }

    #[test]
    fn test_empty_message_defaults_to_preferred_time() {
        let submission = filled().validate().expect("valid form");
        assert_eq!(submission.message, "Preferred time: Friday 3pm");

        let mut form = filled();
        form.message = "Interested in the bungalow".into();
        assert_eq!(
            form.validate().expect("valid form").message,
            "Interested in the bungalow"
        );
    }

    #[test]
    fn test_submit_sets_error_on_invalid_form() {
        let mut modal = ContactModal::default();
        modal.open();
        assert_eq!(modal.submit(), None);
        assert_eq!(modal.error.as_deref(), Some(MISSING_FIELDS));
        assert!(!modal.sending);
    }

    #[test]
    fn test_success_clears_form_and_auto_closes() {
        let t0 = Instant::now();
        let mut modal = ContactModal::default();
        modal.open();
        modal.form = filled();
        assert!(modal.submit().is_some());
        assert!(modal.sending);
        assert_eq!(modal.submit(), None);

        modal.on_sent(t0);
        assert!(modal.success);
        assert_eq!(modal.form, ContactForm::default());

        modal.tick(t0 + Duration::from_millis(1799));
        assert!(modal.is_open());
        let closing_at = t0 + SUCCESS_AUTO_CLOSE;
        modal.tick(closing_at);
        assert!(!modal.is_open());
        assert!(modal.is_visible());
        modal.tick(closing_at + CLOSE_ANIMATION);
        assert!(!modal.is_visible());
    }

    #[test]
    fn test_failed_send_reports_error() {
        let mut modal = ContactModal::default();
        modal.open();
        modal.form = filled();
        modal.submit();
        modal.on_send_failed();
        assert!(!modal.sending);
        assert_eq!(modal.error.as_deref(), Some(SEND_FAILED));
        assert_eq!(modal.form, filled());
    }

    #[test]
    fn test_close_request_only_when_open() {
        let t0 = Instant::now();
        let mut modal = ContactModal::default();
        modal.request_close(t0);
        assert_eq!(modal.phase, ModalPhase::Closed);
        modal.open();
        modal.request_close(t0);
        modal.request_close(t0 + Duration::from_millis(300));
        assert_eq!(
            modal.phase,
            ModalPhase::Closing {
                until: t0 + CLOSE_ANIMATION
            }
        );
    }
}
