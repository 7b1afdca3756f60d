//! Newsletter signup

use std::time::Instant;

use tui_input::Input;

use shared::ApiOutcome;
use tavola_client::ClientResult;

use super::alerts::{AlertKind, AlertSlot};
use super::reservation::GENERIC_RETRY_MSG;

#[derive(Debug, Default)]
pub struct NewsletterForm {
    pub email: Input,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Email to submit, trimmed
    pub fn submit_email(&self) -> String {
        self.email.value().trim().to_string()
    }

    /// Apply the subscription outcome: the server message becomes the
    /// alert, and the field resets only on success.
    pub fn apply_outcome(
        &mut self,
        result: ClientResult<ApiOutcome>,
        alert: &mut AlertSlot,
        now: Instant,
    ) {
        match result {
            Ok(outcome) => {
                let kind = if outcome.success {
                    AlertKind::Success
                } else {
                    AlertKind::Error
                };
                alert.show(outcome.message, kind, now);
                if outcome.success {
                    self.email.reset();
                }
            }
            Err(e) => {
                alert.show(GENERIC_RETRY_MSG, AlertKind::Error, now);
                tracing::error!("Error subscribing to newsletter: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavola_client::ClientError;

    #[test]
    fn email_is_trimmed_for_submission() {
        let mut form = NewsletterForm::new();
        form.email = Input::new("  ada@example.com  ".into());
        assert_eq!(form.submit_email(), "ada@example.com");
    }

    #[test]
    fn success_shows_the_server_message_and_resets() {
        let t0 = Instant::now();
        let mut form = NewsletterForm::new();
        form.email = Input::new("ada@example.com".into());
        let mut alert = AlertSlot::new();

        form.apply_outcome(Ok(ApiOutcome::ok("Welcome aboard!")), &mut alert, t0);

        assert_eq!(form.email.value(), "");
        let shown = alert.current().unwrap();
        assert_eq!(shown.kind, AlertKind::Success);
        assert_eq!(shown.message, "Welcome aboard!");
    }

    #[test]
    fn rejection_keeps_the_field() {
        let t0 = Instant::now();
        let mut form = NewsletterForm::new();
        form.email = Input::new("ada@example.com".into());
        let mut alert = AlertSlot::new();

        form.apply_outcome(Ok(ApiOutcome::rejected("Already subscribed")), &mut alert, t0);

        assert_eq!(form.email.value(), "ada@example.com");
        assert_eq!(alert.current().unwrap().kind, AlertKind::Error);
    }

    #[test]
    fn transport_failure_shows_the_generic_retry_message() {
        let t0 = Instant::now();
        let mut form = NewsletterForm::new();
        let mut alert = AlertSlot::new();

        form.apply_outcome(
            Err(ClientError::InvalidResponse("connection refused".into())),
            &mut alert,
            t0,
        );

        assert_eq!(alert.current().unwrap().message, GENERIC_RETRY_MSG);
    }
}
