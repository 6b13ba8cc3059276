//! Contact submission lifecycle.
//!
//! Owns the form and the in-flight flag. Only one submission may be pending
//! at a time; the flag is cleared when the submission settles, whatever its
//! outcome.

use std::fmt;

use log::{info, warn};

use super::form::ContactForm;
use super::notice::Notice;
use crate::api::models::ContactPayload;
use crate::error::ContactError;

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone)]
pub struct ContactController {
    form: ContactForm,
    recipient: String,
    in_flight: bool,
}

impl ContactController {
    /// `recipient` receives the messages and is offered as the fallback
    /// address when the relay fails.
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            form: ContactForm::new(),
            recipient: recipient.into(),
            in_flight: false,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    /// Validate the form and mark a submission as in flight.
    ///
    /// Nothing should be sent when this returns an error.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, ContactError> {
        if self.in_flight {
            return Err(ContactError::InFlight);
        }
        self.form.validate()?;

        self.in_flight = true;
        info!("submitting contact form from {}", self.form.email.trim());
        Ok(self.form.to_payload(&self.recipient))
    }

    /// Finish the pending submission and describe the outcome.
    ///
    /// The form is cleared on success and kept for resubmission otherwise.
    pub fn settle<E: fmt::Display>(&mut self, result: &Result<(), E>) -> Notice {
        self.in_flight = false;
        match result {
            Ok(()) => {
                self.form.clear();
                Notice::success(SENT_MESSAGE)
            }
            Err(e) => {
                warn!("contact submission failed: {}", e);
                Notice::error(self.failure_message())
            }
        }
    }

    pub fn failure_message(&self) -> String {
        format!(
            "Failed to send message. Please try again later or contact me directly at {}",
            self.recipient
        )
    }

    /// Notice for a submission that never left the form.
    pub fn rejection_notice(error: &ContactError) -> Notice {
        match error {
            ContactError::Validation(e) => Notice::error(e.to_string()),
            ContactError::InFlight => Notice::info("Sending..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::{FormField, ValidationError};
    use crate::error::{ApiError, AppError};

    fn controller_with_valid_form() -> ContactController {
        let mut controller = ContactController::new("owner@example.com");
        let form = controller.form_mut();
        form.set(FormField::Name, "Ada");
        form.set(FormField::Email, "ada@example.com");
        form.set(FormField::Subject, "Hi");
        form.set(FormField::Message, "Hello there");
        controller
    }

    fn relay_failure() -> Result<(), AppError> {
        Err(AppError::Api(ApiError::Rejected {
            status: 500,
            endpoint: "/f/form".to_string(),
        }))
    }

    #[test]
    fn test_begin_submit_sets_in_flight() {
        let mut controller = controller_with_valid_form();
        let payload = controller.begin_submit().expect("valid form");
        assert_eq!(payload.to, "owner@example.com");
        assert!(controller.is_in_flight());
        assert!(!controller.can_submit());
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut controller = controller_with_valid_form();
        controller.begin_submit().expect("valid form");

        let second = controller.begin_submit();
        assert!(matches!(second, Err(ContactError::InFlight)));

        controller.settle(&Ok::<(), AppError>(()));
        assert!(controller.can_submit());
    }

    #[test]
    fn test_invalid_form_does_not_start_submission() {
        let mut controller = controller_with_valid_form();
        controller.form_mut().set(FormField::Message, "");

        let result = controller.begin_submit();
        assert!(matches!(
            result,
            Err(ContactError::Validation(ValidationError::MissingFields))
        ));
        assert!(!controller.is_in_flight());
    }

    #[test]
    fn test_success_clears_form() {
        let mut controller = controller_with_valid_form();
        controller.begin_submit().expect("valid form");

        let notice = controller.settle(&Ok::<(), AppError>(()));
        assert_eq!(notice.message, SENT_MESSAGE);
        assert!(controller.form().is_blank());
    }

    #[test]
    fn test_failure_keeps_form_and_points_to_email() {
        let mut controller = controller_with_valid_form();
        controller.begin_submit().expect("valid form");

        let notice = controller.settle(&relay_failure());
        assert!(notice.is_error());
        assert!(notice.message.contains("owner@example.com"));
        assert_eq!(controller.form().name, "Ada");
        assert!(!controller.is_in_flight());
    }

    #[test]
    fn test_rejection_notices() {
        let notice = ContactController::rejection_notice(&ContactError::Validation(
            ValidationError::InvalidEmail,
        ));
        assert_eq!(notice.message, "Please enter a valid email address");
        assert!(notice.is_error());

        let notice = ContactController::rejection_notice(&ContactError::InFlight);
        assert!(!notice.is_error());
    }
}
