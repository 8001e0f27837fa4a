use std::sync::OnceLock;

use log::{debug, info};
use regex::Regex;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// One per submit attempt; the message is what the user sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStarted {
    Sending,
    AlreadySubmitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageSent;

/// Whitespace as browsers define it for `\s`: Unicode `Zs` plus line terminators and
/// the BOM. Rust's `\s` differs (it includes U+0085 and omits U+FEFF).
const WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            let ws = WHITESPACE;
            Regex::new(&format!(r"^[^{ws}@]+@[^{ws}@]+\.[^{ws}@]+$")).expect("email pattern")
        })
        .is_match(email)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    submitting: bool,
}

impl ContactForm {
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Validates and flips into the sending state. The caller owns the delay and
    /// must call [`ContactForm::complete`] once it elapses.
    pub fn submit(&mut self) -> Result<SubmitStarted, ContactError> {
        if self.submitting {
            debug!("Ignoring submit while a send is in flight");
            return Ok(SubmitStarted::AlreadySubmitting);
        }
        self.validate()?;
        self.submitting = true;
        info!("Sending contact message");
        Ok(SubmitStarted::Sending)
    }

    /// Finishes an in-flight send: clears the fields and reports success. `None` if nothing was in flight.
    pub fn complete(&mut self) -> Option<MessageSent> {
        if !self.submitting {
            return None;
        }
        *self = Self::default();
        info!("Contact message sent");
        Some(MessageSent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.update_field(ContactField::Name, name);
        form.update_field(ContactField::Email, email);
        form.update_field(ContactField::Message, message);
        form
    }

    #[test]
    fn empty_name_is_missing_fields() {
        let mut form = filled("", "a@b.com", "hi");
        assert_eq!(form.submit(), Err(ContactError::MissingFields));
        assert!(!form.is_submitting());
    }

    #[test]
    fn missing_fields_is_checked_before_email_format() {
        let mut form = filled("Jo", "not-an-email", "");
        assert_eq!(form.submit(), Err(ContactError::MissingFields));
    }

    #[test]
    fn bad_email_is_invalid_email() {
        let mut form = filled("Jo", "not-an-email", "hi");
        assert_eq!(form.submit(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn failed_validation_keeps_field_values() {
        let mut form = filled("Jo", "jo@nowhere", "hi");
        assert_eq!(form.submit(), Err(ContactError::InvalidEmail));
        assert_eq!(form.field(ContactField::Name), "Jo");
        assert_eq!(form.field(ContactField::Email), "jo@nowhere");
        assert_eq!(form.field(ContactField::Message), "hi");
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn email_whitespace_follows_browser_rules() {
        assert!(!is_valid_email("a\u{FEFF}b@c.com"));
        assert!(!is_valid_email("a\u{A0}b@c.com"));
        assert!(!is_valid_email("a@b\u{3000}c.com"));
        assert!(!is_valid_email("a\tb@c.com"));
        assert!(is_valid_email("a\u{85}b@c.com"));
    }

    #[test]
    fn valid_submit_sends_then_resets() {
        let mut form = filled("Jo", "a@b.com", "hi");
        assert_eq!(form.submit(), Ok(SubmitStarted::Sending));
        assert!(form.is_submitting());

        assert_eq!(form.complete(), Some(MessageSent));
        assert!(!form.is_submitting());
        assert_eq!(form, ContactForm::default());
        assert_eq!(form.complete(), None);
    }

    #[test]
    fn second_submit_while_sending_is_a_no_op() {
        let mut form = filled("Jo", "a@b.com", "hi");
        form.submit().unwrap();
        let in_flight = form.clone();

        assert_eq!(form.submit(), Ok(SubmitStarted::AlreadySubmitting));
        assert_eq!(form, in_flight);

        assert_eq!(form.complete(), Some(MessageSent));
        assert_eq!(form.complete(), None);
    }

    #[test]
    fn complete_without_submit_reports_nothing() {
        let mut form = filled("Jo", "a@b.com", "hi");
        assert_eq!(form.complete(), None);
        assert_eq!(form.field(ContactField::Name), "Jo");
    }
}
