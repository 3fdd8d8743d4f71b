pub mod careers;
mod formspree;
pub mod off_market;
pub mod prayer;

pub use formspree::{FormRelay, FormspreeRelay};

use crate::domain::lead::{is_valid_email, is_valid_phone};
use serde_json::Value;
use std::collections::BTreeMap;

/// Validation messages keyed by form field name.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Banner shown above a relayed form after a POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub success: bool,
    pub title: &'static str,
    pub message: &'static str,
}

impl Notice {
    pub const fn submitted(title: &'static str, message: &'static str) -> Self {
        Self {
            success: true,
            title,
            message,
        }
    }

    pub const fn failed(message: &'static str) -> Self {
        Self {
            success: false,
            title: "Error",
            message,
        }
    }
}

/// A site form that is handed to the form relay as JSON.
pub trait RelayForm: Default {
    /// Sent as `subject` so the inbox can tell the forms apart.
    const SUBJECT: &'static str;
    const SUBMITTED: Notice;
    const FAILED: Notice;

    fn from_pairs(pairs: &[(String, String)]) -> Self;
    fn validate(&self) -> FieldErrors;
    fn payload(&self) -> Value;
}

/// Relay a valid form. On success the caller gets an empty form back; on
/// failure the input is kept so nothing has to be retyped.
pub fn submit<F: RelayForm>(form: F, relay: &dyn FormRelay) -> (F, Notice) {
    match relay.submit(&form.payload()) {
        Ok(()) => {
            log::info!("{} relayed", F::SUBJECT);
            (F::default(), F::SUBMITTED)
        }
        Err(err) => {
            log::error!("{} failed: {err}", F::SUBJECT);
            (form, F::FAILED)
        }
    }
}

/// Shared checks for the name/email/phone block most forms start with.
pub(crate) fn check_name(errors: &mut FieldErrors, name: &str) {
    if name.trim().is_empty() {
        errors.insert("name", "Name is required");
    }
}

pub(crate) fn check_email(errors: &mut FieldErrors, email: &str) {
    let email = email.trim();
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.insert("email", "Please enter a valid email address");
    }
}

pub(crate) fn check_phone(errors: &mut FieldErrors, phone: &str) {
    let phone = phone.trim();
    if phone.is_empty() {
        errors.insert("phone", "Phone is required");
    } else if !is_valid_phone(phone) {
        errors.insert("phone", "Please enter a valid phone number");
    }
}

/// Keep `value` only when it is one of the offered option ids.
pub(crate) fn known_option(options: &[(&str, &str)], value: &str) -> String {
    if options.iter().any(|(id, _)| *id == value) {
        value.to_string()
    } else {
        String::new()
    }
}
