// src/forms/prayer.rs

use crate::forms::{check_email, check_name, known_option, FieldErrors, Notice, RelayForm};
use serde_json::{json, Value};

pub const REQUEST_TYPES: &[(&str, &str)] = &[
    ("property", "Property/Real Estate"),
    ("business", "Business Deal"),
    ("personal", "Personal"),
    ("family", "Family"),
    ("career", "Career"),
    ("other", "Other"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrayerRequest {
    pub name: String,
    pub email: String,
    pub request_type: String,
    pub request: String,
    pub confidential: bool,
}

impl RelayForm for PrayerRequest {
    const SUBJECT: &'static str = "Prayer Request";
    const SUBMITTED: Notice = Notice::submitted(
        "Prayer Request Received",
        "Our team will be praying for you. God hears your prayers.",
    );
    const FAILED: Notice = Notice::failed("Failed to submit prayer request. Please try again.");

    fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut form = PrayerRequest::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value.clone(),
                "email" => form.email = value.clone(),
                "request_type" => form.request_type = known_option(REQUEST_TYPES, value),
                "request" => form.request = value.clone(),
                "confidential" => form.confidential = !value.is_empty(),
                _ => {}
            }
        }
        form
    }

    // The request type is optional.
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_name(&mut errors, &self.name);
        check_email(&mut errors, &self.email);

        if self.request.trim().is_empty() {
            errors.insert("request", "Please share your prayer request");
        }

        errors
    }

    fn payload(&self) -> Value {
        json!({
            "name": self.name.trim(),
            "email": self.email.trim().to_lowercase(),
            "requestType": self.request_type,
            "request": self.request.trim(),
            "confidential": self.confidential,
            "subject": Self::SUBJECT,
        })
    }
}
