// src/forms/careers.rs

use crate::forms::{
    check_email, check_name, check_phone, known_option, FieldErrors, Notice, RelayForm,
};
use serde_json::{json, Value};

pub const LICENSE_OPTIONS: &[(&str, &str)] = &[
    ("active", "Active Florida License"),
    ("pending", "License Pending"),
    ("none", "Not Yet Licensed"),
];

pub const EXPERIENCE_OPTIONS: &[(&str, &str)] = &[
    ("0", "0 (New to Real Estate)"),
    ("1-2", "1-2 years"),
    ("3-5", "3-5 years"),
    ("5-10", "5-10 years"),
    ("10+", "10+ years"),
];

pub const INTEREST_OPTIONS: &[(&str, &str)] = &[
    ("residential", "Residential"),
    ("commercial", "Commercial"),
    ("both", "Both"),
];

/// Agent application from the careers page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license_status: String,
    pub experience: String,
    pub interest: String,
    pub why_chosen: String,
    pub about: String,
    pub faith_aligned: bool,
}

impl RelayForm for CareerApplication {
    const SUBJECT: &'static str = "Career Application";
    const SUBMITTED: Notice = Notice::submitted(
        "Application Submitted!",
        "Thank you for your interest in joining Chosen. We'll review your application and be in touch soon.",
    );
    const FAILED: Notice = Notice::failed("Failed to submit application. Please try again.");

    /// Select values outside the offered options are treated as unselected.
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut form = CareerApplication::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value.clone(),
                "email" => form.email = value.clone(),
                "phone" => form.phone = value.clone(),
                "license_status" => form.license_status = known_option(LICENSE_OPTIONS, value),
                "experience" => form.experience = known_option(EXPERIENCE_OPTIONS, value),
                "interest" => form.interest = known_option(INTEREST_OPTIONS, value),
                "why_chosen" => form.why_chosen = value.clone(),
                "about" => form.about = value.clone(),
                "faith_aligned" => form.faith_aligned = !value.is_empty(),
                _ => {}
            }
        }
        form
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_name(&mut errors, &self.name);
        check_email(&mut errors, &self.email);
        check_phone(&mut errors, &self.phone);

        if self.license_status.is_empty() {
            errors.insert("license_status", "Please select your license status");
        }
        if !self.faith_aligned {
            errors.insert(
                "faith_aligned",
                "Please confirm you are aligned with a faith-driven culture",
            );
        }

        errors
    }

    fn payload(&self) -> Value {
        json!({
            "name": self.name.trim(),
            "email": self.email.trim().to_lowercase(),
            "phone": self.phone.trim(),
            "licenseStatus": self.license_status,
            "experience": self.experience,
            "interest": self.interest,
            "whyChosen": self.why_chosen.trim(),
            "about": self.about.trim(),
            "faithAligned": self.faith_aligned,
            "subject": Self::SUBJECT,
        })
    }
}
