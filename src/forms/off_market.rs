// src/forms/off_market.rs

use crate::forms::{
    check_email, check_name, check_phone, known_option, FieldErrors, Notice, RelayForm,
};
use serde_json::{json, Value};

pub const INTEREST_OPTIONS: &[(&str, &str)] = &[
    ("residential", "Residential Properties"),
    ("commercial", "Commercial Properties"),
    ("business", "Business Acquisitions"),
    ("land", "Land/Development"),
];

pub const SOURCE_OPTIONS: &[(&str, &str)] = &[
    ("referral", "Referral"),
    ("google", "Google Search"),
    ("social", "Social Media"),
    ("event", "Event/Networking"),
    ("other", "Other"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffMarketForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interests: Vec<String>,
    pub locations: String,
    pub budget: String,
    pub description: String,
    pub source: String,
    pub nda_acknowledged: bool,
}

impl RelayForm for OffMarketForm {
    const SUBJECT: &'static str = "Off-Market Access Request";
    const SUBMITTED: Notice = Notice::submitted(
        "Request Submitted",
        "A member of our team will review your profile and reach out within 48 hours.",
    );
    const FAILED: Notice = Notice::failed("Failed to submit request. Please try again.");

    /// `interests` may repeat; unknown interest ids are dropped.
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut form = OffMarketForm::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value.clone(),
                "email" => form.email = value.clone(),
                "phone" => form.phone = value.clone(),
                "interests" => {
                    let known = INTEREST_OPTIONS.iter().any(|(id, _)| *id == value.as_str());
                    if known && !form.interests.contains(value) {
                        form.interests.push(value.clone());
                    }
                }
                "locations" => form.locations = value.clone(),
                "budget" => form.budget = value.clone(),
                "description" => form.description = value.clone(),
                "source" => form.source = known_option(SOURCE_OPTIONS, value),
                "nda_acknowledged" => form.nda_acknowledged = !value.is_empty(),
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

        if !self.nda_acknowledged {
            errors.insert(
                "nda_acknowledged",
                "Please acknowledge the confidentiality terms",
            );
        }

        errors
    }

    fn payload(&self) -> Value {
        json!({
            "name": self.name.trim(),
            "email": self.email.trim().to_lowercase(),
            "phone": self.phone.trim(),
            "interests": self.interests.join(", "),
            "locations": self.locations.trim(),
            "budget": self.budget.trim(),
            "description": self.description.trim(),
            "source": self.source,
            "ndaAcknowledged": self.nda_acknowledged,
            "subject": Self::SUBJECT,
        })
    }
}
