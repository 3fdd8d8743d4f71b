// src/domain/lead.rs

use crate::domain::filters::SearchFilters;
use crate::remote::{LeadSink, SaveLeadRequest};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

/// How long the success panel stays up before the dialog closes and resets.
pub const SUCCESS_CLOSE_DELAY: Duration = Duration::from_millis(2000);

pub const LEAD_FAILURE_MESSAGE: &str = "Please try again or contact us directly.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-()+]{10,}$").expect("valid phone pattern"));

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least ten characters, all digits, spaces, hyphens, parentheses or `+`.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LeadField {
    FullName,
    PhoneNumber,
    Email,
}

impl LeadField {
    pub fn name(self) -> &'static str {
        match self {
            LeadField::FullName => "full_name",
            LeadField::PhoneNumber => "phone_number",
            LeadField::Email => "email",
        }
    }
}

/// Raw text of the save-search form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
}

/// Per-field validation messages.
pub type LeadErrors = BTreeMap<LeadField, &'static str>;

impl LeadForm {
    pub fn validate(&self) -> LeadErrors {
        let mut errors = LeadErrors::new();

        if self.full_name.trim().is_empty() {
            errors.insert(LeadField::FullName, "Full name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(LeadField::Email, "Email is required");
        } else if !is_valid_email(email) {
            errors.insert(LeadField::Email, "Please enter a valid email address");
        }

        if !self.phone_number.is_empty() && !is_valid_phone(&self.phone_number) {
            errors.insert(LeadField::PhoneNumber, "Please enter a valid phone number");
        }

        errors
    }

    /// Normalized request body. `criteria` is copied, so later filter edits do
    /// not leak into a submitted lead.
    pub fn to_request(&self, criteria: &SearchFilters) -> SaveLeadRequest {
        let phone = self.phone_number.trim();
        SaveLeadRequest {
            full_name: self.full_name.trim().to_string(),
            phone_number: (!phone.is_empty()).then(|| phone.to_string()),
            email: self.email.trim().to_lowercase(),
            search_criteria: criteria.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// State of the save-search dialog.
#[derive(Debug, Default)]
pub struct LeadCapture {
    pub form: LeadForm,
    pub errors: LeadErrors,
    pub phase: LeadPhase,
    pub open: bool,
}

impl LeadCapture {
    /// A fresh, open dialog.
    pub fn open() -> Self {
        Self {
            open: true,
            ..Default::default()
        }
    }

    pub fn with_form(form: LeadForm) -> Self {
        Self {
            form,
            open: true,
            ..Default::default()
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase == LeadPhase::Submitting
    }

    /// Editing a field drops its stale message.
    pub fn clear_error(&mut self, field: LeadField) {
        self.errors.remove(&field);
    }

    /// Validate, then send to `sink`. Nothing goes over the network when
    /// validation fails, and a second call while one is in flight is ignored.
    pub fn submit(&mut self, sink: &dyn LeadSink, criteria: &SearchFilters) -> LeadPhase {
        if self.is_busy() {
            return self.phase;
        }

        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            self.phase = LeadPhase::Idle;
            return self.phase;
        }

        self.phase = LeadPhase::Submitting;
        let request = self.form.to_request(criteria);

        self.phase = match sink.save_lead(&request) {
            Ok(()) => {
                log::info!("saved search lead for {}", request.email);
                LeadPhase::Success
            }
            Err(err) => {
                log::error!("error saving lead: {err}");
                LeadPhase::Failed
            }
        };
        self.phase
    }

    /// What happens once `SUCCESS_CLOSE_DELAY` has elapsed after a success.
    pub fn close_after_success(&mut self) {
        self.open = false;
        self.phase = LeadPhase::Idle;
        self.form = LeadForm::default();
        self.errors.clear();
    }
}
