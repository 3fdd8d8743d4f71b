use crate::domain::filters::SearchFilters;
use crate::domain::lead::{LeadCapture, LeadField, LeadPhase, LEAD_FAILURE_MESSAGE, SUCCESS_CLOSE_DELAY};
use crate::domain::listing::group_thousands;
use maud::{html, Markup};

// Drops the inline error for a field as soon as it is edited.
const CLEAR_FIELD_ERROR: &str = "this.removeAttribute('aria-invalid');\
    var e=document.getElementById(this.name+'-error');if(e){e.remove();}";

/// The "Save Search & Get Alerts" button and its dialog, shown already open
/// when `show` is set (plain form posts without htmx).
///
/// Opening the dialog fetches a fresh form so the criteria summary reflects
/// the filters as they are at that moment.
pub fn lead_dialog(capture: &LeadCapture, filters: &SearchFilters, show: bool) -> Markup {
    html! {
        div class="lead-capture-trigger" {
            button
                type="button"
                class="btn accent"
                hx-get="/properties/save-search"
                hx-include="#search-filters"
                hx-target="#lead-capture"
                hx-swap="innerHTML"
                onclick="document.getElementById('lead-dialog').showModal()"
            {
                "Save Search & Get Alerts"
            }
        }

        dialog id="lead-dialog" class="lead-dialog" open[show] {
            button
                type="button"
                class="dialog-close"
                aria-label="Close"
                onclick="document.getElementById('lead-dialog').close()"
            { "×" }

            div id="lead-capture" {
                (lead_capture_body(capture, filters))
            }
        }
    }
}

/// Dialog body for the current capture state.
pub fn lead_capture_body(capture: &LeadCapture, criteria: &SearchFilters) -> Markup {
    match capture.phase {
        LeadPhase::Success => lead_success(),
        _ => lead_form(capture, criteria),
    }
}

pub fn lead_form(capture: &LeadCapture, criteria: &SearchFilters) -> Markup {
    let busy = capture.is_busy();

    html! {
        div class="dialog-header" {
            h2 { "Save Your Search" }
            p class="muted" {
                "Get notified instantly when new properties matching your criteria become available."
            }
        }

        @if capture.phase == LeadPhase::Failed {
            div class="notice notice-destructive" role="alert" {
                strong { "Something went wrong" }
                p { (LEAD_FAILURE_MESSAGE) }
            }
        }

        form
            class="lead-form"
            method="post"
            action="/properties/save-search"
            hx-post="/properties/save-search"
            hx-target="#lead-capture"
            hx-swap="innerHTML"
            hx-include="#search-filters"
            hx-disabled-elt="find button[type='submit']"
            novalidate
        {
            (text_field(capture, LeadField::FullName, "Full Name", "text", "John Smith", &capture.form.full_name, true))
            (text_field(capture, LeadField::PhoneNumber, "Phone Number", "tel", "(561) 555-0123", &capture.form.phone_number, false))
            (text_field(capture, LeadField::Email, "Email Address", "email", "john@example.com", &capture.form.email, true))

            @if criteria.has_summary() {
                (criteria_summary(criteria))
            }

            button type="submit" class="btn primary w-full" disabled[busy] {
                @if busy {
                    span class="spinner" aria-hidden="true" {}
                    "Saving..."
                } @else {
                    "Save Search & Get Alerts"
                }
            }

            p class="microcopy" {
                "By submitting, you agree to receive property alerts. Unsubscribe anytime."
            }
        }
    }
}

/// Confirmation panel. After the grace period it loads the reset form, whose
/// response also closes the dialog.
pub fn lead_success() -> Markup {
    let trigger = format!("load delay:{}ms", SUCCESS_CLOSE_DELAY.as_millis());

    html! {
        div class="lead-success" {
            div class="success-icon" aria-hidden="true" { "✓" }
            h3 { "You're All Set!" }
            p class="muted" {
                "We'll notify you when new homes matching your criteria hit the market."
            }
            div
                hx-get="/properties/save-search/reset"
                hx-trigger=(trigger)
                hx-include="#search-filters"
                hx-target="#lead-capture"
                hx-swap="innerHTML"
            {}
        }
    }
}

fn text_field(
    capture: &LeadCapture,
    field: LeadField,
    label: &str,
    input_type: &str,
    placeholder: &str,
    value: &str,
    required: bool,
) -> Markup {
    let name = field.name();
    let error = capture.errors.get(&field);
    let error_id = format!("{name}-error");

    html! {
        div class="field" {
            label for=(name) {
                (label)
                @if required {
                    " " span class="required" { "*" }
                }
            }
            input
                type=(input_type)
                id=(name)
                name=(name)
                placeholder=(placeholder)
                value=(value)
                aria-invalid=[error.map(|_| "true")]
                aria-describedby=[error.map(|_| error_id.as_str())]
                oninput=(CLEAR_FIELD_ERROR);

            @if let Some(message) = error {
                p class="field-error" id=(error_id) { (message) }
            }
        }
    }
}

fn criteria_summary(criteria: &SearchFilters) -> Markup {
    html! {
        div class="criteria-summary" {
            p class="criteria-title" { "Your Search Criteria:" }
            ul {
                @if let Some(county) = &criteria.county {
                    li { "County: " (county) }
                }
                @if let Some(city) = &criteria.city {
                    li { "City: " (city) }
                }
                @if let Some(min) = criteria.min_price {
                    li { "Min Price: $" (group_thousands(min)) }
                }
                @if let Some(max) = criteria.max_price {
                    li { "Max Price: $" (group_thousands(max)) }
                }
                @if let Some(beds) = criteria.bedrooms {
                    li { "Bedrooms: " (beds) "+" }
                }
                @if let Some(baths) = criteria.bathrooms {
                    li { "Bathrooms: " (baths) "+" }
                }
            }
        }
    }
}
