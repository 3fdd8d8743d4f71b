use crate::forms::off_market::{OffMarketForm, INTEREST_OPTIONS, SOURCE_OPTIONS};
use crate::forms::{FieldErrors, Notice};
use crate::templates::components::{
    checkbox_field, input_field, notice_banner, select_field, textarea_field,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn off_market_page(form: &OffMarketForm, errors: &FieldErrors, notice: Option<Notice>) -> Markup {
    desktop_layout(
        "Off-Market Access",
        html! {
            section class="hero bg-navy" {
                div class="container" {
                    p class="eyebrow" { "Exclusive Access" }
                    h1 { "Off-Market Access" }
                    p class="lead" {
                        "The best deals often never hit the market. Get access to exclusive opportunities."
                    }
                }
            }

            section class="container narrow" {
                h2 { "Request Access" }
                p class="muted" {
                    "Tell us what you are looking for. All requests are reviewed personally."
                }
                (off_market_form(form, errors, notice))
            }
        },
    )
}

/// The request form, swapped in place after each POST.
pub fn off_market_form(form: &OffMarketForm, errors: &FieldErrors, notice: Option<Notice>) -> Markup {
    html! {
        form
            id="off-market-form"
            class="stack"
            method="post"
            action="/off-market"
            hx-post="/off-market"
            hx-target="this"
            hx-swap="outerHTML"
            hx-disabled-elt="find button[type='submit']"
            novalidate
        {
            (notice_banner(notice))

            div class="grid-2" {
                (input_field("name", "Full Name", "text", &form.name, errors, true))
                (input_field("email", "Email", "email", &form.email, errors, true))
            }
            (input_field("phone", "Phone", "tel", &form.phone, errors, true))

            fieldset {
                legend { "I'm interested in" }
                @for (id, label) in INTEREST_OPTIONS {
                    label class="checkbox" {
                        input
                            type="checkbox"
                            name="interests"
                            value=(id)
                            checked[form.interests.iter().any(|i| i.as_str() == *id)];
                        " " (label)
                    }
                }
            }

            div class="grid-2" {
                (input_field("locations", "Preferred Locations", "text", &form.locations, errors, false))
                (input_field("budget", "Budget Range", "text", &form.budget, errors, false))
            }

            (textarea_field(
                "description",
                "What are you looking for?",
                "Describe your ideal property or business opportunity...",
                &form.description,
                errors,
                false,
            ))

            (select_field("source", "How did you hear about us?", "Select one", SOURCE_OPTIONS, &form.source, errors, false))

            (checkbox_field(
                "nda_acknowledged",
                "I understand that opportunities shared with me are confidential.",
                form.nda_acknowledged,
                errors,
            ))

            button type="submit" class="btn primary" { "Request Access" }
        }
    }
}
