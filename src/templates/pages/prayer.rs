use crate::forms::prayer::{PrayerRequest, REQUEST_TYPES};
use crate::forms::{FieldErrors, Notice};
use crate::templates::components::{
    checkbox_field, input_field, notice_banner, select_field, textarea_field,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn faith_community_page(form: &PrayerRequest, errors: &FieldErrors, notice: Option<Notice>) -> Markup {
    desktop_layout(
        "Faith Community",
        html! {
            section class="hero bg-navy" {
                div class="container" {
                    p class="eyebrow" { "Heavenly Hands" }
                    h1 { "Faith in the Marketplace" }
                    p class="lead" {
                        "Join a community of believers who pray, partner, and prosper together."
                    }
                }
            }

            section class="container narrow" {
                h2 { "Request Prayer" }
                p class="muted" {
                    "Whether it's a deal, a property, your family, or your business, we'd be "
                    "honored to pray with you."
                }
                (prayer_form(form, errors, notice))
            }
        },
    )
}

pub fn prayer_form(form: &PrayerRequest, errors: &FieldErrors, notice: Option<Notice>) -> Markup {
    html! {
        form
            id="prayer-form"
            class="stack"
            method="post"
            action="/faith-community"
            hx-post="/faith-community"
            hx-target="this"
            hx-swap="outerHTML"
            hx-disabled-elt="find button[type='submit']"
            novalidate
        {
            (notice_banner(notice))

            div class="grid-2" {
                (input_field("name", "Your name", "text", &form.name, errors, true))
                (input_field("email", "Your email", "email", &form.email, errors, true))
            }
            (select_field("request_type", "Type of Request", "Type of Request", REQUEST_TYPES, &form.request_type, errors, false))
            (textarea_field("request", "Prayer request", "Share your prayer request...", &form.request, errors, true))
            (checkbox_field("confidential", "Keep my request confidential (shared only with prayer team)", form.confidential, errors))

            button type="submit" class="btn primary" { "Submit Prayer Request" }
        }
    }
}
