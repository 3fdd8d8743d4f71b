use crate::forms::careers::{
    CareerApplication, EXPERIENCE_OPTIONS, INTEREST_OPTIONS, LICENSE_OPTIONS,
};
use crate::forms::{FieldErrors, Notice};
use crate::templates::components::{
    checkbox_field, input_field, notice_banner, select_field, textarea_field,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

const CULTURE: &[(&str, &str)] = &[
    ("Faith-Driven Culture", "We pray together, grow together, and win together."),
    ("Commercial Training", "Most residential agents never get commercial training. Here, you will."),
    ("Mentorship & Support", "Learn from experienced brokers and entrepreneurs who want to see you succeed."),
    ("Network Access", "Attorneys, lenders, title companies, and private investors."),
];

pub fn careers_page(form: &CareerApplication, errors: &FieldErrors, notice: Option<Notice>) -> Markup {
    desktop_layout(
        "Careers",
        html! {
            section class="hero bg-navy" {
                div class="container" {
                    p class="eyebrow" { "Join Our Team" }
                    h1 { "Join the Chosen Team" }
                    p class="lead" {
                        "Build a real estate career with purpose, mentorship, and kingdom impact."
                    }
                }
            }

            section class="container culture-grid" {
                @for (title, blurb) in CULTURE {
                    div class="card" {
                        h3 { (title) }
                        p { (blurb) }
                    }
                }
            }

            section class="container narrow" {
                h2 { "Apply to Join Chosen" }
                p class="muted" { "Take the first step toward a purpose-driven career." }
                (careers_form(form, errors, notice))
            }
        },
    )
}

pub fn careers_form(form: &CareerApplication, errors: &FieldErrors, notice: Option<Notice>) -> Markup {
    html! {
        form
            id="careers-form"
            class="stack"
            method="post"
            action="/careers"
            hx-post="/careers"
            hx-target="this"
            hx-swap="outerHTML"
            hx-disabled-elt="find button[type='submit']"
            novalidate
        {
            (notice_banner(notice))

            div class="grid-2" {
                (input_field("name", "Name", "text", &form.name, errors, true))
                (input_field("email", "Email", "email", &form.email, errors, true))
            }
            (input_field("phone", "Phone", "tel", &form.phone, errors, true))

            div class="grid-2" {
                (select_field("license_status", "License Status", "Select status", LICENSE_OPTIONS, &form.license_status, errors, true))
                (select_field("experience", "Years of Experience", "Select experience", EXPERIENCE_OPTIONS, &form.experience, errors, false))
            }
            (select_field("interest", "Primary Interest", "Select focus area", INTEREST_OPTIONS, &form.interest, errors, false))

            (textarea_field("why_chosen", "What attracted you to Chosen?", "", &form.why_chosen, errors, false))
            (textarea_field("about", "Tell us about yourself and your goals", "", &form.about, errors, false))

            p class="muted" {
                "Email your resume to "
                a href="mailto:realestate@chosenre.com?subject=Career%20Application%20-%20Resume" {
                    "realestate@chosenre.com"
                }
            }

            (checkbox_field("faith_aligned", "I'm aligned with a faith-driven culture and values", form.faith_aligned, errors))

            button type="submit" class="btn primary w-full" { "Submit Application" }
        }
    }
}
