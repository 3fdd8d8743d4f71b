// templates/pages/home.rs

use crate::templates::layouts::desktop::QUOTE_MAILTO;
use crate::templates::{components::division_card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            section class="hero" {
                div class="container" {
                    h1 { "Custom Millwork, Crafted in Palm Beach" }
                    p class="lead" {
                        "Cabinetry, built-ins and architectural millwork for luxury residential "
                        "and commercial projects."
                    }
                }
            }

            section class="container divisions" {
                (division_card(
                    "Fabrication",
                    "From shop drawings to installation, one team owns your project.",
                    QUOTE_MAILTO,
                    "Get a Quote",
                ))
                (division_card(
                    "Real Estate",
                    "Search current MLS listings and get alerts when new homes hit the market.",
                    "/properties",
                    "Browse Properties",
                ))
                (division_card(
                    "Careers",
                    "Build a real estate career with purpose, mentorship, and commercial training.",
                    "/careers",
                    "Join the Team",
                ))
                (division_card(
                    "Off-Market Access",
                    "Private listings and business acquisitions that never hit the open market.",
                    "/off-market",
                    "Request Access",
                ))
            }
        },
    )
}
