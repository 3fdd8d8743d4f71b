use crate::domain::search::SearchView;
use crate::templates::components::property_card;
use maud::{html, Markup};

const MLS_DISCLOSURE: &str = "Based on information from BeachesMLS and Stellar MLS. This \
    information may or may not include all listed expired, withdrawn, pending, or sold \
    properties. IDX information is provided exclusively for consumers' personal, \
    non-commercial use.";

/// Contents of `#listings`: exactly one of the result states.
pub fn listings_grid(view: &SearchView) -> Markup {
    match view {
        SearchView::NotSearched => search_prompt(),
        SearchView::Loading => loading_state(),
        SearchView::Error(message) => html! {
            div class="listings-state listings-error" role="alert" {
                h3 { "Unable to Load Listings" }
                p class="error-message" { (message) }
            }
        },
        SearchView::Empty => html! {
            div class="listings-state listings-empty" {
                h3 { "No Properties Found" }
                p { "Try adjusting your search criteria to see more results." }
            }
        },
        SearchView::Listings(listings) => html! {
            div class="listings-results" {
                p class="result-count" { "Showing " (listings.len()) " properties" }

                div class="property-grid" {
                    @for property in listings.iter() {
                        (property_card(property))
                    }
                }

                div class="mls-disclosure" {
                    p { (MLS_DISCLOSURE) }
                }
            }
        },
    }
}

/// Swapped into `#listings` as soon as a search request starts.
pub fn loading_state() -> Markup {
    html! {
        div class="listings-state listings-loading" aria-busy="true" {
            span class="spinner" aria-hidden="true" {}
            p { "Loading properties..." }
        }
    }
}

fn search_prompt() -> Markup {
    html! {
        div class="listings-state listings-intro" {
            h2 { "Start Your Property Search" }
            p {
                "Use the search filters above to find properties that match your criteria. "
                "We'll show you the latest listings from BeachesMLS."
            }
            button
                type="button"
                class="btn"
                hx-get="/properties/listings"
                hx-include="#search-filters"
                hx-target="#listings"
            {
                "View All Listings"
            }
        }
    }
}
