use crate::domain::filters::{available_cities, counties, SearchFilters, ALL, ANY};
use crate::domain::listing::group_thousands;
use maud::{html, Markup};

const PROPERTY_TYPES: &[&str] = &["Residential", "Condo", "Townhouse"];

const MIN_COUNTS: std::ops::RangeInclusive<u32> = 1..=5;

/// The search bar. Submitting swaps `#listings` in place; without htmx it
/// falls back to a plain GET of the whole page.
pub fn search_filters(filters: &SearchFilters) -> Markup {
    html! {
        form
            id="search-filters"
            class="search-filters glass"
            method="get"
            action="/properties"
            hx-get="/properties/listings"
            hx-target="#listings"
            hx-swap="innerHTML"
            hx-sync="this:replace"
            hx-disabled-elt="find button[type='submit']"
        {
            input type="hidden" name="search" value="1";

            div class="field" {
                label for="county" { "County" }
                select
                    id="county"
                    name="county"
                    hx-get="/properties/cities"
                    hx-trigger="change"
                    hx-target="#city-field"
                    hx-swap="outerHTML"
                {
                    option value=(ALL) selected[filters.county.is_none()] { "All Counties" }
                    @for county in counties() {
                        option value=(county) selected[filters.county.as_deref() == Some(*county)] {
                            (county) " County"
                        }
                    }
                }
            }

            (city_select(filters.county.as_deref(), filters.city.as_deref()))

            (price_input("min_price", "Min Price", "No Min", filters.min_price))
            (price_input("max_price", "Max Price", "No Max", filters.max_price))

            (count_select("bedrooms", "Beds", filters.bedrooms))
            (count_select("bathrooms", "Baths", filters.bathrooms))

            div class="field" {
                label for="property_type" { "Property Type" }
                select id="property_type" name="property_type" {
                    option value=(ALL) selected[filters.property_type.is_none()] { "All Types" }
                    @for kind in PROPERTY_TYPES {
                        option value=(kind) selected[filters.property_type.as_deref() == Some(*kind)] {
                            (kind)
                        }
                    }
                }
            }

            div class="field field-action" {
                button type="submit" class="btn primary" {
                    span class="btn-text" { "Search" }
                    span class="spinner" aria-hidden="true" {}
                }
            }
        }
    }
}

/// City selector for `county`. Rendered on its own when the county changes,
/// which is what resets the city to "All Cities".
pub fn city_select(county: Option<&str>, selected: Option<&str>) -> Markup {
    html! {
        div id="city-field" class="field" {
            label for="city" { "City" }
            select id="city" name="city" {
                option value=(ALL) selected[selected.is_none()] { "All Cities" }
                @for city in available_cities(county) {
                    option value=(city) selected[selected == Some(city)] { (city) }
                }
            }
        }
    }
}

fn price_input(name: &str, label: &str, placeholder: &str, value: Option<u64>) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            div class="input-prefixed" {
                span class="prefix" { "$" }
                input
                    type="text"
                    id=(name)
                    name=(name)
                    inputmode="numeric"
                    placeholder=(placeholder)
                    value=(value.map(group_thousands).unwrap_or_default());
            }
        }
    }
}

fn count_select(name: &str, label: &str, value: Option<u32>) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            select id=(name) name=(name) {
                option value=(ANY) selected[value.is_none()] { "Any" }
                @for n in MIN_COUNTS {
                    option value=(n) selected[value == Some(n)] { (n) "+" }
                }
            }
        }
    }
}
