use crate::domain::listing::{format_count, format_usd, group_thousands, Property, PLACEHOLDER_IMAGE};
use maud::{html, Markup};

/// One listing tile. The image swaps itself for the placeholder if it fails
/// to load, without touching the rest of the grid.
pub fn property_card(property: &Property) -> Markup {
    let on_image_error = format!("this.onerror=null;this.src='{PLACEHOLDER_IMAGE}';");

    html! {
        article class="property-card" data-listing-id=(property.id) {
            div class="property-card__image" {
                img
                    src=(property.primary_image())
                    alt=(property.address)
                    loading="lazy"
                    onerror=(on_image_error);

                @if !property.status.is_empty() {
                    span class="status-badge" { (property.status) }
                }
            }

            div class="property-card__body" {
                p class="price" { (format_usd(property.price)) }

                div class="address" {
                    p class="street" { (property.address) }
                    p class="locality" { (property.locality()) }
                }

                ul class="facts" {
                    li {
                        @match property.bedrooms {
                            Some(n) => (n),
                            None => "–",
                        }
                        " Beds"
                    }
                    li {
                        @match property.bathrooms {
                            Some(n) => (format_count(n)),
                            None => "–",
                        }
                        " Baths"
                    }
                    @if let Some(sqft) = property.sqft {
                        li { (group_thousands(sqft)) " SqFt" }
                    }
                }

                p class="courtesy" { "Courtesy of BeachesMLS" }
            }
        }
    }
}
