use crate::domain::filters::SearchFilters;
use crate::domain::lead::LeadCapture;
use crate::domain::search::SearchState;
use crate::templates::components::{lead_dialog, listings_grid, loading_state, search_filters};
use crate::templates::desktop_layout;
use maud::{html, Markup, PreEscaped};

// Any request that will swap `#listings` first replaces its contents with the
// loading state, so old results or errors never sit beside the spinner.
const LOADING_SWAP_SCRIPT: &str = r#"
document.body.addEventListener('htmx:beforeRequest', function (evt) {
  var target = evt.detail.target;
  var loading = document.getElementById('listings-loading');
  if (target && target.id === 'listings' && loading) {
    target.innerHTML = loading.innerHTML;
  }
});
"#;

pub struct PropertiesVm<'a> {
    pub filters: &'a SearchFilters,
    pub search: &'a SearchState,
    pub capture: &'a LeadCapture,
    pub show_dialog: bool,
}

pub fn properties_page(vm: &PropertiesVm) -> Markup {
    desktop_layout(
        "Properties",
        html! {
            section class="hero properties-hero" {
                div class="container" {
                    p class="eyebrow" { "Palm Beach County Real Estate" }
                    h1 { "Find Your Dream Home in Palm Beach County" }
                    p class="lead" {
                        "Explore luxury homes, waterfront properties, and exceptional real estate "
                        "opportunities across Palm Beach County."
                    }

                    (search_filters(vm.filters))

                    (lead_dialog(vm.capture, vm.filters, vm.show_dialog))
                }
            }

            section class="listings-section" {
                div class="container" {
                    template id="listings-loading" {
                        (loading_state())
                    }
                    div id="listings" {
                        (listings_grid(&vm.search.view()))
                    }
                }
            }

            script { (PreEscaped(LOADING_SWAP_SCRIPT)) }
        },
    )
}
