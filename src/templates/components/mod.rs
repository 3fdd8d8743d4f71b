pub mod card;
pub mod error;
pub mod form_fields;
pub mod lead_capture;
pub mod listings_grid;
pub mod property_card;
pub mod search_filters;

pub use card::division_card;
pub use error::error_page;
pub use form_fields::{
    checkbox_field, input_field, notice_banner, select_field, textarea_field,
};
pub use lead_capture::{lead_capture_body, lead_dialog, lead_form, lead_success};
pub use listings_grid::{listings_grid, loading_state};
pub use property_card::property_card;
pub use search_filters::{city_select, search_filters};

/// Stand-in for listing photos that are missing or fail to load.
pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300" viewBox="0 0 400 300"><rect width="400" height="300" fill="#e5e7eb"/><path d="M150 190l50-50 50 50v40h-100z" fill="#9ca3af"/><rect x="188" y="200" width="24" height="30" fill="#e5e7eb"/></svg>"##;
