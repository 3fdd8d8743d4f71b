// src/domain/filters.rs

use crate::geos::{cities_in, CITIES_BY_COUNTY, COUNTIES};
use serde::Serialize;

/// Selector value meaning "no selection" for county, city and property type.
pub const ALL: &str = "all";

/// Selector value meaning "no minimum" for bedrooms and bathrooms.
pub const ANY: &str = "any";

/// The user's current search criteria.
///
/// Fields are only changed through the setters below so that county and city
/// stay consistent. Serializes in camelCase with unset fields omitted, which is
/// the shape the lead store expects for `searchCriteria`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
}

impl SearchFilters {
    /// Sets the county and always clears the city.
    pub fn set_county(&mut self, value: &str) {
        self.county = selection(value, ALL);
        self.city = None;
    }

    /// Sets the city. Membership in the county's list is not checked.
    pub fn set_city(&mut self, value: &str) {
        self.city = selection(value, ALL);
    }

    pub fn set_min_price(&mut self, raw: &str) {
        self.min_price = sanitize_price(raw);
    }

    pub fn set_max_price(&mut self, raw: &str) {
        self.max_price = sanitize_price(raw);
    }

    pub fn set_bedrooms(&mut self, raw: &str) {
        self.bedrooms = sanitize_count(raw);
    }

    pub fn set_bathrooms(&mut self, raw: &str) {
        self.bathrooms = sanitize_count(raw);
    }

    pub fn set_property_type(&mut self, value: &str) {
        self.property_type = selection(value, ALL);
    }

    /// Rebuild filters from submitted form fields.
    ///
    /// County is applied before city, otherwise the county setter would wipe
    /// the submitted city.
    pub fn from_fields<'a, F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let mut filters = SearchFilters::default();
        filters.set_county(get("county").unwrap_or(ALL));
        filters.set_city(get("city").unwrap_or(ALL));
        filters.set_min_price(get("min_price").unwrap_or_default());
        filters.set_max_price(get("max_price").unwrap_or_default());
        filters.set_bedrooms(get("bedrooms").unwrap_or(ANY));
        filters.set_bathrooms(get("bathrooms").unwrap_or(ANY));
        filters.set_property_type(get("property_type").unwrap_or(ALL));
        filters
    }

    /// Cities to offer in the city selector for the current county.
    pub fn available_cities(&self) -> Vec<&'static str> {
        available_cities(self.county.as_deref())
    }

    /// True when the criteria summary in the lead dialog has anything to show.
    pub fn has_summary(&self) -> bool {
        self.county.is_some()
            || self.city.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
    }
}

/// Strip every non-digit character and parse what is left.
///
/// Malformed input never errors: `"12a3,456"` is `123456`, `""` and `"abc"` are
/// `None`. Values too large for `u64` saturate at `u64::MAX`.
pub fn sanitize_price(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

fn sanitize_count(raw: &str) -> Option<u32> {
    if raw.trim().eq_ignore_ascii_case(ANY) {
        return None;
    }
    sanitize_price(raw).map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}

fn selection(value: &str, sentinel: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(sentinel) {
        None
    } else {
        Some(value.to_string())
    }
}

/// The county's own list in table order, or every city sorted when no county
/// is selected. An unknown county yields no cities.
pub fn available_cities(county: Option<&str>) -> Vec<&'static str> {
    match county {
        Some(county) => cities_in(county).map(<[_]>::to_vec).unwrap_or_default(),
        None => {
            let mut all: Vec<&'static str> = CITIES_BY_COUNTY
                .iter()
                .flat_map(|(_, cities)| cities.iter().copied())
                .collect();
            all.sort_unstable();
            all
        }
    }
}

pub fn counties() -> &'static [&'static str] {
    COUNTIES
}
