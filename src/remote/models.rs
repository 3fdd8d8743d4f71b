use crate::domain::filters::SearchFilters;
use crate::domain::listing::Property;
use serde::{Deserialize, Serialize};

// fetch-listings
//  request
//   ├── city?
//   ├── minPrice? / maxPrice?
//   ├── bedrooms? / bathrooms?
//   ├── propertyType?
//   └── limit
//  response
//   ├── listings?
//   └── error?

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchListingsRequest {
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
    pub limit: u32,
}

impl FetchListingsRequest {
    /// County is deliberately not part of the request; the listing function
    /// only filters by city.
    pub fn from_filters(filters: &SearchFilters, limit: u32) -> Self {
        Self {
            city: filters.city.clone(),
            min_price: filters.min_price,
            max_price: filters.max_price,
            bedrooms: filters.bedrooms,
            bathrooms: filters.bathrooms,
            property_type: filters.property_type.clone(),
            limit,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FetchListingsResponse {
    pub listings: Option<Vec<Property>>,
    pub error: Option<String>,
}

/// Body of the save-lead-search call. `phone_number` serializes as `null`
/// when absent rather than being left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLeadRequest {
    pub full_name: String,
    pub phone_number: Option<String>,
    pub email: String,
    pub search_criteria: SearchFilters,
}
