mod functions;
pub mod models;
mod remote_error;

pub use functions::FunctionsClient;
pub use models::{FetchListingsRequest, FetchListingsResponse, SaveLeadRequest};
pub use remote_error::RemoteError;

/// Where search results come from.
pub trait ListingSource: Send + Sync {
    fn fetch_listings(
        &self,
        request: &FetchListingsRequest,
    ) -> Result<FetchListingsResponse, RemoteError>;
}

/// Where save-search leads go.
pub trait LeadSink: Send + Sync {
    fn save_lead(&self, request: &SaveLeadRequest) -> Result<(), RemoteError>;
}
