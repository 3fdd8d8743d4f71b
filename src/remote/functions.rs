// functions.rs
use crate::remote::models::{FetchListingsRequest, FetchListingsResponse, SaveLeadRequest};
use crate::remote::{LeadSink, ListingSource, RemoteError};
use crate::settings::FunctionsSettings;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const FETCH_LISTINGS: &str = "fetch-listings";
const SAVE_LEAD_SEARCH: &str = "save-lead-search";

/// Blocking client for the hosted edge functions behind the property search.
pub struct FunctionsClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl FunctionsClient {
    pub fn new(settings: &FunctionsSettings) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            anon_key: settings.anon_key.clone(),
        })
    }

    fn function_url(&self, name: &str) -> String {
        format!("{}/functions/v1/{}", self.base_url, name)
    }

    /// POST `body` to the named function and decode the JSON reply.
    pub fn invoke<B, T>(&self, name: &str, body: &B) -> Result<T, RemoteError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let start = std::time::Instant::now();

        let resp = self
            .client
            .post(self.function_url(name))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .json(body)
            .send()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        log::debug!("{name} answered {status} in {:?}", start.elapsed());

        if !status.is_success() {
            return Err(RemoteError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        // Some functions answer 204 / empty on success.
        let text = if text.trim().is_empty() { "null" } else { &text };
        serde_json::from_str(text).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

impl ListingSource for FunctionsClient {
    fn fetch_listings(
        &self,
        request: &FetchListingsRequest,
    ) -> Result<FetchListingsResponse, RemoteError> {
        let resp: Option<FetchListingsResponse> = self.invoke(FETCH_LISTINGS, request)?;
        Ok(resp.unwrap_or_default())
    }
}

impl LeadSink for FunctionsClient {
    fn save_lead(&self, request: &SaveLeadRequest) -> Result<(), RemoteError> {
        // Nothing in the reply is used beyond "it did not fail".
        let _: serde_json::Value = self.invoke(SAVE_LEAD_SEARCH, request)?;
        Ok(())
    }
}
