// src/forms/formspree.rs

use crate::remote::RemoteError;
use crate::settings::FormspreeSettings;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;

/// Hands a finished form to the third-party form handler.
pub trait FormRelay: Send + Sync {
    fn submit(&self, payload: &Value) -> Result<(), RemoteError>;
}

pub struct FormspreeRelay {
    endpoint: String,
    client: Client,
}

impl FormspreeRelay {
    pub fn new(settings: &FormspreeSettings) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self {
            endpoint: settings.endpoint.clone(),
            client,
        })
    }
}

impl FormRelay for FormspreeRelay {
    fn submit(&self, payload: &Value) -> Result<(), RemoteError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, mime::APPLICATION_JSON.as_ref())
            .json(payload)
            .send()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(RemoteError::Http { status, body });
        }

        Ok(())
    }
}
