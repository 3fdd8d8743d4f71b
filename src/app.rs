// app.rs
use crate::forms::{FormRelay, FormspreeRelay};
use crate::remote::{FunctionsClient, LeadSink, ListingSource, RemoteError};
use crate::settings::Settings;
use std::sync::Arc;

/// Remote collaborators shared by every worker thread. Built once at startup
/// and never mutated; per-page state lives in the request handlers.
pub struct App {
    pub listings: Arc<dyn ListingSource>,
    pub leads: Arc<dyn LeadSink>,
    pub forms: Arc<dyn FormRelay>,
}

impl App {
    pub fn from_settings(settings: &Settings) -> Result<Self, RemoteError> {
        if settings.functions.anon_key.is_empty() {
            log::warn!("functions.anon_key is empty; remote calls will be unauthenticated");
        }

        let functions = Arc::new(FunctionsClient::new(&settings.functions)?);
        let forms = Arc::new(FormspreeRelay::new(&settings.formspree)?);

        Ok(Self {
            listings: functions.clone(),
            leads: functions,
            forms,
        })
    }
}
