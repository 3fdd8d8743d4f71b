use crate::app::App;
use crate::domain::listing::{Property, PropertyMedia};
use crate::forms::FormRelay;
use crate::remote::{
    FetchListingsRequest, FetchListingsResponse, LeadSink, ListingSource, RemoteError,
    SaveLeadRequest,
};
use astra::{Body, Request, Response};
use http::Method;
use serde_json::Value;
use std::io::Read;
use std::sync::{Arc, Mutex};

type Respond = Box<dyn Fn() -> Result<FetchListingsResponse, RemoteError> + Send + Sync>;

/// Listing source with a canned answer that records every request.
pub struct FakeListings {
    respond: Respond,
    pub seen: Mutex<Vec<FetchListingsRequest>>,
}

impl FakeListings {
    pub fn returning(listings: Vec<Property>) -> Arc<Self> {
        Self::with(move || {
            Ok(FetchListingsResponse {
                listings: Some(listings.clone()),
                error: None,
            })
        })
    }

    pub fn app_error(message: &'static str) -> Arc<Self> {
        Self::with(move || {
            Ok(FetchListingsResponse {
                listings: None,
                error: Some(message.to_string()),
            })
        })
    }

    /// Listings alongside an `error` field, as some function versions send.
    pub fn with_error_field(listings: Vec<Property>, error: &'static str) -> Arc<Self> {
        Self::with(move || {
            Ok(FetchListingsResponse {
                listings: Some(listings.clone()),
                error: Some(error.to_string()),
            })
        })
    }

    pub fn http_error(status: u16, body: &'static str) -> Arc<Self> {
        Self::with(move || {
            Err(RemoteError::Http {
                status,
                body: body.to_string(),
            })
        })
    }

    fn with<F>(respond: F) -> Arc<Self>
    where
        F: Fn() -> Result<FetchListingsResponse, RemoteError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            respond: Box::new(respond),
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl ListingSource for FakeListings {
    fn fetch_listings(
        &self,
        request: &FetchListingsRequest,
    ) -> Result<FetchListingsResponse, RemoteError> {
        self.seen.lock().unwrap().push(request.clone());
        (self.respond)()
    }
}

#[derive(Default)]
pub struct FakeLeads {
    pub fail: bool,
    pub seen: Mutex<Vec<SaveLeadRequest>>,
}

impl LeadSink for FakeLeads {
    fn save_lead(&self, request: &SaveLeadRequest) -> Result<(), RemoteError> {
        self.seen.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(RemoteError::Http {
                status: 500,
                body: "lead store unavailable".into(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeRelay {
    pub fail: bool,
    pub seen: Mutex<Vec<Value>>,
}

impl FormRelay for FakeRelay {
    fn submit(&self, payload: &Value) -> Result<(), RemoteError> {
        self.seen.lock().unwrap().push(payload.clone());
        if self.fail {
            return Err(RemoteError::Network("formspree unreachable".into()));
        }
        Ok(())
    }
}

pub struct TestApp {
    pub app: App,
    pub listings: Arc<FakeListings>,
    pub leads: Arc<FakeLeads>,
    pub relay: Arc<FakeRelay>,
}

pub fn test_app(listings: Arc<FakeListings>) -> TestApp {
    build(listings, FakeLeads::default(), FakeRelay::default())
}

pub fn build(listings: Arc<FakeListings>, leads: FakeLeads, relay: FakeRelay) -> TestApp {
    let leads = Arc::new(leads);
    let relay = Arc::new(relay);

    TestApp {
        app: App {
            listings: listings.clone(),
            leads: leads.clone(),
            forms: relay.clone(),
        },
        listings,
        leads,
        relay,
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn htmx_get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str, htmx: bool) -> Request {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn listing(id: &str, address: &str, price: f64) -> Property {
    Property {
        id: id.to_string(),
        listing_id: format!("RX-{id}"),
        price,
        address: address.to_string(),
        city: "Jupiter".to_string(),
        state: "FL".to_string(),
        zip: "33458".to_string(),
        bedrooms: Some(4),
        bathrooms: Some(3.0),
        sqft: Some(2850),
        property_type: "Residential".to_string(),
        status: "Active".to_string(),
        media: vec![PropertyMedia {
            url: format!("https://cdn.example.com/{id}.jpg"),
            media_type: "image".to_string(),
            order: 0,
        }],
        ..Default::default()
    }
}
