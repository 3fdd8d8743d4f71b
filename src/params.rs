// params.rs
use crate::domain::filters::SearchFilters;
use crate::errors::ServerError;
use astra::Request;
use std::io::Read;

/// Form posts larger than this are rejected.
const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Decoded `application/x-www-form-urlencoded` pairs, in order, keys may
/// repeat.
#[derive(Debug, Default)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn parse(input: &[u8]) -> Self {
        Params(url::form_urlencoded::parse(input).into_owned().collect())
    }

    pub fn from_query(req: &Request) -> Self {
        Self::parse(req.uri().query().unwrap_or_default().as_bytes())
    }

    pub fn from_body(req: &mut Request) -> Result<Self, ServerError> {
        let mut raw = Vec::new();
        req.body_mut()
            .reader()
            .take(MAX_FORM_BYTES + 1)
            .read_to_end(&mut raw)
            .map_err(|e| ServerError::BadRequest(format!("Unreadable body: {e}")))?;

        if raw.len() as u64 > MAX_FORM_BYTES {
            return Err(ServerError::BadRequest("Form too large".into()));
        }

        Ok(Self::parse(&raw))
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn filters(&self) -> SearchFilters {
        SearchFilters::from_fields(|key| self.get(key))
    }
}
