use thiserror::Error;

/// Failures talking to a remote function or form handler.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Connection refused, DNS, timeout, TLS.
    #[error("Network error: {0}")]
    Network(String),

    /// The remote answered with a non-2xx status. `body` is kept verbatim so
    /// callers can look for a structured error message in it.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

impl RemoteError {
    /// The `error` string of a JSON error body, when there is a non-blank one.
    pub fn structured_message(&self) -> Option<String> {
        let RemoteError::Http { body, .. } = self else {
            return None;
        };

        let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
        parsed
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|msg| !msg.trim().is_empty())
            .map(str::to_string)
    }
}
