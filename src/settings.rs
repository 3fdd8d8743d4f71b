// settings.rs
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub functions: FunctionsSettings,
    pub formspree: FormspreeSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
}

/// Where the hosted edge functions live and how to authenticate to them.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionsSettings {
    pub base_url: String,
    pub anon_key: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormspreeSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Defaults, then an optional `site.toml` next to the binary, then
/// `SITE_`-prefixed environment variables, e.g. `SITE_FUNCTIONS__ANON_KEY`.
pub fn get_settings() -> Result<Settings, ConfigError> {
    Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 3000)?
        .set_default("server.max_workers", 8)?
        .set_default("functions.base_url", "http://127.0.0.1:54321")?
        .set_default("functions.anon_key", "")?
        .set_default("functions.timeout_secs", 30)?
        .set_default("formspree.endpoint", "https://formspree.io/f/xovgnnqo")?
        .set_default("formspree.timeout_secs", 15)?
        .add_source(File::with_name("site").required(false))
        .add_source(
            Environment::with_prefix("SITE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}
