use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_url: String,
    pub catalog_timeout: Duration,
    pub slot_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 4000,
            catalog_url: "http://localhost:3333".into(),
            catalog_timeout: Duration::from_millis(5000),
            slot_path: PathBuf::from("data/cart_slot.json"),
        }
    }
}

impl AppConfig {
    /// Reads `CART_*` variables from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup("CART_PORT") {
            Some(value) => parse_number("CART_PORT", value)?,
            None => defaults.port,
        };
        let catalog_timeout = match lookup("CART_CATALOG_TIMEOUT_MS") {
            Some(value) => Duration::from_millis(parse_number("CART_CATALOG_TIMEOUT_MS", value)?),
            None => defaults.catalog_timeout,
        };

        Ok(Self {
            host: lookup("CART_HOST").unwrap_or(defaults.host),
            port,
            catalog_url: lookup("CART_CATALOG_URL").unwrap_or(defaults.catalog_url),
            catalog_timeout,
            slot_path: lookup("CART_SLOT_PATH").map(PathBuf::from).unwrap_or(defaults.slot_path),
        })
    }

    /// Host and port to listen on. The host may be a name; it is resolved
    /// when the listener binds.
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { key, value })
}
