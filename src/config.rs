//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `TODO_API_KEY`: shared secret required on every API request (required)
//! - `TODO_API_KEY_HEADER`: header carrying the key (default: `X-Api-Key`)
//! - `HOST`: bind address (default: `0.0.0.0`)
//! - `PORT`: bind port (default: `3000`)
//! - `TODO_STORAGE`: `in_memory` (default) | `sqlite`
//! - `TODO_SEED_DEMO`: seed sample items on startup (default: `true`)

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

/// Header consulted for the API key when none is configured.
pub const DEFAULT_API_KEY_HEADER: &str = "X-Api-Key";

const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The API key is missing or blank.
    #[error("TODO_API_KEY must be set to a non-empty value")]
    MissingApiKey,

    /// The header name is not a valid HTTP header name.
    #[error("invalid API key header name: {0}")]
    InvalidHeaderName(String),

    /// The bind host is not an IP address.
    #[error("invalid HOST value: {0}")]
    InvalidHost(String),

    /// The bind port is not a valid port number.
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),

    /// The storage backend is not recognized.
    #[error("invalid TODO_STORAGE value: {0}, expected in_memory or sqlite")]
    InvalidStorageMode(String),

    /// The seed flag is not a boolean.
    #[error("invalid TODO_SEED_DEMO value: {0}, expected true or false")]
    InvalidSeedFlag(String),
}

/// Storage backend behind the repository port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// Insertion-ordered in-process map.
    #[default]
    InMemory,
    /// Diesel over an in-memory `SQLite` database.
    Sqlite,
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(Self::InMemory),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(ConfigError::InvalidStorageMode(value.to_owned())),
        }
    }
}

/// Static API-key settings.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyConfig {
    /// Expected key value.
    pub key: String,
    /// Header carrying the key.
    pub header_name: String,
}

impl std::fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("key", &"<redacted>")
            .field("header_name", &self.header_name)
            .finish()
    }
}

/// Complete server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// API-key gate settings.
    pub api_key: ApiKeyConfig,
    /// Bind address.
    pub host: IpAddr,
    /// Bind port.
    pub port: u16,
    /// Selected storage backend.
    pub storage: StorageMode,
    /// Whether to seed demo items into an empty store.
    pub seed_demo: bool,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required value is missing or a value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required value is missing or a value
    /// cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let key = read("TODO_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let header_name =
            read("TODO_API_KEY_HEADER").unwrap_or_else(|| DEFAULT_API_KEY_HEADER.to_owned());
        if axum::http::HeaderName::from_bytes(header_name.as_bytes()).is_err() {
            return Err(ConfigError::InvalidHeaderName(header_name));
        }

        let host = match read("HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(value))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match read("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };
        let storage = read("TODO_STORAGE")
            .map(|value| value.parse::<StorageMode>())
            .transpose()?
            .unwrap_or_default();
        let seed_demo = read("TODO_SEED_DEMO")
            .map(|value| parse_flag(&value))
            .transpose()?
            .unwrap_or(true);

        Ok(Self {
            api_key: ApiKeyConfig { key, header_name },
            host,
            port,
            storage,
            seed_demo,
        })
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidSeedFlag(value.to_owned())),
    }
}
