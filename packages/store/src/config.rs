//! # Client configuration for `work-in-taiwan.toml`
//!
//! Defines the optional TOML file read at startup by native builds
//! (filename: [`ClientConfig::filename`] = `"work-in-taiwan.toml"`). The web
//! build uses the same struct, filled from defaults and build-time
//! environment only.
//!
//! ## Structure
//!
//! ```toml
//! [backend]
//! url = "https://api.example.tw"   # base URL of the REST API
//!
//! [storage]
//! user_key = "user"                 # durable entry holding the session user
//! theme_key = "dark"                # durable entry holding the dark-mode flag
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config: builders, TOML (de)serialisation, canonical filename. |
//! | [`BackendConfig`] | Base URL of the backend. Empty means "same origin as the page". |
//! | [`StorageConfig`] | Names of the two durable storage entries. |
//!
//! All structs implement `Default`, so a missing or empty file is equivalent
//! to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `work-in-taiwan.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Backend connection configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL without trailing slash. Empty string means same origin.
    #[serde(default)]
    pub url: String,
}

/// Durable storage entry names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_user_key")]
    pub user_key: String,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

fn default_user_key() -> String {
    "user".to_string()
}

fn default_theme_key() -> String {
    "dark".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            user_key: default_user_key(),
            theme_key: default_theme_key(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend.
    pub fn new(url: &str) -> Self {
        Self::default().with_backend_url(url)
    }

    /// Builder method to set the backend URL. Trailing slashes are dropped.
    pub fn with_backend_url(mut self, url: &str) -> Self {
        self.backend.url = url.trim().trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "work-in-taiwan.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(s)?;
        let url = config.backend.url.clone();
        Ok(config.with_backend_url(&url))
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
