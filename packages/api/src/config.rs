//! Resolve the client configuration for the current platform.
//!
//! Layers, lowest priority first:
//!
//! 1. [`ClientConfig::default`]
//! 2. `work-in-taiwan.toml` in the working directory (native only)
//! 3. `BACKEND_URL`: read at runtime via `dotenvy` on native, captured at
//!    build time on wasm
//!
//! An empty backend URL falls back to the page origin on wasm and to
//! [`DEFAULT_NATIVE_BACKEND`] on native.

use store::ClientConfig;

pub const BACKEND_URL_VAR: &str = "BACKEND_URL";
pub const DEFAULT_NATIVE_BACKEND: &str = "http://localhost:8000";

/// Apply the file and environment layers on top of the defaults.
pub fn layered_config(file: Option<&str>, env_url: Option<&str>) -> ClientConfig {
    let mut config = match file.map(ClientConfig::from_toml) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            tracing::warn!("Ignoring invalid {}: {e}", ClientConfig::filename());
            ClientConfig::default()
        }
        None => ClientConfig::default(),
    };
    if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
        config = config.with_backend_url(url);
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
pub fn resolve_config() -> ClientConfig {
    dotenvy::dotenv().ok();

    let file = std::fs::read_to_string(ClientConfig::filename()).ok();
    let env_url = std::env::var(BACKEND_URL_VAR).ok();
    let config = layered_config(file.as_deref(), env_url.as_deref());
    if config.backend.url.is_empty() {
        config.with_backend_url(DEFAULT_NATIVE_BACKEND)
    } else {
        config
    }
}

#[cfg(target_arch = "wasm32")]
pub fn resolve_config() -> ClientConfig {
    let config = layered_config(None, option_env!("BACKEND_URL"));
    if !config.backend.url.is_empty() {
        return config;
    }
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    config.with_backend_url(&origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_only() {
        let config = layered_config(None, None);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let file = "[backend]\nurl = \"http://file.example\"\n[storage]\nuser_key = \"wit-user\"\n";
        let config = layered_config(Some(file), Some("http://env.example/"));
        assert_eq!(config.backend.url, "http://env.example");
        assert_eq!(config.storage.user_key, "wit-user");

        let config = layered_config(Some(file), Some("  "));
        assert_eq!(config.backend.url, "http://file.example");
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let config = layered_config(Some("[backend\nurl="), None);
        assert_eq!(config, ClientConfig::default());
    }
}
