//! Application configuration
//!
//! The defaults are embedded as TOML; the backend URL can be overridden at
//! build time through the `BACKEND_URL` environment variable.

use once_cell::sync::Lazy;
use serde::Deserialize;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[backend]
base_url = "http://localhost:8000"
"#;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: BackendConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: DEFAULT_BACKEND_URL.to_string(),
            },
        }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

/// Configuration resolved once per page load
pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Build the configuration from the embedded defaults and `BACKEND_URL`
pub fn load_config() -> AppConfig {
    resolve_config(DEFAULT_CONFIG, option_env!("BACKEND_URL"))
}

fn resolve_config(defaults: &str, backend_override: Option<&str>) -> AppConfig {
    let mut config = match toml::from_str::<AppConfig>(defaults) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Embedded config is invalid, using built-in defaults: {}", e);
            AppConfig::default()
        }
    };

    if let Some(url) = backend_override.map(str::trim).filter(|u| !u.is_empty()) {
        config.backend.base_url = url.to_string();
    }

    // Paths are appended as "/api/..."
    config.backend.base_url = config.backend.base_url.trim_end_matches('/').to_string();
    config
}
