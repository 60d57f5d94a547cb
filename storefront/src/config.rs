//! Storefront configuration.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file for the storefront binary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Catalog API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// URL scheme for shop endpoints, e.g. `http` against a local
    /// fixture server.
    #[serde(default = "default_scheme")]
    pub scheme: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
        }
    }
}

fn default_scheme() -> String {
    "https".to_string()
}

impl StorefrontConfig {
    /// Load config from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path))
    }
}
