//! Configuration loading for Healthscan.
//! Reads healthscan.toml from the current directory or the path in HEALTHSCAN_CONFIG,
//! then applies HEALTHSCAN_BIND / HEALTHSCAN_PREDICTOR_URL overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub predictor: PredictorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

fn default_bind() -> String { "127.0.0.1:3000".to_string() }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Address of the external prediction service
    #[serde(default = "default_predictor_url")]
    pub url: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self { url: default_predictor_url() }
    }
}

fn default_predictor_url() -> String { "http://localhost:5000/predict".to_string() }


impl Config {
    /// Load configuration from healthscan.toml.
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("HEALTHSCAN_CONFIG")
            .unwrap_or_else(|_| "healthscan.toml".to_string());

        let config = if Path::new(&path).exists() {
            info!("Loading configuration from {}", path);
            Self::from_path(&path)?
        } else {
            debug!("No config file at {}, using defaults", path);
            Self::default()
        };

        Ok(config.with_overrides(
            std::env::var("HEALTHSCAN_BIND").ok(),
            std::env::var("HEALTHSCAN_PREDICTOR_URL").ok(),
        ))
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Replace configured values with any non-empty overrides.
    pub fn with_overrides(mut self, bind: Option<String>, predictor_url: Option<String>) -> Self {
        if let Some(bind) = bind.filter(|s| !s.is_empty()) {
            self.server.bind = bind;
        }
        if let Some(url) = predictor_url.filter(|s| !s.is_empty()) {
            self.predictor.url = url;
        }
        self
    }
}
