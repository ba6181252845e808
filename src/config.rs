//! Configuration handling for the TUI

use crate::provider::{FixtureProvider, HttpProvider, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::state::SharedProvider;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Environment variable naming a live backend; setting it selects the HTTP provider
pub const ENV_API_URL: &str = "XSTN_API_URL";
/// Environment variable forcing the fixture provider on or off
pub const ENV_USE_MOCK: &str = "XSTN_USE_MOCK";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Backend address for the HTTP provider
    pub api_base_url: Option<String>,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: Option<u64>,
    /// Serve fixture content instead of calling a backend
    pub use_mock_provider: Option<bool>,
    /// Multiplier for the fixture provider's simulated latency
    pub mock_latency_scale: Option<f64>,
    /// Number shown as the WhatsApp contact on the contact page
    pub whatsapp_number: Option<String>,
    /// Page to open on launch, by label; unknown names open Home
    pub start_page: Option<String>,
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "xstn", "xstn-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SiteConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up through `var`
    pub fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = var(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            self.api_base_url = Some(url.trim().to_string());
            self.use_mock_provider = Some(false);
        }
        if let Some(flag) = var(ENV_USE_MOCK) {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.use_mock_provider = Some(true),
                "0" | "false" | "no" => self.use_mock_provider = Some(false),
                other => tracing::warn!("ignoring {ENV_USE_MOCK}={other:?}"),
            }
        }
        self
    }

    pub fn use_mock(&self) -> bool {
        self.use_mock_provider.unwrap_or(true)
    }

    pub fn base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Duration {
        self.request_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn latency_scale(&self) -> f64 {
        self.mock_latency_scale.unwrap_or(1.0)
    }

    /// Construct the provider this configuration selects
    pub fn build_provider(&self) -> Result<SharedProvider> {
        if self.use_mock() {
            tracing::info!(scale = self.latency_scale(), "using fixture provider");
            return Ok(Arc::new(FixtureProvider::new(self.latency_scale())));
        }
        tracing::info!(base_url = self.base_url(), "using http provider");
        Ok(Arc::new(HttpProvider::new(self.base_url(), self.timeout())?))
    }
}
