//! Configuration system for Bizdesk
//!
//! Values are resolved in the following order (highest priority wins):
//!
//! 1. **Code** (builder methods on the returned struct)
//! 2. **Environment variables** (`BIZDESK_*`)
//! 3. **Config file** (`bizdesk.toml`)
//! 4. **Defaults**
//!
//! # Example
//!
//! ```no_run
//! use bizdesk_core::config::BizdeskConfig;
//!
//! let config = BizdeskConfig::load()?;
//! config.validate()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod access;
pub mod logging;
pub mod sessions;

pub use access::AccessConfig;
pub use logging::LoggingConfig;
pub use sessions::SessionsConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete Bizdesk configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BizdeskConfig {
    pub access: AccessConfig,
    pub sessions: SessionsConfig,
    pub logging: LoggingConfig,
}

impl BizdeskConfig {
    /// Load `bizdesk.toml` (if present) and apply environment overrides
    pub fn load() -> Result<Self> {
        Self::load_from("bizdesk.toml")
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_vars();

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.as_ref().display()))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.access.merge(other.access);
        self.sessions.merge(other.sessions);
        self.logging.merge(other.logging);
    }

    pub fn apply_env_vars(&mut self) {
        self.access.apply_env_vars();
        self.sessions.apply_env_vars();
        self.logging.apply_env_vars();
    }

    pub fn validate(&self) -> Result<()> {
        self.access.validate().context("access")?;
        self.sessions.validate().context("sessions")?;
        self.logging.validate().context("logging")?;
        Ok(())
    }
}
