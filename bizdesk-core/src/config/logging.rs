//! Logging configuration

use crate::logging::{LogFormat, LogLevel};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Env: BIZDESK_LOG_LEVEL
    pub level: String,
    /// "human", "json" or "logfmt"
    /// Env: BIZDESK_LOG_FORMAT
    pub format: String,
    /// Write to stderr instead of stdout
    /// Env: BIZDESK_LOG_STDERR
    pub stderr: bool,
    /// Fields added to every entry
    pub context: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "human".to_string(),
            stderr: false,
            context: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(level) = env::var("BIZDESK_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(format) = env::var("BIZDESK_LOG_FORMAT") {
            self.format = format;
        }
        if let Ok(stderr) = env::var("BIZDESK_LOG_STDERR") {
            self.stderr = stderr.parse().unwrap_or(false);
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.log_level()?;
        self.log_format()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<LogLevel> {
        self.level.parse()
    }

    pub fn log_format(&self) -> Result<LogFormat> {
        self.format.parse()
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_context_field(mut self, key: &str, value: &str) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }
}
