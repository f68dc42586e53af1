//! Sessions configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// One year
const MAX_SESSION_AGE: u64 = 365 * 24 * 3600;

/// Sessions configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionsConfig {
    /// Cookie carrying the session token
    /// Env: BIZDESK_SESSION_COOKIE_NAME
    /// Default: "bizdesk_session"
    pub cookie_name: String,

    /// Accept `Authorization: Bearer <token>` as well as the cookie
    /// Env: BIZDESK_SESSION_BEARER_ENABLED
    /// Default: true
    pub bearer_enabled: bool,

    /// Session maximum age in seconds
    /// Env: BIZDESK_SESSION_MAX_AGE
    /// Default: 3600 (1 hour)
    pub max_age: u64,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self { cookie_name: "bizdesk_session".to_string(), bearer_enabled: true, max_age: 3600 }
    }
}

impl SessionsConfig {
    pub fn merge(&mut self, other: Self) {
        self.cookie_name = other.cookie_name;
        self.bearer_enabled = other.bearer_enabled;
        self.max_age = other.max_age;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(name) = env::var("BIZDESK_SESSION_COOKIE_NAME") {
            self.cookie_name = name;
        }

        if let Ok(enabled) = env::var("BIZDESK_SESSION_BEARER_ENABLED") {
            self.bearer_enabled = enabled.parse().unwrap_or(true);
        }

        if let Ok(max_age) = env::var("BIZDESK_SESSION_MAX_AGE") {
            if let Ok(m) = max_age.parse() {
                self.max_age = m;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cookie_name.is_empty() || self.cookie_name.contains([';', '=', ' ']) {
            bail!("Invalid cookie_name: {:?}", self.cookie_name);
        }

        if self.max_age == 0 || self.max_age > MAX_SESSION_AGE {
            bail!("Invalid max_age: must be between 1 and {} seconds", MAX_SESSION_AGE);
        }

        Ok(())
    }

    pub fn max_age_duration(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.max_age.min(MAX_SESSION_AGE) as i64)
    }
}
