//! Access-control configuration: where guards send people

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Redirect targets and link destinations used by the guards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Where page guards redirect on denial
    /// Env: BIZDESK_ACCESS_UNAUTHORIZED_PATH
    /// Default: "/unauthorized"
    pub unauthorized_path: String,

    /// Sign-in page for the authenticated-only route guard
    /// Env: BIZDESK_ACCESS_SIGN_IN_PATH
    /// Default: "/auth/signin"
    pub sign_in_path: String,

    /// Landing page for signed-in users hitting guest-only routes
    /// Env: BIZDESK_ACCESS_DEFAULT_LANDING
    /// Default: "/dashboard"
    pub default_landing: String,

    /// Target of the "back to dashboard" link on the Access Denied page
    /// Env: BIZDESK_ACCESS_HOME_PATH
    /// Default: "/dashboard"
    pub home_path: String,

    /// Query parameter carrying the attempted location to sign-in
    /// Env: BIZDESK_ACCESS_CALLBACK_PARAM
    /// Default: "callbackUrl"
    pub callback_param: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            unauthorized_path: "/unauthorized".to_string(),
            sign_in_path: "/auth/signin".to_string(),
            default_landing: "/dashboard".to_string(),
            home_path: "/dashboard".to_string(),
            callback_param: "callbackUrl".to_string(),
        }
    }
}

impl AccessConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(path) = env::var("BIZDESK_ACCESS_UNAUTHORIZED_PATH") {
            self.unauthorized_path = path;
        }
        if let Ok(path) = env::var("BIZDESK_ACCESS_SIGN_IN_PATH") {
            self.sign_in_path = path;
        }
        if let Ok(path) = env::var("BIZDESK_ACCESS_DEFAULT_LANDING") {
            self.default_landing = path;
        }
        if let Ok(path) = env::var("BIZDESK_ACCESS_HOME_PATH") {
            self.home_path = path;
        }
        if let Ok(param) = env::var("BIZDESK_ACCESS_CALLBACK_PARAM") {
            self.callback_param = param;
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("unauthorized_path", &self.unauthorized_path),
            ("sign_in_path", &self.sign_in_path),
            ("default_landing", &self.default_landing),
            ("home_path", &self.home_path),
        ] {
            if !path.starts_with('/') {
                bail!("Invalid {}: {:?} must be an absolute path", name, path);
            }
        }

        if self.callback_param.is_empty() {
            bail!("Invalid callback_param: must not be empty");
        }

        Ok(())
    }
}
