//! Error types for the access-control core
//!
//! Malformed permission strings and unknown role names never surface here:
//! the compilers absorb them and simply grant less. This type covers the
//! strict parsers and integration mistakes such as a missing ability context.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessError {
    /// The ability context was queried outside the provider's scope
    #[error("ability context missing: install an AbilityProvider before querying capabilities")]
    MissingProvider,
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
    #[error("invalid permission: {0}")]
    InvalidPermission(String),
    #[error("session error: {0}")]
    Session(#[source] anyhow::Error),
    #[error("configuration error: {0}")]
    Config(#[source] anyhow::Error),
}

impl AccessError {
    /// Short machine-readable code used in JSON error bodies
    pub fn code(&self) -> &'static str {
        match self {
            AccessError::MissingProvider => "missing_provider",
            AccessError::UnknownAction(_) => "unknown_action",
            AccessError::UnknownSubject(_) => "unknown_subject",
            AccessError::InvalidPermission(_) => "invalid_permission",
            AccessError::Session(_) => "session_error",
            AccessError::Config(_) => "config_error",
        }
    }
}

pub type AccessResult<T> = Result<T, AccessError>;
