//! Wire permission strings (`"<subject>.<action>"`)
//!
//! The backend delivers permissions as flat strings inside the user profile.
//! Parsing is lenient at the compiler boundary: anything that does not split
//! into a known subject and a known action is inert. [`PermissionString`]
//! offers the strict form for callers that want the reason.

use crate::ability::{Action, Subject};
use crate::error::{AccessError, AccessResult};

/// Parse a permission string, returning `None` for anything malformed.
///
/// The split happens on the first `.` only, so `"companies.view.extra"`
/// yields the action token `"view.extra"`, which never parses.
pub fn parse_permission(raw: &str) -> Option<(Subject, Action)> {
    PermissionString::parse(raw).ok().map(|p| (p.subject, p.action))
}

/// A successfully parsed `"<subject>.<action>"` permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermissionString {
    pub subject: Subject,
    pub action: Action,
}

impl PermissionString {
    pub fn new(subject: Subject, action: Action) -> Self {
        Self { subject, action }
    }

    /// Strict parse with the failure reason
    pub fn parse(raw: &str) -> AccessResult<Self> {
        let (subject, action) = raw
            .split_once('.')
            .ok_or_else(|| AccessError::InvalidPermission(raw.to_string()))?;
        if subject.is_empty() || action.is_empty() {
            return Err(AccessError::InvalidPermission(raw.to_string()));
        }
        Ok(Self { subject: subject.parse()?, action: action.parse()? })
    }
}

impl std::fmt::Display for PermissionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.subject, self.action)
    }
}

impl std::str::FromStr for PermissionString {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}
