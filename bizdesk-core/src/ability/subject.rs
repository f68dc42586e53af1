//! Resource kinds a rule can apply to

use crate::error::AccessError;
use serde::{Deserialize, Serialize};

/// Noun half of a permission.
///
/// The business subjects come first; `Post`, `Comment`, `Analytics`,
/// `Profile` and `Settings` back the content-style checks used by the
/// tiered renderer and the navigation flags. `All` is the wildcard subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Users,
    Roles,
    Permissions,
    Companies,
    Customers,
    Vendors,
    Groups,
    Plans,
    Dashboard,
    Post,
    Comment,
    Analytics,
    Profile,
    Settings,
    All,
}

impl Subject {
    /// Every subject, wildcard last
    pub const ALL: [Subject; 15] = [
        Subject::Users,
        Subject::Roles,
        Subject::Permissions,
        Subject::Companies,
        Subject::Customers,
        Subject::Vendors,
        Subject::Groups,
        Subject::Plans,
        Subject::Dashboard,
        Subject::Post,
        Subject::Comment,
        Subject::Analytics,
        Subject::Profile,
        Subject::Settings,
        Subject::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Users => "users",
            Subject::Roles => "roles",
            Subject::Permissions => "permissions",
            Subject::Companies => "companies",
            Subject::Customers => "customers",
            Subject::Vendors => "vendors",
            Subject::Groups => "groups",
            Subject::Plans => "plans",
            Subject::Dashboard => "dashboard",
            Subject::Post => "post",
            Subject::Comment => "comment",
            Subject::Analytics => "analytics",
            Subject::Profile => "profile",
            Subject::Settings => "settings",
            Subject::All => "all",
        }
    }

    pub fn is_wildcard(self) -> bool {
        self == Subject::All
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Subject {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == value)
            .ok_or_else(|| AccessError::UnknownSubject(value.to_string()))
    }
}
