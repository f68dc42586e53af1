//! Actions a rule can grant

use crate::error::AccessError;
use serde::{Deserialize, Serialize};

/// Verb half of a permission.
///
/// `Manage` is the wildcard action: a rule granting `manage` on a subject
/// satisfies every action on that subject. It is not implied by any other
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    View,
    Create,
    Update,
    Delete,
    Manage,
    Assign,
    Toggle,
    ResetPassword,
    Read,
}

impl Action {
    /// Every action, in declaration order
    pub const ALL: [Action; 9] = [
        Action::View,
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::Manage,
        Action::Assign,
        Action::Toggle,
        Action::ResetPassword,
        Action::Read,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Manage => "manage",
            Action::Assign => "assign",
            Action::Toggle => "toggle",
            Action::ResetPassword => "reset-password",
            Action::Read => "read",
        }
    }

    pub fn is_wildcard(self) -> bool {
        self == Action::Manage
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "view" => Ok(Action::View),
            "create" => Ok(Action::Create),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            "manage" => Ok(Action::Manage),
            "assign" => Ok(Action::Assign),
            "toggle" => Ok(Action::Toggle),
            "reset-password" => Ok(Action::ResetPassword),
            "read" => Ok(Action::Read),
            _ => Err(AccessError::UnknownAction(value.to_string())),
        }
    }
}
