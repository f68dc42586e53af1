//! Permission vocabulary, rule compilation and the compiled [`Ability`]
//!
//! A user's permission strings (or, failing that, their legacy role) are
//! compiled into an ordered rule set. The resulting [`Ability`] answers
//! `can`/`cannot` queries and is immutable: a change in the user produces a
//! brand new ability, never a patched one.
//!
//! # Example
//! ```rust,ignore
//! use bizdesk_core::ability::{compile_from_permissions, Action, Subject};
//!
//! let ability = compile_from_permissions(["companies.view", "companies.create"]);
//! assert!(ability.can(Action::View, Subject::Companies));
//! assert!(ability.cannot(Action::Delete, Subject::Companies));
//! ```

mod action;
mod builder;
mod compiler;
mod permission;
mod rule;
mod subject;

pub use action::Action;
pub use builder::AbilityBuilder;
pub use compiler::{compile_for_user, compile_from_permissions, compile_from_role, LegacyRole};
pub use permission::{parse_permission, PermissionString};
pub use rule::Rule;
pub use subject::Subject;

/// Queryable aggregate of compiled rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ability {
    rules: Vec<Rule>,
}

impl Ability {
    /// The ability that grants nothing
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// True if the last rule matching `(action, subject)` is an allow rule.
    ///
    /// Rules are scanned from last to first so later rules win. No matching
    /// rule means no access, which also covers unknown pairs.
    pub fn can(&self, action: Action, subject: Subject) -> bool {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.matches(action, subject))
            .map(|rule| !rule.inverted)
            .unwrap_or(false)
    }

    pub fn cannot(&self, action: Action, subject: Subject) -> bool {
        !self.can(action, subject)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules rendered as `"can <action> <subject>"` lines, for diagnostics only
    pub fn describe_rules(&self) -> Vec<String> {
        self.rules.iter().map(Rule::to_string).collect()
    }
}
