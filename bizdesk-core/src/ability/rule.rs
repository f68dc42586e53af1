//! Compiled rules and wildcard matching

use crate::ability::{Action, Subject};

/// One compiled `(action, subject)` entry.
///
/// Compilers only ever emit allow rules (`inverted == false`); deny rules
/// exist so that an [`AbilityBuilder`](crate::ability::AbilityBuilder) can
/// override earlier grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    pub action: Action,
    pub subject: Subject,
    pub inverted: bool,
}

impl Rule {
    pub fn allow(action: Action, subject: Subject) -> Self {
        Self { action, subject, inverted: false }
    }

    pub fn deny(action: Action, subject: Subject) -> Self {
        Self { action, subject, inverted: true }
    }

    /// Whether this rule speaks about the query `(action, subject)`.
    ///
    /// Checked in this order:
    /// 1. exact `(action, subject)`
    /// 2. rule action equals the query action, rule subject is `all`
    /// 3. rule action is `manage`, rule subject equals the query subject
    /// 4. rule is `manage all`
    ///
    /// Wildcards only widen the rule side. A rule `view all` does not answer
    /// a query for `manage companies`.
    pub fn matches(&self, action: Action, subject: Subject) -> bool {
        if self.action == action && self.subject == subject {
            return true;
        }
        if self.action == action && self.subject.is_wildcard() {
            return true;
        }
        if self.action.is_wildcard() && self.subject == subject {
            return true;
        }
        self.action.is_wildcard() && self.subject.is_wildcard()
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = if self.inverted { "cannot" } else { "can" };
        write!(f, "{} {} {}", verb, self.action, self.subject)
    }
}
