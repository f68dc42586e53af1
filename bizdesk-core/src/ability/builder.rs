//! Incremental construction of an [`Ability`]

use crate::ability::{Ability, Action, Rule, Subject};

/// Collects rules in order and freezes them into an [`Ability`].
///
/// # Example
///
/// ```rust,ignore
/// let ability = AbilityBuilder::new()
///     .can(Action::Manage, Subject::Companies)
///     .cannot(Action::Delete, Subject::Companies)
///     .build();
///
/// assert!(ability.can(Action::Update, Subject::Companies));
/// assert!(ability.cannot(Action::Delete, Subject::Companies));
/// ```
#[derive(Debug, Default, Clone)]
pub struct AbilityBuilder {
    rules: Vec<Rule>,
}

impl AbilityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an allow rule
    pub fn can(mut self, action: Action, subject: Subject) -> Self {
        self.rules.push(Rule::allow(action, subject));
        self
    }

    /// Append a deny rule; it overrides earlier allow rules it matches
    pub fn cannot(mut self, action: Action, subject: Subject) -> Self {
        self.rules.push(Rule::deny(action, subject));
        self
    }

    /// Append an already built rule
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn build(self) -> Ability {
        Ability::from_rules(self.rules)
    }
}

impl Extend<Rule> for AbilityBuilder {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}
