//! Capability queries against the current ability snapshot
//!
//! Everything here is a synchronous read of an already published snapshot.
//! Nothing recompiles or refetches.

use crate::ability::{Ability, Action, Subject};
use crate::store::{AbilityContext, AbilitySnapshot, StoreState};

/// Query surface handed to guards and navigation code
#[derive(Debug, Clone)]
pub struct Capabilities {
    snapshot: AbilitySnapshot,
}

impl Capabilities {
    pub fn new(snapshot: AbilitySnapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_context(context: &AbilityContext) -> Self {
        Self::new(context.snapshot())
    }

    pub fn ability(&self) -> &Ability {
        &self.snapshot.ability
    }

    pub fn state(&self) -> StoreState {
        self.snapshot.state
    }

    /// True until the store has resolved the current user.
    ///
    /// Guards treat this as "no answer yet" rather than "denied".
    pub fn is_loading(&self) -> bool {
        self.snapshot.state != StoreState::Resolved
    }

    pub fn can(&self, action: Action, subject: Subject) -> bool {
        self.snapshot.ability.can(action, subject)
    }

    pub fn cannot(&self, action: Action, subject: Subject) -> bool {
        !self.can(action, subject)
    }

    /// Every pair passes; true for an empty list
    pub fn can_all(&self, pairs: &[(Action, Subject)]) -> bool {
        pairs.iter().all(|&(action, subject)| self.can(action, subject))
    }

    /// At least one pair passes; false for an empty list
    pub fn can_any(&self, pairs: &[(Action, Subject)]) -> bool {
        pairs.iter().any(|&(action, subject)| self.can(action, subject))
    }

    pub fn is_admin(&self) -> bool {
        self.can(Action::Manage, Subject::All)
    }

    /// `create post` or admin.
    ///
    /// `post` is a content-style subject that none of the business pages
    /// check; kept as the write-access proxy until product says otherwise.
    pub fn has_write_access(&self) -> bool {
        self.can(Action::Create, Subject::Post) || self.is_admin()
    }

    /// Rendered rule set, for diagnostics only
    pub fn rules_debug(&self) -> Vec<String> {
        self.snapshot.ability.describe_rules()
    }
}
