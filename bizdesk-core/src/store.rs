//! The ability store: one writer, many readers
//!
//! [`AbilityProvider`] owns the current [`Ability`] and recompiles it from
//! scratch every time it is synced with an [`AuthState`]. Readers hold an
//! [`AbilityContext`], a cheap read-only handle onto the same published
//! snapshot. The provider is not `Clone`: there is exactly one place the
//! ability can be written from.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --sync(loading)--> Loading --sync(resolved)--> Resolved
//!                                     ^                           |
//!                                     +-------sync(loading)-------+
//! ```
//!
//! While not resolved, the published ability is always empty.

use crate::ability::{compile_for_user, Ability};
use crate::error::{AccessError, AccessResult};
use crate::session::AuthState;
use std::sync::Arc;
use tokio::sync::watch;

/// Where the store is in the session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// No auth state has been observed yet
    Uninitialized,
    /// Session check in flight
    Loading,
    /// Ability reflects the currently known user (or lack of one)
    Resolved,
}

/// One published version of the current ability
#[derive(Debug, Clone)]
pub struct AbilitySnapshot {
    pub state: StoreState,
    pub ability: Arc<Ability>,
    /// Incremented on every publish
    pub revision: u64,
}

impl AbilitySnapshot {
    fn initial() -> Self {
        Self { state: StoreState::Uninitialized, ability: Arc::new(Ability::empty()), revision: 0 }
    }

    pub fn is_resolved(&self) -> bool {
        self.state == StoreState::Resolved
    }
}

/// Owner of the current ability
#[derive(Debug)]
pub struct AbilityProvider {
    sender: watch::Sender<AbilitySnapshot>,
}

impl Default for AbilityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AbilityProvider {
    /// Create the store with an empty ability
    pub fn new() -> Self {
        let (sender, _) = watch::channel(AbilitySnapshot::initial());
        Self { sender }
    }

    /// Read-only handle for guards and queries
    pub fn context(&self) -> AbilityContext {
        AbilityContext { receiver: self.sender.subscribe() }
    }

    pub fn snapshot(&self) -> AbilitySnapshot {
        self.sender.borrow().clone()
    }

    /// Recompute the ability for the given auth state and publish it.
    ///
    /// - loading: empty ability, state `Loading`
    /// - user with permissions: compiled from the permissions
    /// - user with a role only: compiled from the legacy role table
    /// - no user: empty ability
    ///
    /// The previous ability is discarded, never merged.
    pub fn sync(&mut self, auth: &AuthState) -> AbilitySnapshot {
        let (state, ability) = if auth.is_loading {
            (StoreState::Loading, Ability::empty())
        } else {
            let ability = auth.user.as_ref().map(compile_for_user).unwrap_or_default();
            (StoreState::Resolved, ability)
        };

        let revision = self.sender.borrow().revision + 1;
        let snapshot = AbilitySnapshot { state, ability: Arc::new(ability), revision };

        log::debug!(
            "Ability store now {:?} at revision {} with {} rules",
            snapshot.state,
            snapshot.revision,
            snapshot.ability.rules().len()
        );

        self.sender.send_replace(snapshot.clone());
        snapshot
    }
}

/// Read-only view onto the provider's current snapshot
#[derive(Debug, Clone)]
pub struct AbilityContext {
    receiver: watch::Receiver<AbilitySnapshot>,
}

impl AbilityContext {
    /// Fetch the context installed in request extensions.
    ///
    /// Missing context is an integration mistake and is reported straight away.
    pub fn from_extensions(extensions: &http::Extensions) -> AccessResult<Self> {
        extensions.get::<AbilityContext>().cloned().ok_or_else(|| {
            log::error!("Ability queried outside of an AbilityProvider scope");
            AccessError::MissingProvider
        })
    }

    /// Install this context into request extensions
    pub fn install(&self, extensions: &mut http::Extensions) {
        extensions.insert(self.clone());
    }

    pub fn snapshot(&self) -> AbilitySnapshot {
        self.receiver.borrow().clone()
    }

    /// Wait for the next publish.
    ///
    /// Returns false once the provider has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }
}
