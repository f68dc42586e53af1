//! Programmatic page guard

use crate::ability::{Action, Subject};
use crate::config::AccessConfig;
use crate::guard::Navigator;
use crate::query::Capabilities;

/// Redirects away from a page the user may not see.
///
/// Nothing runs on construction. The page calls [`PageGuard::check`] when it
/// decides access matters (before loading data, on a button press, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageGuard {
    pub action: Action,
    pub subject: Subject,
    pub redirect_to: String,
}

impl PageGuard {
    pub fn new(action: Action, subject: Subject) -> Self {
        Self::with_config(action, subject, &AccessConfig::default())
    }

    /// Use the configured unauthorized path as the redirect target
    pub fn with_config(action: Action, subject: Subject, config: &AccessConfig) -> Self {
        Self { action, subject, redirect_to: config.unauthorized_path.clone() }
    }

    pub fn redirect_to(mut self, location: impl Into<String>) -> Self {
        self.redirect_to = location.into();
        self
    }

    /// True if the user may proceed.
    ///
    /// On denial the navigator is told to replace the current location.
    /// While the ability is still loading the answer is false but no
    /// redirect happens, so a slow session check never bounces the user.
    pub fn check(&self, caps: &Capabilities, navigator: &dyn Navigator) -> bool {
        if caps.can(self.action, self.subject) {
            return true;
        }

        if caps.is_loading() {
            log::debug!(
                "Deferring {} {} check until the ability is resolved",
                self.action,
                self.subject
            );
            return false;
        }

        log::info!(
            "Denied {} {}; redirecting to {}",
            self.action,
            self.subject,
            self.redirect_to
        );
        navigator.replace(&self.redirect_to);
        false
    }
}
