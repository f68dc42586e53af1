//! Full-page protection by swapping rendered output

use crate::ability::{Action, Subject};
use crate::config::AccessConfig;
use crate::guard::Html;
use crate::query::Capabilities;

/// Outcome of a protected render, for callers that pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Loading,
    Denied,
    Granted,
}

/// Replaces a page with an "Access Denied" view when the check fails.
///
/// Unlike [`PageGuard`](crate::guard::PageGuard) this never navigates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedPage {
    pub action: Action,
    pub subject: Subject,
    home_path: String,
}

impl ProtectedPage {
    pub fn new(action: Action, subject: Subject) -> Self {
        Self::with_config(action, subject, &AccessConfig::default())
    }

    pub fn with_config(action: Action, subject: Subject, config: &AccessConfig) -> Self {
        Self { action, subject, home_path: config.home_path.clone() }
    }

    pub fn outcome(&self, caps: &Capabilities) -> PageOutcome {
        if caps.is_loading() {
            PageOutcome::Loading
        } else if caps.can(self.action, self.subject) {
            PageOutcome::Granted
        } else {
            PageOutcome::Denied
        }
    }

    /// Children, the loading view, or the built-in Access Denied page
    pub fn render<V: From<Html>>(&self, caps: &Capabilities, children: impl FnOnce() -> V) -> V {
        self.render_or(caps, children, || Html::access_denied(&self.home_path).into())
    }

    /// Like [`render`](Self::render) with a custom unauthorized view
    pub fn render_or<V: From<Html>>(
        &self,
        caps: &Capabilities,
        children: impl FnOnce() -> V,
        unauthorized: impl FnOnce() -> V,
    ) -> V {
        match self.outcome(caps) {
            PageOutcome::Loading => Html::loading().into(),
            PageOutcome::Granted => children(),
            PageOutcome::Denied => {
                log::info!("Rendering unauthorized view for {} {}", self.action, self.subject);
                unauthorized()
            }
        }
    }
}
