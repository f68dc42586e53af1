//! Conditional section rendering

use crate::ability::{Action, Subject};
use crate::query::Capabilities;

/// Renders its children only when `can(action, subject)` holds.
///
/// Purely compositional: it never redirects. While the ability is loading
/// it renders nothing, neither the children nor the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Can {
    pub action: Action,
    pub subject: Subject,
}

impl Can {
    pub fn new(action: Action, subject: Subject) -> Self {
        Self { action, subject }
    }

    /// Children when allowed, nothing otherwise
    pub fn render<V>(&self, caps: &Capabilities, children: impl FnOnce() -> V) -> Option<V> {
        if caps.is_loading() {
            return None;
        }
        caps.can(self.action, self.subject).then(children)
    }

    /// Children when allowed, `fallback` otherwise
    pub fn render_or<V>(
        &self,
        caps: &Capabilities,
        children: impl FnOnce() -> V,
        fallback: impl FnOnce() -> V,
    ) -> Option<V> {
        if caps.is_loading() {
            return None;
        }
        Some(if caps.can(self.action, self.subject) { children() } else { fallback() })
    }
}
