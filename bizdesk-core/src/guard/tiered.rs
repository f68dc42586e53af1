//! Tiered content: pick one branch by a fixed precedence of checks

use crate::ability::{Action, Subject};
use crate::query::Capabilities;

/// Which branch a user falls into.
///
/// Evaluated strictly in declaration order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// `manage all`
    Admin,
    /// `create post` and `read analytics`
    Editor,
    /// `read dashboard` and `create comment`
    User,
    /// None of the above
    Guest,
}

impl Tier {
    pub fn select(caps: &Capabilities) -> Tier {
        if caps.can(Action::Manage, Subject::All) {
            Tier::Admin
        } else if caps
            .can_all(&[(Action::Create, Subject::Post), (Action::Read, Subject::Analytics)])
        {
            Tier::Editor
        } else if caps
            .can_all(&[(Action::Read, Subject::Dashboard), (Action::Create, Subject::Comment)])
        {
            Tier::User
        } else {
            Tier::Guest
        }
    }
}

type Branch<'a, V> = Box<dyn FnOnce() -> V + 'a>;

/// Renders the branch for the user's [`Tier`].
///
/// A tier without its own branch renders the default children.
pub struct TieredContent<'a, V> {
    admin: Option<Branch<'a, V>>,
    editor: Option<Branch<'a, V>>,
    user: Option<Branch<'a, V>>,
    guest: Option<Branch<'a, V>>,
    children: Branch<'a, V>,
}

impl<'a, V> TieredContent<'a, V> {
    pub fn new(children: impl FnOnce() -> V + 'a) -> Self {
        Self { admin: None, editor: None, user: None, guest: None, children: Box::new(children) }
    }

    pub fn admin(mut self, branch: impl FnOnce() -> V + 'a) -> Self {
        self.admin = Some(Box::new(branch));
        self
    }

    pub fn editor(mut self, branch: impl FnOnce() -> V + 'a) -> Self {
        self.editor = Some(Box::new(branch));
        self
    }

    pub fn user(mut self, branch: impl FnOnce() -> V + 'a) -> Self {
        self.user = Some(Box::new(branch));
        self
    }

    pub fn guest(mut self, branch: impl FnOnce() -> V + 'a) -> Self {
        self.guest = Some(Box::new(branch));
        self
    }

    /// Render the selected branch, or nothing while the ability is loading
    pub fn render(self, caps: &Capabilities) -> Option<(Tier, V)> {
        if caps.is_loading() {
            return None;
        }

        let tier = Tier::select(caps);
        let branch = match tier {
            Tier::Admin => self.admin,
            Tier::Editor => self.editor,
            Tier::User => self.user,
            Tier::Guest => self.guest,
        };
        Some((tier, branch.unwrap_or(self.children)()))
    }
}
