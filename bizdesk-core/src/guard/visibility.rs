//! Navigation visibility flags
//!
//! These flags decide which menu entries are shown. They are not a security
//! boundary: hiding an entry does not protect its route. Pages still need a
//! [`PageGuard`](crate::guard::PageGuard) or
//! [`ProtectedPage`](crate::guard::ProtectedPage).

use crate::ability::{Action, Subject};
use crate::query::Capabilities;

/// Named flags, each tied to one fixed `(action, subject)` check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibilityFlag {
    ViewDashboard,
    ViewAnalytics,
    EditProfile,
    ManageUsers,
    CreatePost,
    EditPost,
    DeletePost,
    CreateComment,
    EditComment,
    DeleteComment,
    ViewSettings,
    ManageSettings,
    Admin,
}

impl VisibilityFlag {
    pub const ALL: [VisibilityFlag; 13] = [
        VisibilityFlag::ViewDashboard,
        VisibilityFlag::ViewAnalytics,
        VisibilityFlag::EditProfile,
        VisibilityFlag::ManageUsers,
        VisibilityFlag::CreatePost,
        VisibilityFlag::EditPost,
        VisibilityFlag::DeletePost,
        VisibilityFlag::CreateComment,
        VisibilityFlag::EditComment,
        VisibilityFlag::DeleteComment,
        VisibilityFlag::ViewSettings,
        VisibilityFlag::ManageSettings,
        VisibilityFlag::Admin,
    ];

    /// The check behind this flag
    pub fn requirement(self) -> (Action, Subject) {
        match self {
            VisibilityFlag::ViewDashboard => (Action::Read, Subject::Dashboard),
            VisibilityFlag::ViewAnalytics => (Action::Read, Subject::Analytics),
            VisibilityFlag::EditProfile => (Action::Update, Subject::Profile),
            VisibilityFlag::ManageUsers => (Action::Manage, Subject::Users),
            VisibilityFlag::CreatePost => (Action::Create, Subject::Post),
            VisibilityFlag::EditPost => (Action::Update, Subject::Post),
            VisibilityFlag::DeletePost => (Action::Delete, Subject::Post),
            VisibilityFlag::CreateComment => (Action::Create, Subject::Comment),
            VisibilityFlag::EditComment => (Action::Update, Subject::Comment),
            VisibilityFlag::DeleteComment => (Action::Delete, Subject::Comment),
            VisibilityFlag::ViewSettings => (Action::Read, Subject::Settings),
            VisibilityFlag::ManageSettings => (Action::Manage, Subject::Settings),
            VisibilityFlag::Admin => (Action::Manage, Subject::All),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VisibilityFlag::ViewDashboard => "can_view_dashboard",
            VisibilityFlag::ViewAnalytics => "can_view_analytics",
            VisibilityFlag::EditProfile => "can_edit_profile",
            VisibilityFlag::ManageUsers => "can_manage_users",
            VisibilityFlag::CreatePost => "can_create_post",
            VisibilityFlag::EditPost => "can_edit_post",
            VisibilityFlag::DeletePost => "can_delete_post",
            VisibilityFlag::CreateComment => "can_create_comment",
            VisibilityFlag::EditComment => "can_edit_comment",
            VisibilityFlag::DeleteComment => "can_delete_comment",
            VisibilityFlag::ViewSettings => "can_view_settings",
            VisibilityFlag::ManageSettings => "can_manage_settings",
            VisibilityFlag::Admin => "is_admin",
        }
    }
}

/// A navigation menu entry shown only when its flag is set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
    pub flag: VisibilityFlag,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, href: impl Into<String>, flag: VisibilityFlag) -> Self {
        Self { label: label.into(), href: href.into(), flag }
    }
}

/// All flags evaluated against one snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageVisibility {
    pub can_view_dashboard: bool,
    pub can_view_analytics: bool,
    pub can_edit_profile: bool,
    pub can_manage_users: bool,
    pub can_create_post: bool,
    pub can_edit_post: bool,
    pub can_delete_post: bool,
    pub can_create_comment: bool,
    pub can_edit_comment: bool,
    pub can_delete_comment: bool,
    pub can_view_settings: bool,
    pub can_manage_settings: bool,
    pub is_admin: bool,
}

impl PageVisibility {
    pub fn from_capabilities(caps: &Capabilities) -> Self {
        let check = |flag: VisibilityFlag| {
            let (action, subject) = flag.requirement();
            caps.can(action, subject)
        };

        Self {
            can_view_dashboard: check(VisibilityFlag::ViewDashboard),
            can_view_analytics: check(VisibilityFlag::ViewAnalytics),
            can_edit_profile: check(VisibilityFlag::EditProfile),
            can_manage_users: check(VisibilityFlag::ManageUsers),
            can_create_post: check(VisibilityFlag::CreatePost),
            can_edit_post: check(VisibilityFlag::EditPost),
            can_delete_post: check(VisibilityFlag::DeletePost),
            can_create_comment: check(VisibilityFlag::CreateComment),
            can_edit_comment: check(VisibilityFlag::EditComment),
            can_delete_comment: check(VisibilityFlag::DeleteComment),
            can_view_settings: check(VisibilityFlag::ViewSettings),
            can_manage_settings: check(VisibilityFlag::ManageSettings),
            is_admin: check(VisibilityFlag::Admin),
        }
    }

    pub fn flag(&self, flag: VisibilityFlag) -> bool {
        match flag {
            VisibilityFlag::ViewDashboard => self.can_view_dashboard,
            VisibilityFlag::ViewAnalytics => self.can_view_analytics,
            VisibilityFlag::EditProfile => self.can_edit_profile,
            VisibilityFlag::ManageUsers => self.can_manage_users,
            VisibilityFlag::CreatePost => self.can_create_post,
            VisibilityFlag::EditPost => self.can_edit_post,
            VisibilityFlag::DeletePost => self.can_delete_post,
            VisibilityFlag::CreateComment => self.can_create_comment,
            VisibilityFlag::EditComment => self.can_edit_comment,
            VisibilityFlag::DeleteComment => self.can_delete_comment,
            VisibilityFlag::ViewSettings => self.can_view_settings,
            VisibilityFlag::ManageSettings => self.can_manage_settings,
            VisibilityFlag::Admin => self.is_admin,
        }
    }

    /// Menu entries whose flag is set, in their original order
    pub fn visible_entries<'a>(&self, entries: &'a [NavEntry]) -> Vec<&'a NavEntry> {
        entries.iter().filter(|entry| self.flag(entry.flag)).collect()
    }
}
