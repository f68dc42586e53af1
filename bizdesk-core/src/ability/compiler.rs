//! Rule compilation from permission strings or a legacy role
//!
//! Neither entry point can fail. Anything that cannot be parsed with
//! confidence grants nothing.

use crate::ability::{parse_permission, Ability, AbilityBuilder, Action, Rule, Subject};
use crate::session::SessionUser;

/// Build an ability from the backend's `"<subject>.<action>"` strings.
///
/// Malformed or unknown entries are skipped; input order only affects the
/// order of the compiled rules.
pub fn compile_from_permissions<I, S>(permissions: I) -> Ability
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = AbilityBuilder::new();
    let mut skipped = 0usize;

    for raw in permissions {
        let raw = raw.as_ref();
        match parse_permission(raw) {
            Some((subject, action)) => builder.extend([Rule::allow(action, subject)]),
            None => {
                skipped += 1;
                log::trace!("Ignoring unparseable permission {:?}", raw);
            }
        }
    }

    log::debug!("Compiled {} rules from permissions ({} skipped)", builder.len(), skipped);
    builder.build()
}

/// Build an ability from a legacy role name.
///
/// Unrecognised names, `guest` included, produce the empty ability.
pub fn compile_from_role(role: &str) -> Ability {
    match LegacyRole::parse(role) {
        Some(legacy) => {
            let mut builder = AbilityBuilder::new();
            builder.extend(
                legacy.grants().iter().map(|&(action, subject)| Rule::allow(action, subject)),
            );
            log::debug!("Compiled {} rules from legacy role {}", builder.len(), legacy);
            builder.build()
        }
        None => {
            log::debug!("Legacy role {:?} grants nothing", role);
            Ability::empty()
        }
    }
}

/// Ability for the given user.
///
/// A non-empty permission list always wins over the role; a user with
/// neither gets the empty ability.
pub fn compile_for_user(user: &SessionUser) -> Ability {
    let permissions = user.permission_names();
    if !permissions.is_empty() {
        return compile_from_permissions(permissions);
    }
    match user.role_name() {
        Some(role) => compile_from_role(role),
        None => Ability::empty(),
    }
}

/// Roles known to the fallback table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyRole {
    SuperAdmin,
    Admin,
    User,
}

const SUPER_ADMIN_GRANTS: &[(Action, Subject)] = &[(Action::Manage, Subject::All)];

const ADMIN_GRANTS: &[(Action, Subject)] = &[
    (Action::View, Subject::Dashboard),
    (Action::View, Subject::Companies),
    (Action::Create, Subject::Companies),
    (Action::Update, Subject::Companies),
    (Action::Delete, Subject::Companies),
    (Action::View, Subject::Customers),
    (Action::Create, Subject::Customers),
    (Action::Update, Subject::Customers),
    (Action::Delete, Subject::Customers),
    (Action::View, Subject::Vendors),
    (Action::Create, Subject::Vendors),
    (Action::Update, Subject::Vendors),
    (Action::Delete, Subject::Vendors),
];

const USER_GRANTS: &[(Action, Subject)] = &[
    (Action::View, Subject::Dashboard),
    (Action::View, Subject::Companies),
    (Action::View, Subject::Customers),
    (Action::View, Subject::Vendors),
];

impl LegacyRole {
    pub const ALL: [LegacyRole; 3] = [LegacyRole::SuperAdmin, LegacyRole::Admin, LegacyRole::User];

    pub fn parse(name: &str) -> Option<Self> {
        LegacyRole::ALL.into_iter().find(|role| role.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LegacyRole::SuperAdmin => "super_admin",
            LegacyRole::Admin => "admin",
            LegacyRole::User => "user",
        }
    }

    /// The fixed grant table for this role
    pub fn grants(self) -> &'static [(Action, Subject)] {
        match self {
            LegacyRole::SuperAdmin => SUPER_ADMIN_GRANTS,
            LegacyRole::Admin => ADMIN_GRANTS,
            LegacyRole::User => USER_GRANTS,
        }
    }
}

impl std::fmt::Display for LegacyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
