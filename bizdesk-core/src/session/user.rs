//! Authenticated-user profile as delivered by the backend

use serde::{Deserialize, Serialize};

/// Role reference inside the user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    pub name: String,
}

/// Permission reference inside the user profile (`name` is `"<subject>.<action>"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRef {
    pub name: String,
}

/// The authenticated user as far as access control cares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<PermissionRef>>,
}

impl SessionUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), email: None, role: None, permissions: None }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(RoleRef { name: role.into() });
        self
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions =
            Some(permissions.into_iter().map(|name| PermissionRef { name: name.into() }).collect());
        self
    }

    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().map(|role| role.name.as_str())
    }

    /// Permission names, empty when the profile carries none
    pub fn permission_names(&self) -> Vec<&str> {
        self.permissions
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|permission| permission.name.as_str())
            .collect()
    }
}

/// Snapshot of the auth subsystem: who is signed in and whether that is known yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub is_loading: bool,
}

impl AuthState {
    /// Session check still in flight
    pub fn loading() -> Self {
        Self { user: None, is_loading: true }
    }

    /// Session check finished without a user
    pub fn anonymous() -> Self {
        Self { user: None, is_loading: false }
    }

    pub fn authenticated(user: SessionUser) -> Self {
        Self { user: Some(user), is_loading: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_profile() {
        let json = r#"{
            "id": "42",
            "email": "ops@example.com",
            "role": { "name": "admin" },
            "permissions": [{ "name": "companies.view" }, { "name": "companies.create" }]
        }"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();

        assert_eq!(user.role_name(), Some("admin"));
        assert_eq!(user.permission_names(), vec!["companies.view", "companies.create"]);
    }

    #[test]
    fn missing_fields_default_to_none() {
        let user: SessionUser = serde_json::from_str(r#"{"id":"7"}"#).unwrap();
        assert_eq!(user.role_name(), None);
        assert!(user.permission_names().is_empty());
    }

    #[test]
    fn auth_state_constructors() {
        assert!(AuthState::loading().is_loading);
        assert!(AuthState::anonymous().user.is_none());
        let state = AuthState::authenticated(SessionUser::new("1").with_role("user"));
        assert!(!state.is_loading);
        assert_eq!(state.user.unwrap().role_name(), Some("user"));
    }
}
