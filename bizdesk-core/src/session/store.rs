//! Session storage trait and types

use super::SessionUser;
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A signed-in browser session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque token carried by the cookie or bearer header
    pub id: String,

    /// Profile fetched at sign-in
    pub user: SessionUser,

    pub created_at: DateTime<Utc>,

    pub expires_at: DateTime<Utc>,

    /// Last time a request resolved this session; does not extend `expires_at`
    pub last_accessed_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: impl Into<String>, user: SessionUser, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self { id: id.into(), user, created_at: now, expires_at, last_accessed_at: now }
    }

    /// Create a session with a random id that lives for `max_age`
    pub fn issue(user: SessionUser, max_age: Duration) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), user, Utc::now() + max_age)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Record an access. The expiry stays fixed at issue time.
    pub fn touch(&mut self) {
        self.last_accessed_at = Utc::now();
    }
}

/// Session storage trait
///
/// Implement this trait to back sessions with something other than memory.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<Session>>;

    async fn set(&self, session: Session) -> Result<()>;

    async fn delete(&self, id: &str) -> Result<()>;

    async fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }

    /// Returns the number of sessions deleted
    async fn cleanup_expired(&self) -> Result<usize>;

    async fn count(&self) -> Result<usize>;
}

#[async_trait::async_trait]
impl<S: SessionStore> SessionStore for std::sync::Arc<S> {
    async fn get(&self, id: &str) -> Result<Option<Session>> {
        (**self).get(id).await
    }

    async fn set(&self, session: Session) -> Result<()> {
        (**self).set(session).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        (**self).delete(id).await
    }

    async fn exists(&self, id: &str) -> Result<bool> {
        (**self).exists(id).await
    }

    async fn cleanup_expired(&self) -> Result<usize> {
        (**self).cleanup_expired().await
    }

    async fn count(&self) -> Result<usize> {
        (**self).count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_creation() {
        let expires_at = Utc::now() + Duration::hours(1);
        let session = Session::new("test-id", SessionUser::new("u-1"), expires_at);

        assert_eq!(session.id, "test-id");
        assert_eq!(session.user.id, "u-1");
        assert!(!session.is_expired());
    }

    #[test]
    fn test_issued_sessions_have_unique_ids() {
        let a = Session::issue(SessionUser::new("u-1"), Duration::minutes(5));
        let b = Session::issue(SessionUser::new("u-1"), Duration::minutes(5));
        assert_ne!(a.id, b.id);
        assert!(!a.is_expired());
    }

    #[test]
    fn test_session_expiration() {
        let expires_at = Utc::now() - Duration::seconds(1);
        let session = Session::new("test-id", SessionUser::new("u-1"), expires_at);

        assert!(session.is_expired());
    }

    #[test]
    fn test_session_touch() {
        let expires_at = Utc::now() + Duration::hours(1);
        let mut session = Session::new("test-id", SessionUser::new("u-1"), expires_at);

        let initial_access = session.last_accessed_at;
        std::thread::sleep(std::time::Duration::from_millis(10));

        session.touch();
        assert!(session.last_accessed_at > initial_access);
    }

    #[test]
    fn test_touch_keeps_fixed_expiry() {
        let expires_at = Utc::now() + Duration::minutes(5);
        let mut session = Session::new("test-id", SessionUser::new("u-1"), expires_at);

        session.touch();
        assert_eq!(session.expires_at, expires_at);
    }
}
