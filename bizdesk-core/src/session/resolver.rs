//! Session resolution for incoming requests
//!
//! Turns a request's cookie or bearer token into an [`AuthState`] and feeds
//! it to the [`AbilityProvider`], which makes this the one place the
//! current ability is written from.

use super::{AuthState, Session, SessionStore, SessionUser};
use crate::config::SessionsConfig;
use crate::error::{AccessError, AccessResult};
use crate::store::AbilityProvider;
use anyhow::Result;
use http::Request;
use std::sync::Arc;

/// Resolves the session behind a request
pub struct SessionResolver<S: SessionStore> {
    store: Arc<S>,
    cookie_name: String,
    bearer_enabled: bool,
    max_age: chrono::Duration,
}

impl<S: SessionStore> SessionResolver<S> {
    pub fn new(store: Arc<S>, config: &SessionsConfig) -> Self {
        Self {
            store,
            cookie_name: config.cookie_name.clone(),
            bearer_enabled: config.bearer_enabled,
            max_age: config.max_age_duration(),
        }
    }

    /// Start a session for a freshly signed-in user and store it
    pub async fn issue(&self, user: SessionUser) -> Result<Session> {
        let session = Session::issue(user, self.max_age);
        self.store.set(session.clone()).await?;
        log::debug!("Issued session for user {} until {}", session.user.id, session.expires_at);
        Ok(session)
    }

    /// Load the live session for a request, if any.
    ///
    /// Expired sessions are deleted from the store and treated as absent.
    pub async fn session<B>(&self, req: &Request<B>) -> Result<Option<Session>> {
        let Some(id) = self.extract_session_id(req) else {
            return Ok(None);
        };

        let Some(mut session) = self.store.get(&id).await? else {
            log::debug!("Session token does not match a stored session");
            return Ok(None);
        };

        if session.is_expired() {
            log::debug!("Dropping expired session for user {}", session.user.id);
            self.store.delete(&id).await?;
            return Ok(None);
        }

        session.touch();
        self.store.set(session.clone()).await?;
        Ok(Some(session))
    }

    /// Resolve the request into an auth snapshot
    pub async fn resolve<B>(&self, req: &Request<B>) -> Result<AuthState> {
        Ok(match self.session(req).await? {
            Some(session) => AuthState::authenticated(session.user),
            None => AuthState::anonymous(),
        })
    }

    /// Resolve the request and publish the result through the provider.
    ///
    /// The provider goes through `loading` first. A store failure leaves it
    /// resolved with no user so nothing is granted.
    pub async fn resolve_into<B>(
        &self,
        req: &Request<B>,
        provider: &mut AbilityProvider,
    ) -> AccessResult<AuthState> {
        provider.sync(&AuthState::loading());

        match self.resolve(req).await {
            Ok(state) => {
                provider.sync(&state);
                Ok(state)
            }
            Err(e) => {
                log::warn!("Session resolution failed: {}", e);
                provider.sync(&AuthState::anonymous());
                Err(AccessError::Session(e))
            }
        }
    }

    /// Priority: Cookie > Bearer token
    fn extract_session_id<B>(&self, req: &Request<B>) -> Option<String> {
        if let Some(id) = self.extract_from_cookie(req) {
            log::trace!("Session ID extracted from cookie");
            return Some(id);
        }

        if self.bearer_enabled {
            if let Some(id) = self.extract_from_bearer(req) {
                log::trace!("Session ID extracted from Bearer token");
                return Some(id);
            }
        }

        None
    }

    fn extract_from_cookie<B>(&self, req: &Request<B>) -> Option<String> {
        let prefix = format!("{}=", self.cookie_name);
        req.headers()
            .get(http::header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|header| {
                header
                    .split(';')
                    .find_map(|cookie| cookie.trim().strip_prefix(&prefix).map(str::to_string))
            })
            .filter(|id| !id.is_empty())
    }

    fn extract_from_bearer<B>(&self, req: &Request<B>) -> Option<String> {
        req.headers()
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(|s| s.trim().to_string())
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{Action, Subject};
    use crate::session::MemorySessionStore;
    use crate::store::StoreState;
    use chrono::{Duration, Utc};

    async fn store_with(session: Session) -> Arc<MemorySessionStore> {
        let store = Arc::new(MemorySessionStore::new());
        store.set(session).await.unwrap();
        store
    }

    fn request(header: (&str, &str)) -> Request<()> {
        Request::builder().uri("/companies").header(header.0, header.1).body(()).unwrap()
    }

    #[tokio::test]
    async fn resolves_session_from_cookie() {
        let user = SessionUser::new("u-1").with_permissions(["companies.view"]);
        let session = Session::new("tok-1", user.clone(), Utc::now() + Duration::hours(1));
        let store = store_with(session).await;
        let resolver = SessionResolver::new(store, &SessionsConfig::default());

        let req = request(("cookie", "theme=dark; bizdesk_session=tok-1"));
        let state = resolver.resolve(&req).await.unwrap();

        assert_eq!(state, AuthState::authenticated(user));
    }

    #[tokio::test]
    async fn resolves_session_from_bearer() {
        let user = SessionUser::new("u-2").with_role("admin");
        let store = store_with(Session::new("tok-2", user, Utc::now() + Duration::hours(1))).await;
        let resolver = SessionResolver::new(store, &SessionsConfig::default());

        let state = resolver.resolve(&request(("authorization", "Bearer tok-2"))).await.unwrap();
        assert_eq!(state.user.unwrap().id, "u-2");
    }

    #[tokio::test]
    async fn bearer_ignored_when_disabled() {
        let user = SessionUser::new("u-2");
        let store = store_with(Session::new("tok-2", user, Utc::now() + Duration::hours(1))).await;
        let config = SessionsConfig { bearer_enabled: false, ..SessionsConfig::default() };
        let resolver = SessionResolver::new(store, &config);

        let state = resolver.resolve(&request(("authorization", "Bearer tok-2"))).await.unwrap();
        assert_eq!(state, AuthState::anonymous());
    }

    #[tokio::test]
    async fn expired_session_is_removed() {
        let store = store_with(Session::new(
            "old",
            SessionUser::new("u-3"),
            Utc::now() - Duration::seconds(1),
        ))
        .await;
        let resolver = SessionResolver::new(Arc::clone(&store), &SessionsConfig::default());

        let state = resolver.resolve(&request(("cookie", "bizdesk_session=old"))).await.unwrap();
        assert_eq!(state, AuthState::anonymous());
        assert!(!store.exists("old").await.unwrap());
    }

    #[tokio::test]
    async fn resolve_into_publishes_compiled_ability() {
        let user = SessionUser::new("u-4").with_permissions(["companies.view", "companies.create"]);
        let store = store_with(Session::new("tok-4", user, Utc::now() + Duration::hours(1))).await;
        let resolver = SessionResolver::new(store, &SessionsConfig::default());
        let mut provider = AbilityProvider::new();
        let context = provider.context();

        let req = request(("cookie", "bizdesk_session=tok-4"));
        resolver.resolve_into(&req, &mut provider).await.unwrap();

        let snapshot = context.snapshot();
        assert_eq!(snapshot.state, StoreState::Resolved);
        assert!(snapshot.ability.can(Action::Create, Subject::Companies));
        assert!(!snapshot.ability.can(Action::Delete, Subject::Companies));
    }

    #[tokio::test]
    async fn issued_session_resolves() {
        let store = Arc::new(MemorySessionStore::new());
        let config = SessionsConfig { max_age: 60, ..SessionsConfig::default() };
        let resolver = SessionResolver::new(Arc::clone(&store), &config);

        let session = resolver.issue(SessionUser::new("u-5").with_role("user")).await.unwrap();
        assert!(session.expires_at <= Utc::now() + Duration::seconds(60));
        assert_eq!(store.count().await.unwrap(), 1);

        let cookie = format!("bizdesk_session={}", session.id);
        let state = resolver.resolve(&request(("cookie", cookie.as_str()))).await.unwrap();
        assert_eq!(state.user.map(|u| u.id), Some("u-5".to_string()));
    }
}
