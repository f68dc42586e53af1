use crate::config::AccessConfig;
use crate::session::{AuthState, SessionUser};

/// Session presence as the route guards see it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated(SessionUser),
    Anonymous,
}

impl From<&AuthState> for SessionStatus {
    fn from(auth: &AuthState) -> Self {
        match (&auth.user, auth.is_loading) {
            (_, true) => SessionStatus::Loading,
            (Some(user), false) => SessionStatus::Authenticated(user.clone()),
            (None, false) => SessionStatus::Anonymous,
        }
    }
}

impl SessionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionStatus::Loading)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// What a route guard wants done with the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision<V> {
    /// Session status unknown: block with a spinner
    Spinner,
    /// Go elsewhere; the redirect always takes effect
    Redirect(String),
    Render(V),
}

impl<V> RouteDecision<V> {
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> RouteDecision<U> {
        match self {
            RouteDecision::Spinner => RouteDecision::Spinner,
            RouteDecision::Redirect(location) => RouteDecision::Redirect(location),
            RouteDecision::Render(view) => RouteDecision::Render(f(view)),
        }
    }

    pub fn redirect_location(&self) -> Option<&str> {
        match self {
            RouteDecision::Redirect(location) => Some(location),
            _ => None,
        }
    }
}

/// Authenticated-only subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireSession {
    sign_in_path: String,
    callback_param: String,
}

impl RequireSession {
    pub fn new(config: &AccessConfig) -> Self {
        Self {
            sign_in_path: config.sign_in_path.clone(),
            callback_param: config.callback_param.clone(),
        }
    }

    /// Sign-in location carrying the attempted location for the post-login return.
    ///
    /// Appends to an existing query on the sign-in path instead of starting a second one.
    pub fn sign_in_location(&self, attempted: &str) -> String {
        let separator = if self.sign_in_path.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}",
            self.sign_in_path,
            separator,
            self.callback_param,
            urlencoding::encode(attempted)
        )
    }

    pub fn decide<V>(
        &self,
        status: &SessionStatus,
        attempted: &str,
        children: impl FnOnce() -> V,
    ) -> RouteDecision<V> {
        match status {
            SessionStatus::Loading => RouteDecision::Spinner,
            SessionStatus::Authenticated(_) => RouteDecision::Render(children()),
            SessionStatus::Anonymous => {
                log::debug!("No session for {}, sending to sign-in", attempted);
                RouteDecision::Redirect(self.sign_in_location(attempted))
            }
        }
    }
}

/// Guest-only subtree such as the sign-in page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestOnly {
    landing: String,
}

impl GuestOnly {
    pub fn new(config: &AccessConfig) -> Self {
        Self { landing: config.default_landing.clone() }
    }

    pub fn decide<V>(
        &self,
        status: &SessionStatus,
        children: impl FnOnce() -> V,
    ) -> RouteDecision<V> {
        match status {
            SessionStatus::Loading => RouteDecision::Spinner,
            SessionStatus::Anonymous => RouteDecision::Render(children()),
            SessionStatus::Authenticated(user) => {
                log::debug!("User {} already signed in, sending to {}", user.id, self.landing);
                RouteDecision::Redirect(self.landing.clone())
            }
        }
    }
}
