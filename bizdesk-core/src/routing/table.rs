use super::{GuestOnly, RequireSession, RouteDecision, SessionStatus};
use http::{Method, Uri};

/// Guard attached to a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteGuard {
    RequireSession(RequireSession),
    GuestOnly(GuestOnly),
}

impl RouteGuard {
    /// `attempted` is the full location (path and query) to return to after sign-in
    pub fn decide<V>(
        &self,
        status: &SessionStatus,
        attempted: &str,
        children: impl FnOnce() -> V,
    ) -> RouteDecision<V> {
        match self {
            RouteGuard::RequireSession(guard) => guard.decide(status, attempted, children),
            RouteGuard::GuestOnly(guard) => guard.decide(status, children),
        }
    }
}

/// Route pattern plus the guard applied to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatcher {
    /// `/admin/*` matches `/admin` and everything below it, anything else is exact
    pub pattern: String,
    /// None applies to every method
    pub methods: Option<Vec<Method>>,
    pub guard: RouteGuard,
}

impl RouteMatcher {
    pub fn new(pattern: impl Into<String>, guard: RouteGuard) -> Self {
        Self { pattern: pattern.into(), methods: None, guard }
    }

    pub fn with_methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = Some(methods);
        self
    }

    /// Match against a request path; any query or fragment is ignored
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        if let Some(ref methods) = self.methods {
            if !methods.contains(method) {
                return false;
            }
        }

        let path = path.split(['?', '#']).next().unwrap_or_default();
        self.matches_pattern(path)
    }

    fn matches_pattern(&self, path: &str) -> bool {
        match self.pattern.strip_suffix("/*") {
            Some("") => path.starts_with('/'),
            Some(prefix) => {
                path == prefix
                    || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
            }
            None => path == self.pattern,
        }
    }
}

/// Ordered route guards; the first match wins
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    matchers: Vec<RouteMatcher>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, pattern: impl Into<String>, guard: RouteGuard) -> Self {
        self.matchers.push(RouteMatcher::new(pattern, guard));
        self
    }

    pub fn matcher(mut self, matcher: RouteMatcher) -> Self {
        self.matchers.push(matcher);
        self
    }

    /// First guard whose pattern matches `uri.path()`
    pub fn guard_for(&self, method: &Method, uri: &Uri) -> Option<&RouteGuard> {
        let path = uri.path();
        self.matchers.iter().find(|m| m.matches(method, path)).map(|m| &m.guard)
    }

    /// Decide a request; unguarded routes always render.
    ///
    /// Patterns see only the path. The sign-in callback keeps the query.
    pub fn decide<V>(
        &self,
        method: &Method,
        uri: &Uri,
        status: &SessionStatus,
        children: impl FnOnce() -> V,
    ) -> RouteDecision<V> {
        match self.guard_for(method, uri) {
            Some(guard) => {
                let attempted = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
                guard.decide(status, attempted, children)
            }
            None => RouteDecision::Render(children()),
        }
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}
