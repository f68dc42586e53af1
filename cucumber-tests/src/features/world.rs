use bizdesk_core::config::AccessConfig;
use bizdesk_core::guard::{Html, RecordingNavigator};
use bizdesk_core::query::Capabilities;
use bizdesk_core::routing::RouteDecision;
use bizdesk_core::session::{AuthState, SessionUser};
use bizdesk_core::store::{AbilityContext, AbilityProvider};
use cucumber::World as CucumberWorld;

/// Shared state for one scenario: the user being built, the store and the
/// last thing a guard produced
#[derive(Debug, CucumberWorld)]
#[world(init = Self::new)]
pub struct BizdeskWorld {
    pub config: AccessConfig,
    pub provider: AbilityProvider,
    pub context: AbilityContext,
    pub user: Option<SessionUser>,
    pub auth: AuthState,
    pub navigator: RecordingNavigator,
    pub last_page: Option<Html>,
    pub last_section: Option<Option<String>>,
    pub last_route: Option<RouteDecision<String>>,
    pub last_guard_passed: Option<bool>,
}

impl BizdeskWorld {
    pub fn new() -> Self {
        let provider = AbilityProvider::new();
        let context = provider.context();
        Self {
            config: AccessConfig::default(),
            provider,
            context,
            user: None,
            auth: AuthState::loading(),
            navigator: RecordingNavigator::new(),
            last_page: None,
            last_section: None,
            last_route: None,
            last_guard_passed: None,
        }
    }

    pub fn sync(&mut self, auth: AuthState) {
        self.provider.sync(&auth);
        self.auth = auth;
    }

    /// Publish the user built so far, or an anonymous state if there is none
    pub fn resolve(&mut self) {
        let auth = match self.user.clone() {
            Some(user) => AuthState::authenticated(user),
            None => AuthState::anonymous(),
        };
        self.sync(auth);
    }

    pub fn caps(&self) -> Capabilities {
        Capabilities::from_context(&self.context)
    }

    pub fn user_mut(&mut self) -> &mut SessionUser {
        self.user.get_or_insert_with(|| SessionUser::new("scenario-user"))
    }
}

impl Default for BizdeskWorld {
    fn default() -> Self {
        Self::new()
    }
}
