pub mod check;
pub mod flags;
pub mod rules;
pub mod source;

use bizdesk_core::query::Capabilities;
use bizdesk_core::session::{AuthState, SessionUser};
use bizdesk_core::store::AbilityProvider;

/// Resolve a profile through the ability store, the same path requests take
pub(crate) fn capabilities_for(user: &SessionUser) -> Capabilities {
    let mut provider = AbilityProvider::new();
    Capabilities::new(provider.sync(&AuthState::authenticated(user.clone())))
}
