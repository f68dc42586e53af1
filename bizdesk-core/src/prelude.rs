//! Common imports for Bizdesk pages
//!
//! ```rust,ignore
//! use bizdesk_core::prelude::*;
//! ```

pub use crate::ability::{Ability, Action, Subject};
pub use crate::config::{AccessConfig, BizdeskConfig};
pub use crate::error::{AccessError, AccessResult};
pub use crate::guard::{
    Can, Html, Navigator, PageGuard, PageVisibility, ProtectedPage, Tier, TieredContent,
    VisibilityFlag,
};
pub use crate::query::Capabilities;
pub use crate::routing::{
    GuestOnly, RequireSession, RouteDecision, RouteGuard, RouteTable, SessionStatus,
};
pub use crate::session::{AuthState, SessionResolver, SessionUser};
pub use crate::store::{AbilityContext, AbilityProvider, StoreState};
