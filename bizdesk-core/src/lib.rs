//! Bizdesk - Core
//!
//! Access control for the Bizdesk administration console: which pages a
//! signed-in user may see and which actions they may take.
//!
//! # Overview
//!
//! A user's permission strings (`"companies.view"`), or their legacy role
//! when they have none, are compiled into an [`Ability`](ability::Ability).
//! One [`AbilityProvider`](store::AbilityProvider) owns the current ability
//! and republishes it whenever the session changes. Guards and navigation
//! code read it through [`Capabilities`](query::Capabilities).
//!
//! ```rust,ignore
//! use bizdesk_core::prelude::*;
//!
//! let mut provider = AbilityProvider::new();
//! let user = SessionUser::new("42").with_permissions(["companies.view"]);
//! let caps = Capabilities::new(provider.sync(&AuthState::authenticated(user)));
//!
//! assert!(caps.can(Action::View, Subject::Companies));
//! assert!(!caps.can(Action::Delete, Subject::Companies));
//! ```
//!
//! # Architecture
//!
//! - [`ability`] - Permission vocabulary, rules and compilation
//! - [`store`] - The single-writer ability store
//! - [`query`] - `can`, `can_all`, `is_admin` and friends
//! - [`guard`] - Page, section, tiered and full-page guards; menu flags
//! - [`routing`] - Session-presence route guards
//! - [`session`] - Session profile, storage and request resolution
//! - [`http`] - Hyper responses for guard decisions
//! - [`config`] - TOML + environment configuration
//! - [`logging`] - `log` backend

pub mod ability;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod logging;
pub mod prelude;
pub mod query;
pub mod routing;
pub mod session;
pub mod store;

pub use error::{AccessError, AccessResult};
