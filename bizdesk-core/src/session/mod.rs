//! Sessions and the authenticated-user profile
//!
//! The session layer answers one question for access control: who is signed
//! in, and is that known yet. Its output is an [`AuthState`], which the
//! [`AbilityProvider`](crate::store::AbilityProvider) compiles into the
//! current ability and the route guards use for coarse gating.
//!
//! # Example
//!
//! ```rust,ignore
//! use bizdesk_core::session::{MemorySessionStore, SessionResolver};
//!
//! let store = Arc::new(MemorySessionStore::new());
//! let resolver = SessionResolver::new(store, &config.sessions);
//! let auth = resolver.resolve(&request).await?;
//! ```

mod memory;
mod resolver;
mod store;
mod user;

pub use memory::MemorySessionStore;
pub use resolver::SessionResolver;
pub use store::{Session, SessionStore};
pub use user::{AuthState, PermissionRef, RoleRef, SessionUser};
