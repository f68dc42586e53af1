//! Session-based route guards
//!
//! These gate whole route subtrees on one question: is there a session?
//! They do not consult the ability. A route can require a session here and
//! still guard its content with a [`PageGuard`](crate::guard::PageGuard).
//!
//! ```ignore
//! let table = RouteTable::new()
//!     .route("/auth/*", RouteGuard::GuestOnly(GuestOnly::new(&config.access)))
//!     .route("/*", RouteGuard::RequireSession(RequireSession::new(&config.access)));
//! ```

mod session_guard;
mod table;

pub use session_guard::{GuestOnly, RequireSession, RouteDecision, SessionStatus};
pub use table::{RouteGuard, RouteMatcher, RouteTable};
