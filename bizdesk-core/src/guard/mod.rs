//! Guards that gate rendering and navigation on the current ability
//!
//! - [`PageGuard`] redirects away from a page when the page asks it to
//! - [`Can`] renders a section or its fallback
//! - [`TieredContent`] picks one branch by a fixed precedence of checks
//! - [`ProtectedPage`] swaps the whole page for an Access Denied view
//! - [`PageVisibility`] computes menu flags (discoverability only)
//!
//! Every guard treats a still-loading ability as "no answer yet": it shows
//! a neutral or loading state and never redirects or renders a denial.

mod navigator;
mod page;
mod protected;
mod section;
mod tiered;
mod view;
mod visibility;

pub use navigator::{Navigator, RecordingNavigator};
pub use page::PageGuard;
pub use protected::{PageOutcome, ProtectedPage};
pub use section::Can;
pub use tiered::{Tier, TieredContent};
pub use view::Html;
pub use visibility::{NavEntry, PageVisibility, VisibilityFlag};
