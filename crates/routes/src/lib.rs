//! Static route table for the storefront.
//!
//! Maps each logical route to a pure URL-builder, the role required to
//! enter it, and the screen it renders. Layout code looks entries up
//! here; the permission guard itself lives with the layout, not in
//! this crate.

pub mod screen;
pub mod table;

pub use screen::{Screen, ScreenId};
pub use table::{entry, RouteEntry, RouteKey, ROUTES};
