//! Minimal observable UI-state stores.
//!
//! Each store wraps one piece of global UI state in a
//! [`tokio::sync::watch`] channel: a single mutator, any number of
//! subscribers, no persistence, no cross-store coordination.

pub mod sidebar;

pub use sidebar::SidebarStore;
