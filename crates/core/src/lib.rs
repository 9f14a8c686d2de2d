//! Souk domain layer.
//!
//! Zero-I/O types shared by every other crate in the workspace: the
//! backend response envelope, the pagination contract, per-resource
//! domain models, session roles, and payload validation. Nothing in
//! this crate performs network or filesystem access.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod chat;
pub mod dashboard;
pub mod envelope;
pub mod error;
pub mod order;
pub mod page;
pub mod profile;
pub mod roles;
pub mod types;
pub mod wishlist;

pub use envelope::{EmptyState, Envelope};
pub use error::CoreError;
pub use roles::Role;
pub use types::EntityId;
