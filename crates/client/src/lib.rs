//! Typed REST bindings for the Souk backend.
//!
//! One module per resource family, one async function per backend
//! operation. This layer is a pure transport binding: no retries, no
//! caching, one HTTP call per invocation. Rejected requests surface the
//! underlying transport error unchanged; callers that want caching or
//! retry go through `souk-query`.

pub mod admin;
pub mod cart;
pub mod category;
pub mod chat;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod http;
pub mod order;
pub mod product;
pub mod profile;
pub mod wishlist;

pub use config::{ClientConfig, Session};
pub use error::ClientError;
pub use http::ApiClient;
