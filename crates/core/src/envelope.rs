//! The `{ code, result }` response envelope.
//!
//! Every backend endpoint wraps its payload in the same envelope. The
//! `result` field is `null` for empty states (an empty cart, a product
//! not on the wishlist), so consumers that read fields off the payload
//! directly substitute a typed empty-state object via [`EmptyState`]
//! instead of handling `None` at every call site.

use serde::{Deserialize, Serialize};

/// Uniform wrapper around every backend response payload.
///
/// Envelopes are created per request and never mutated; a refetch or
/// cache invalidation replaces the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Backend status code carried in the body (HTTP-style, e.g. `200`).
    pub code: i32,
    /// Payload, absent for empty states.
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    /// Whether the body-level code is in the success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Map the payload, keeping the code.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            code: self.code,
            result: self.result.map(f),
        }
    }
}

impl<T: EmptyState> Envelope<T> {
    /// Substitute the documented empty-state object when `result` is
    /// absent. Idempotent: an envelope that already carries a payload
    /// (normalized or not) is returned unchanged.
    pub fn or_empty(self) -> Envelope<T> {
        Envelope {
            code: self.code,
            result: Some(self.result.unwrap_or_else(T::empty)),
        }
    }
}

/// The documented empty-state object for a resource.
///
/// Implementations must be pure and cheap; `or_empty` may construct the
/// value on every normalization pass.
pub trait EmptyState {
    fn empty() -> Self;
}

/// The wishlist membership probe returns a bare boolean; an absent
/// result means "not on the wishlist".
impl EmptyState for bool {
    fn empty() -> Self {
        false
    }
}
