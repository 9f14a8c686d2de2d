//! Session roles and their cookie names.
//!
//! The backend issues opaque session tokens per role; cookie key names
//! are versioned independently so a role's session format can rotate
//! without logging the other roles out.

use serde::{Deserialize, Serialize};

/// Session cookie key for customer accounts.
pub const CUSTOMER_SESSION_COOKIE: &str = "souk_customer_session_v2";

/// Session cookie key for seller accounts.
pub const SELLER_SESSION_COOKIE: &str = "souk_seller_session_v2";

/// Session cookie key for admin accounts.
pub const ADMIN_SESSION_COOKIE: &str = "souk_admin_session_v1";

/// The role a session token was issued for.
///
/// Also used by the route table: a route's required permission is either
/// `None` (public) or one of these roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Seller,
    Admin,
}

impl Role {
    /// Cookie key carrying this role's session token.
    pub fn session_cookie(self) -> &'static str {
        match self {
            Role::Customer => CUSTOMER_SESSION_COOKIE,
            Role::Seller => SELLER_SESSION_COOKIE,
            Role::Admin => ADMIN_SESSION_COOKIE,
        }
    }
}
