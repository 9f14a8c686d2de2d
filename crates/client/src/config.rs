use souk_core::Role;

/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development; override
/// via environment variables in other environments.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API (default: `http://localhost:8080/api/v1`).
    pub base_url: String,
    /// Per-request timeout in seconds (default: `30`). Timeouts live in
    /// the transport layer only; upper layers inherit them.
    pub request_timeout_secs: u64,
    /// Session attached to every request, if signed in.
    pub session: Option<Session>,
}

/// An opaque session token issued for one role.
///
/// The token is carried as a cookie whose key name is versioned per
/// role (see [`souk_core::roles`]); this layer never inspects or
/// refreshes it.
#[derive(Debug, Clone)]
pub struct Session {
    pub role: Role,
    pub token: String,
}

impl Session {
    pub fn new(role: Role, token: impl Into<String>) -> Self {
        Self {
            role,
            token: token.into(),
        }
    }

    /// Render as a `Cookie` header value.
    pub fn cookie_value(&self) -> String {
        format!("{}={}", self.role.session_cookie(), self.token)
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                         |
    /// |-----------------------------|---------------------------------|
    /// | `SOUK_API_URL`              | `http://localhost:8080/api/v1`  |
    /// | `SOUK_REQUEST_TIMEOUT_SECS` | `30`                            |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("SOUK_API_URL").unwrap_or_else(|_| "http://localhost:8080/api/v1".into());

        let request_timeout_secs: u64 = std::env::var("SOUK_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SOUK_REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            request_timeout_secs,
            session: None,
        }
    }

    /// Point the client at an explicit base URL (tests, previews).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_secs: 30,
            session: None,
        }
    }

    /// Attach a session to be sent with every request.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }
}
