use souk_core::CoreError;

/// Errors from the REST transport layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout) or
    /// the response body could not be decoded.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The payload failed local validation; no HTTP call was issued.
    #[error(transparent)]
    Validation(#[from] CoreError),
}

impl ClientError {
    /// Whether this error came from the transport rather than from
    /// local validation. Retry policies only apply to transport errors.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ClientError::Validation(_))
    }
}
