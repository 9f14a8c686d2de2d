use souk_client::ClientError;

use crate::key::QueryKey;

/// Errors surfaced by the query layer.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The caller disabled the query; nothing was fetched.
    #[error("query disabled by caller")]
    Disabled,

    /// The client layer failed. The underlying error (transport
    /// failure, or a pre-flight validation failure that never reached
    /// the network) is passed through unchanged; this layer adds no
    /// interpretation.
    #[error(transparent)]
    Transport(#[from] ClientError),

    /// Two registry entries were declared with the same key but
    /// different payload types. This is a programming error in the
    /// registry, not a runtime condition.
    #[error("cache slot {0} holds a different payload type")]
    KeyTypeConflict(QueryKey),
}
