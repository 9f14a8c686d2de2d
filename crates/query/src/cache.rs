//! The caching runtime.
//!
//! [`QueryCache`] owns one slot per [`QueryKey`]. A slot is a
//! [`tokio::sync::OnceCell`], which gives the two properties the UI
//! layer depends on:
//!
//! - **Deduplication**: concurrent callers of the same key share one
//!   in-flight fetch; at most one network call per key at a time.
//! - **Abandonment safety**: if the caller driving the fetch is
//!   cancelled (its component unmounted), another waiter takes over
//!   the initialization; nothing throws and no stale value is written.
//!
//! Successful envelopes stay cached until invalidated; transport
//! errors are never cached. Invalidating a key removes the slot, so
//! the next read fetches fresh and replaces it (last-write-wins).

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{OnceCell, RwLock};

use crate::error::QueryError;
use crate::key::QueryKey;
use crate::options::QueryOptions;
use crate::registry::QuerySpec;

/// Delay between retry attempts. The retry policy is a fixed count,
/// not a backoff schedule; backoff belongs to connection-level code.
const RETRY_DELAY: Duration = Duration::from_millis(250);

type CachedValue = Arc<dyn Any + Send + Sync>;

/// Deduplicating cache over query results.
///
/// Cheap to share: wrap in an `Arc` and clone into whatever owns the
/// UI loop. All methods take `&self`.
#[derive(Default)]
pub struct QueryCache {
    slots: RwLock<HashMap<QueryKey, Arc<OnceCell<CachedValue>>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a query through the cache.
    ///
    /// Returns the cached envelope if the slot is filled; otherwise
    /// fetches (deduplicated per key) and fills it. `options.retry`
    /// extra attempts are made after transport failures, with a fixed
    /// delay between attempts. Local validation failures are never
    /// retried.
    pub async fn run<T>(
        &self,
        spec: &QuerySpec<T>,
        options: QueryOptions,
    ) -> Result<Arc<T>, QueryError>
    where
        T: Send + Sync + 'static,
    {
        if !options.enabled {
            return Err(QueryError::Disabled);
        }

        let cell = self.slot(spec.key()).await;
        let mut attempt: u32 = 0;
        loop {
            let init = cell
                .get_or_try_init(|| async {
                    tracing::debug!(key = %spec.key(), "query fetch");
                    let value = spec.invoke().await?;
                    Ok::<CachedValue, souk_client::ClientError>(Arc::new(value))
                })
                .await;

            match init {
                Ok(value) => {
                    return Arc::clone(value)
                        .downcast::<T>()
                        .map_err(|_| QueryError::KeyTypeConflict(spec.key().clone()));
                }
                Err(error) => {
                    if !error.is_transport() || attempt >= options.retry {
                        return Err(QueryError::Transport(error));
                    }
                    attempt += 1;
                    tracing::warn!(key = %spec.key(), attempt, error = %error, "query retry");
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        }
    }

    /// Seed a slot with an already-known value (hydration, data the
    /// caller obtained out of band). A slot that is already filled or
    /// in flight is left untouched.
    pub async fn prime<T>(&self, key: QueryKey, value: T)
    where
        T: Send + Sync + 'static,
    {
        let cell = self.slot(&key).await;
        if cell.set(Arc::new(value) as CachedValue).is_ok() {
            tracing::debug!(key = %key, "query primed");
        }
    }

    /// Drop one cached entry. Returns whether a slot existed.
    ///
    /// Callers already waiting on the old slot still receive its
    /// result; they started before the invalidation. The next `run`
    /// creates a fresh slot and fetches.
    pub async fn invalidate(&self, key: &QueryKey) -> bool {
        let removed = self.slots.write().await.remove(key).is_some();
        if removed {
            tracing::debug!(key = %key, "query invalidated");
        }
        removed
    }

    /// Drop every cached entry of one resource family. Returns the
    /// number of slots removed.
    pub async fn invalidate_family(&self, family: &str) -> usize {
        let mut slots = self.slots.write().await;
        let before = slots.len();
        slots.retain(|key, _| key.family() != family);
        let removed = before - slots.len();
        if removed > 0 {
            tracing::debug!(family, removed, "query family invalidated");
        }
        removed
    }

    /// Drop everything (sign-out, role switch).
    pub async fn clear(&self) {
        self.slots.write().await.clear();
        tracing::debug!("query cache cleared");
    }

    /// Whether a filled or in-flight slot exists for this key.
    pub async fn contains(&self, key: &QueryKey) -> bool {
        self.slots.read().await.contains_key(key)
    }

    // ---- private helpers ----

    async fn slot(&self, key: &QueryKey) -> Arc<OnceCell<CachedValue>> {
        let mut slots = self.slots.write().await;
        Arc::clone(slots.entry(key.clone()).or_default())
    }
}
