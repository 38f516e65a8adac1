//! Memoizing cache for per-species detail records.
//!
//! Keyed by catalog identity (the species name). Writes are write-once: a
//! record, once resolved, is never refetched or overwritten. Concurrent
//! resolutions for the same identity are deduplicated - the first caller
//! fetches while the rest wait on a [`Notify`] and then read the cached
//! result, so fast repeated navigation never duplicates network traffic.
//!
//! # Example
//!
//! ```ignore
//! use dex_core::DetailCache;
//!
//! let cache = DetailCache::new();
//! let record = cache.resolve(&entry, &source).await?; // fetches
//! let again = cache.resolve(&entry, &source).await?;  // cache hit, no fetch
//! assert!(Arc::ptr_eq(&record, &again));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{Mutex, Notify};
use tracing::debug;

use dex_types::{DetailRecord, SpeciesRef};

use crate::error::CatalogError;
use crate::source::DetailSource;

/// In-memory detail cache keyed by species identity.
///
/// Thread-safe: the resolved map sits behind an `RwLock`, and an in-flight
/// table serializes concurrent fetches per identity.
#[derive(Debug, Default)]
pub struct DetailCache {
    /// Resolved records: identity -> record. Write-once per identity.
    resolved: RwLock<HashMap<String, Arc<DetailRecord>>>,

    /// Identities with a fetch in flight; waiters block on the `Notify`.
    inflight: Mutex<HashMap<String, Arc<Notify>>>,
}

impl DetailCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized record for `entry`, fetching it on a miss.
    ///
    /// At most one fetch is in flight per identity: concurrent callers for
    /// the same entry wait for the leader and then read its result. If the
    /// leader's fetch fails, the identity stays unresolved (so a retry is
    /// possible) and one waiter takes over leadership on wake-up.
    pub async fn resolve(
        &self,
        entry: &SpeciesRef,
        source: &dyn DetailSource,
    ) -> Result<Arc<DetailRecord>, CatalogError> {
        loop {
            if let Some(record) = self.resolved.read().get(&entry.name).cloned() {
                return Ok(record);
            }

            let (notify, is_leader) = {
                let mut inflight = self.inflight.lock().await;
                if let Some(existing) = inflight.get(&entry.name) {
                    (existing.clone(), false)
                } else {
                    let notify = Arc::new(Notify::new());
                    inflight.insert(entry.name.clone(), notify.clone());
                    (notify, true)
                }
            };

            if !is_leader {
                notify.notified().await;
                continue;
            }

            debug!(name = %entry.name, url = %entry.url, "detail cache miss, fetching");
            let outcome = source.fetch_detail(entry).await;

            let result = match outcome {
                Ok(record) => {
                    let mut resolved = self.resolved.write();
                    // Write-once: keep the existing record if one landed first.
                    Ok(resolved
                        .entry(entry.name.clone())
                        .or_insert_with(|| Arc::new(record))
                        .clone())
                }
                Err(source_err) => Err(CatalogError::DetailFetch {
                    identity: entry.name.clone(),
                    source: source_err,
                }),
            };

            {
                let mut inflight = self.inflight.lock().await;
                if let Some(waiters) = inflight.remove(&entry.name) {
                    waiters.notify_waiters();
                }
            }

            return result;
        }
    }

    /// Get an already-resolved record without fetching.
    pub fn get(&self, identity: &str) -> Option<Arc<DetailRecord>> {
        self.resolved.read().get(identity).cloned()
    }

    /// Whether `identity` is already resolved.
    pub fn contains(&self, identity: &str) -> bool {
        self.resolved.read().contains_key(identity)
    }

    /// Number of resolved records.
    pub fn len(&self) -> usize {
        self.resolved.read().len()
    }

    /// Whether no record has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.resolved.read().is_empty()
    }
}
