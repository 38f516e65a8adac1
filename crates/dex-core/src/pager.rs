//! Incremental batch realization over a filtered view.

use std::sync::Arc;

use tracing::{debug, warn};

use dex_types::DetailRecord;

use crate::cache::DetailCache;
use crate::error::CatalogError;
use crate::source::DetailSource;
use crate::view::FilteredView;

/// Entries realized per `next_batch` call. Bounds the burst network and
/// render cost of a single interaction.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// One realized batch: the resolved records plus the version of the view
/// they came from. A batch whose version no longer matches the session's
/// current view is stale and should be dropped, not rendered.
#[derive(Debug, Clone)]
pub struct Batch {
    pub records: Vec<Arc<DetailRecord>>,
    pub view_version: u64,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Walks a filtered view in fixed-size batches, tracking how much of it
/// has been realized (detail-resolved).
///
/// `realized` is monotonic within one view lifetime; the session resets it
/// whenever a new view is derived.
#[derive(Debug)]
pub struct PaginationCursor {
    batch_size: usize,
    realized: usize,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationCursor {
    pub fn new() -> Self {
        Self::with_batch_size(DEFAULT_BATCH_SIZE)
    }

    pub fn with_batch_size(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            realized: 0,
        }
    }

    /// Start over at the top of a freshly derived view.
    pub fn reset(&mut self) {
        self.realized = 0;
    }

    /// How many leading view entries have been realized so far.
    pub fn realized(&self) -> usize {
        self.realized
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Whether further batches may be requested for this view.
    pub fn has_more(&self, view: &FilteredView) -> bool {
        self.realized < view.len()
    }

    /// Realize the next batch of the view, strictly in ascending index
    /// order.
    ///
    /// Resolution is sequential: if one fetch fails, the realized boundary
    /// stops at the last success instead of skipping ahead, and the error
    /// (carrying the failed identity) is returned. Members resolved before
    /// the failure stay cached and realized; the next call retries from
    /// the failed entry.
    pub async fn next_batch(
        &mut self,
        view: &FilteredView,
        cache: &DetailCache,
        source: &dyn DetailSource,
    ) -> Result<Batch, CatalogError> {
        let end = (self.realized + self.batch_size).min(view.len());
        let mut records = Vec::with_capacity(end - self.realized);

        for index in self.realized..end {
            let entry = &view.entries()[index];
            match cache.resolve(entry, source).await {
                Ok(record) => {
                    records.push(record);
                    self.realized = index + 1;
                }
                Err(err) => {
                    warn!(
                        index,
                        realized = self.realized,
                        identity = err.identity().unwrap_or("<unknown>"),
                        "batch realization stopped at failed entry"
                    );
                    return Err(err);
                }
            }
        }

        debug!(
            realized = self.realized,
            total = view.len(),
            batch = records.len(),
            "realized batch"
        );

        Ok(Batch {
            records,
            view_version: view.version(),
        })
    }
}
