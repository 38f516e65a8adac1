//! One user's browsing session over the catalog.

use std::sync::Arc;

use tracing::debug;

use dex_types::{DetailRecord, SortKey};

use crate::cache::DetailCache;
use crate::catalog::CatalogStore;
use crate::error::CatalogError;
use crate::navigator::{DetailNavigator, NavigationState};
use crate::pager::{Batch, PaginationCursor, DEFAULT_BATCH_SIZE};
use crate::source::DetailSource;
use crate::view::FilteredView;

/// Explicit session state: the catalog snapshot, the shared detail cache,
/// the current filtered view, and the two cursors into it.
///
/// Operations map 1:1 to user intents (`sort`, `filter`, `load_more`,
/// `open_detail`, `navigate`) and return pure data; rendering belongs to
/// the caller. Changing the sort key or the filter derives a fresh view,
/// resets the pagination cursor, and closes the detail navigator - a new
/// browsing session over the new view. Detail memoization survives view
/// rebuilds: the cache is keyed by identity, not by view.
pub struct CatalogSession {
    source: Arc<dyn DetailSource>,
    store: CatalogStore,
    cache: Arc<DetailCache>,
    view: FilteredView,
    next_view_version: u64,
    query: String,
    sort_key: SortKey,
    pager: PaginationCursor,
    navigator: DetailNavigator,
}

impl CatalogSession {
    /// Create a session with the default batch size.
    pub fn new(source: Arc<dyn DetailSource>) -> Self {
        Self::with_batch_size(source, DEFAULT_BATCH_SIZE)
    }

    /// Create a session realizing `batch_size` entries per `load_more`.
    pub fn with_batch_size(source: Arc<dyn DetailSource>, batch_size: usize) -> Self {
        Self {
            source,
            store: CatalogStore::new(),
            cache: Arc::new(DetailCache::new()),
            view: FilteredView::empty(),
            next_view_version: 1,
            query: String::new(),
            sort_key: SortKey::NumericId,
            pager: PaginationCursor::with_batch_size(batch_size),
            navigator: DetailNavigator::new(),
        }
    }

    /// Fetch the full index once, apply the current sort key, and derive
    /// the initial (unfiltered) view.
    pub async fn load(&mut self) -> Result<(), CatalogError> {
        self.store.load(self.source.as_ref()).await?;
        self.store.sort_by(self.sort_key);
        self.rebuild_view();
        Ok(())
    }

    /// Reorder the catalog and start a fresh browsing session over the
    /// re-derived view. The active filter query is reapplied.
    pub fn sort(&mut self, key: SortKey) -> Result<(), CatalogError> {
        if !self.store.is_loaded() {
            return Err(CatalogError::NotLoaded);
        }
        self.sort_key = key;
        self.store.sort_by(key);
        self.rebuild_view();
        Ok(())
    }

    /// Change the filter query and start a fresh browsing session over
    /// the re-derived view.
    pub fn filter(&mut self, query: &str) -> Result<(), CatalogError> {
        if !self.store.is_loaded() {
            return Err(CatalogError::NotLoaded);
        }
        self.query = query.to_string();
        self.rebuild_view();
        Ok(())
    }

    fn rebuild_view(&mut self) {
        self.view = FilteredView::derive(&self.store, &self.query, self.next_view_version);
        self.next_view_version += 1;
        self.pager.reset();
        self.navigator.close();
        debug!(
            version = self.view.version(),
            len = self.view.len(),
            "view rebuilt, cursors reset"
        );
    }

    /// Realize the next batch of the current view.
    pub async fn load_more(&mut self) -> Result<Batch, CatalogError> {
        if !self.store.is_loaded() {
            return Err(CatalogError::NotLoaded);
        }
        self.pager
            .next_batch(&self.view, &self.cache, self.source.as_ref())
            .await
    }

    /// Whether further batches remain in the current view.
    pub fn has_more(&self) -> bool {
        self.pager.has_more(&self.view)
    }

    /// Open the detail view at `index` into the current filtered view.
    pub async fn open_detail(&mut self, index: usize) -> Result<Arc<DetailRecord>, CatalogError> {
        self.navigator
            .open(&self.view, index, &self.cache, self.source.as_ref())
            .await
    }

    /// Step the detail view by `direction` (-1 or +1).
    pub async fn navigate(&mut self, direction: isize) -> Result<Arc<DetailRecord>, CatalogError> {
        self.navigator
            .step(&self.view, direction, &self.cache, self.source.as_ref())
            .await
    }

    /// Close the detail view.
    pub fn close_detail(&mut self) {
        self.navigator.close();
    }

    /// Whether `batch` was realized against the current view. In-flight
    /// work is never cancelled, so a batch that raced a sort or filter
    /// change can come back stale; stale batches must be dropped instead
    /// of rendered.
    pub fn is_current(&self, batch: &Batch) -> bool {
        batch.view_version == self.view.version()
    }

    // ==================== Accessors ====================

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    pub fn cache(&self) -> &Arc<DetailCache> {
        &self.cache
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn realized(&self) -> usize {
        self.pager.realized()
    }

    pub fn navigation(&self) -> NavigationState {
        self.navigator.state()
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }
}
