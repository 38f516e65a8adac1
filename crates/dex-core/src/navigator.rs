//! Forward/backward navigation cursor for the detail view.

use std::sync::Arc;

use tracing::debug;

use dex_types::DetailRecord;

use crate::cache::DetailCache;
use crate::error::CatalogError;
use crate::source::DetailSource;
use crate::view::FilteredView;

/// Navigator position: either no detail view is open, or it sits on one
/// index of the current filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    Closed,
    Open { position: usize },
}

/// Single-position cursor for modal-style detail browsing, independent of
/// the pagination cursor over the same view.
///
/// Boundary policy: a step past either end of the view is a no-op - the
/// position stays put rather than wrapping or erroring. The only
/// transition out of `Closed` is `open`.
#[derive(Debug, Default)]
pub struct DetailNavigator {
    state: NavigationState,
}

impl Default for NavigationState {
    fn default() -> Self {
        NavigationState::Closed
    }
}

impl DetailNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Current position, if a detail view is open.
    pub fn position(&self) -> Option<usize> {
        match self.state {
            NavigationState::Closed => None,
            NavigationState::Open { position } => Some(position),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, NavigationState::Closed)
    }

    /// Close the detail view. Valid from any state.
    pub fn close(&mut self) {
        self.state = NavigationState::Closed;
    }

    /// Open the detail view at `index` and resolve that entry's record.
    ///
    /// An empty view is signalled with [`CatalogError::EmptyView`] rather
    /// than a panic; an index past the end with
    /// [`CatalogError::PositionOutOfRange`]. On a fetch failure the
    /// navigator stays open at `index` so the next call retries.
    pub async fn open(
        &mut self,
        view: &FilteredView,
        index: usize,
        cache: &DetailCache,
        source: &dyn DetailSource,
    ) -> Result<Arc<DetailRecord>, CatalogError> {
        if view.is_empty() {
            return Err(CatalogError::EmptyView);
        }
        if index >= view.len() {
            return Err(CatalogError::PositionOutOfRange {
                position: index,
                len: view.len(),
            });
        }

        self.state = NavigationState::Open { position: index };
        self.resolve_current(view, cache, source).await
    }

    /// Move the position by `direction` (-1 or +1) and resolve the record
    /// at the (possibly unchanged) position.
    ///
    /// Out-of-range candidates leave the position unchanged. The returned
    /// record is always the one for the position after the move; stepping
    /// onto an uncached entry suspends until its record arrives, so stale
    /// data from the previous position is never handed back.
    pub async fn step(
        &mut self,
        view: &FilteredView,
        direction: isize,
        cache: &DetailCache,
        source: &dyn DetailSource,
    ) -> Result<Arc<DetailRecord>, CatalogError> {
        let NavigationState::Open { position } = self.state else {
            return Err(CatalogError::DetailClosed);
        };
        if view.is_empty() {
            return Err(CatalogError::EmptyView);
        }

        let candidate = position as isize + direction;
        if candidate >= 0 && (candidate as usize) < view.len() {
            self.state = NavigationState::Open {
                position: candidate as usize,
            };
        } else {
            debug!(position, direction, len = view.len(), "step at boundary, staying put");
        }

        self.resolve_current(view, cache, source).await
    }

    async fn resolve_current(
        &self,
        view: &FilteredView,
        cache: &DetailCache,
        source: &dyn DetailSource,
    ) -> Result<Arc<DetailRecord>, CatalogError> {
        let NavigationState::Open { position } = self.state else {
            return Err(CatalogError::DetailClosed);
        };
        let entry = view.get(position).ok_or(CatalogError::PositionOutOfRange {
            position,
            len: view.len(),
        })?;
        cache.resolve(entry, source).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use crate::testkit::MockSource;

    fn view_of(source: &MockSource) -> FilteredView {
        let store = CatalogStore::from_entries(source.listing().to_vec());
        FilteredView::derive(&store, "", 1)
    }

    #[tokio::test]
    async fn test_open_resolves_and_sets_position() {
        let source = MockSource::new(&[("bulbasaur", 1), ("ivysaur", 2)]);
        let cache = DetailCache::new();
        let view = view_of(&source);
        let mut nav = DetailNavigator::new();

        let record = nav.open(&view, 1, &cache, &source).await.unwrap();
        assert_eq!(record.name, "ivysaur");
        assert_eq!(nav.position(), Some(1));
    }

    #[tokio::test]
    async fn test_open_on_empty_view_signals_without_panicking() {
        let source = MockSource::new(&[]);
        let cache = DetailCache::new();
        let view = view_of(&source);
        let mut nav = DetailNavigator::new();

        let err = nav.open(&view, 0, &cache, &source).await.unwrap_err();
        assert!(matches!(err, CatalogError::EmptyView));
        assert!(!nav.is_open());
    }

    #[tokio::test]
    async fn test_open_out_of_range() {
        let source = MockSource::new(&[("pikachu", 25)]);
        let cache = DetailCache::new();
        let view = view_of(&source);
        let mut nav = DetailNavigator::new();

        let err = nav.open(&view, 5, &cache, &source).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::PositionOutOfRange { position: 5, len: 1 }
        ));
    }

    #[tokio::test]
    async fn test_step_requires_open_state() {
        let source = MockSource::new(&[("pikachu", 25)]);
        let cache = DetailCache::new();
        let view = view_of(&source);
        let mut nav = DetailNavigator::new();

        let err = nav.step(&view, 1, &cache, &source).await.unwrap_err();
        assert!(matches!(err, CatalogError::DetailClosed));
    }

    #[tokio::test]
    async fn test_step_is_noop_at_both_boundaries() {
        let source = MockSource::new(&[("bulbasaur", 1), ("ivysaur", 2)]);
        let cache = DetailCache::new();
        let view = view_of(&source);
        let mut nav = DetailNavigator::new();

        nav.open(&view, 0, &cache, &source).await.unwrap();
        let record = nav.step(&view, -1, &cache, &source).await.unwrap();
        assert_eq!(record.name, "bulbasaur");
        assert_eq!(nav.position(), Some(0));

        nav.step(&view, 1, &cache, &source).await.unwrap();
        let record = nav.step(&view, 1, &cache, &source).await.unwrap();
        assert_eq!(record.name, "ivysaur");
        assert_eq!(nav.position(), Some(1));
    }

    #[tokio::test]
    async fn test_step_round_trip_returns_to_origin() {
        let source = MockSource::new(&[("bulbasaur", 1), ("ivysaur", 2), ("venusaur", 3)]);
        let cache = DetailCache::new();
        let view = view_of(&source);
        let mut nav = DetailNavigator::new();

        nav.open(&view, 0, &cache, &source).await.unwrap();
        for _ in 0..view.len() {
            nav.step(&view, 1, &cache, &source).await.unwrap();
        }
        for _ in 0..view.len() {
            nav.step(&view, -1, &cache, &source).await.unwrap();
        }
        assert_eq!(nav.position(), Some(0));
    }

    #[tokio::test]
    async fn test_step_resolves_lazily_through_the_cache() {
        let source = MockSource::new(&[("bulbasaur", 1), ("ivysaur", 2)]);
        let cache = DetailCache::new();
        let view = view_of(&source);
        let mut nav = DetailNavigator::new();

        nav.open(&view, 0, &cache, &source).await.unwrap();
        let record = nav.step(&view, 1, &cache, &source).await.unwrap();
        assert_eq!(record.name, "ivysaur");

        // stepping back re-reads the memoized record, no second fetch
        nav.step(&view, -1, &cache, &source).await.unwrap();
        assert_eq!(source.detail_calls("bulbasaur"), 1);
    }
}
