//! Filtered views over the catalog.

use tracing::debug;

use dex_types::SpeciesRef;

use crate::catalog::CatalogStore;

/// A filtered snapshot of the catalog: the subsequence of entries whose
/// name contains the query (case-insensitively), in catalog order.
///
/// Each rebuild carries a fresh version tag. Batches realized against an
/// older version can be recognized as stale and discarded, since in-flight
/// work is never cancelled.
#[derive(Debug, Clone)]
pub struct FilteredView {
    version: u64,
    entries: Vec<SpeciesRef>,
}

impl FilteredView {
    /// The view that exists before the catalog is loaded.
    pub fn empty() -> Self {
        Self {
            version: 0,
            entries: Vec::new(),
        }
    }

    /// Derive a view from the store's current order. A trimmed empty query
    /// matches everything.
    pub fn derive(store: &CatalogStore, query: &str, version: u64) -> Self {
        let needle = query.trim().to_lowercase();
        let entries: Vec<SpeciesRef> = if needle.is_empty() {
            store.entries().to_vec()
        } else {
            store
                .entries()
                .iter()
                .filter(|entry| entry.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };

        debug!(
            version,
            query = %needle,
            matched = entries.len(),
            total = store.len(),
            "derived filtered view"
        );

        Self { version, entries }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SpeciesRef> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[SpeciesRef] {
        &self.entries
    }
}
