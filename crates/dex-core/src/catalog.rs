//! The full ordered catalog snapshot.

use std::collections::HashSet;

use tracing::{debug, warn};

use dex_types::{SortKey, SpeciesRef};

use crate::error::CatalogError;
use crate::source::DetailSource;

/// Holds the full species index (identity + locator pairs) in its current
/// sort order. Populated once from the bulk listing call; re-sorting only
/// reorders, it never invalidates data.
#[derive(Debug, Default)]
pub struct CatalogStore {
    entries: Vec<SpeciesRef>,
    loaded: bool,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the store from the remote index. Idempotent: a second call
    /// is a no-op, the listing is only fetched once per session.
    pub async fn load(&mut self, source: &dyn DetailSource) -> Result<(), CatalogError> {
        if self.loaded {
            debug!("catalog already loaded, skipping listing fetch");
            return Ok(());
        }

        let entries = source
            .fetch_listing()
            .await
            .map_err(|source| CatalogError::ListingFetch { source })?;

        let unique: HashSet<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        if unique.len() != entries.len() {
            warn!(
                entries = entries.len(),
                unique = unique.len(),
                "species index contains duplicate identities"
            );
        }

        debug!(count = entries.len(), "catalog loaded");
        self.entries = entries;
        self.loaded = true;
        Ok(())
    }

    /// Reorder the store in place. Idempotent and a pure function of the
    /// key: the resulting order does not depend on the previous one.
    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::Name => self.entries.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::NumericId => self.entries.sort_by_key(|e| match e.numeric_id() {
                Some(id) => (0u8, id),
                // Unparseable locators sort after all numbered entries.
                None => (1u8, 0),
            }),
        }
    }

    pub fn entries(&self) -> &[SpeciesRef] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<SpeciesRef>) -> Self {
        Self {
            entries,
            loaded: true,
        }
    }
}
