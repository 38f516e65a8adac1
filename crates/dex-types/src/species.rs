//! Catalog index entries and sort keys.

use serde::{Deserialize, Serialize};

/// One entry of the remote species index: canonical name plus the detail
/// endpoint URL. Names are unique within a catalog.
///
/// The detail record itself is not stored here; it lives in the shared
/// detail cache, keyed by `name`, so that every view over the catalog sees
/// the same resolved records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRef {
    /// Canonical species name (the catalog identity).
    pub name: String,

    /// Detail endpoint URL, e.g. `https://pokeapi.co/api/v2/pokemon/25/`.
    pub url: String,
}

impl SpeciesRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Parse the numeric species id embedded in the detail URL.
    ///
    /// The index endpoint encodes the id as the trailing path segment
    /// (`.../pokemon/{id}/`). Returns `None` when the URL does not end in a
    /// parseable integer; such entries sort after all numbered ones.
    pub fn numeric_id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse::<u32>().ok())
    }
}

/// Client-side ordering of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Case-sensitive lexicographic ascending by name.
    Name,
    /// Ascending by the id embedded in the locator URL.
    NumericId,
}
