//! Structured engine errors.
//!
//! Every fetch failure carries the offending identity or locator so the
//! presentation layer can offer a targeted retry; nothing is swallowed.

/// Errors surfaced by the catalog engine.
#[derive(Debug)]
pub enum CatalogError {
    /// The bulk index listing could not be fetched. Fatal to the initial
    /// load; the catalog cannot be shown until a retry succeeds.
    ListingFetch {
        /// Underlying transport or parse failure.
        source: anyhow::Error,
    },

    /// One species' detail could not be fetched. Recoverable: the entry
    /// stays unresolved and is retried on next access.
    DetailFetch {
        /// Catalog identity of the entry that failed.
        identity: String,
        /// Underlying transport or parse failure.
        source: anyhow::Error,
    },

    /// An operation needed a view entry but the current view is empty.
    EmptyView,

    /// A detail was opened at an index outside the current view.
    PositionOutOfRange {
        /// Requested position.
        position: usize,
        /// Current view length.
        len: usize,
    },

    /// A browse operation ran before the catalog was loaded.
    NotLoaded,

    /// A navigation step ran with no detail view open.
    DetailClosed,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::ListingFetch { source } => {
                write!(f, "failed to fetch species index: {}", source)
            }
            CatalogError::DetailFetch { identity, source } => {
                write!(f, "failed to fetch details for {}: {}", identity, source)
            }
            CatalogError::EmptyView => {
                write!(f, "the filtered view is empty")
            }
            CatalogError::PositionOutOfRange { position, len } => {
                write!(
                    f,
                    "position {} is outside the filtered view (len {})",
                    position, len
                )
            }
            CatalogError::NotLoaded => {
                write!(f, "the catalog has not been loaded yet")
            }
            CatalogError::DetailClosed => {
                write!(f, "no detail view is open")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::ListingFetch { source } | CatalogError::DetailFetch { source, .. } => {
                Some(source.as_ref())
            }
            _ => None,
        }
    }
}

impl CatalogError {
    /// The catalog identity attached to this error, if any.
    pub fn identity(&self) -> Option<&str> {
        match self {
            CatalogError::DetailFetch { identity, .. } => Some(identity),
            _ => None,
        }
    }

    /// Whether a retry of the same operation can succeed.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CatalogError::PositionOutOfRange { .. })
    }
}
