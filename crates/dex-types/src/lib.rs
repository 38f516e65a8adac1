//! Shared value types for the species catalog workspace.
//!
//! This crate holds the data model that every other crate agrees on:
//! [`SpeciesRef`] (one catalog index entry), [`DetailRecord`] (the fully
//! resolved per-species record), [`SortKey`], and the pure display helpers
//! the presentation layer formats records with.

pub mod detail;
pub mod display;
pub mod species;

// Re-export main types for convenience
pub use detail::DetailRecord;
pub use display::{artwork_url, capitalize_words, padded_id, weaknesses_for};
pub use species::{SortKey, SpeciesRef};
