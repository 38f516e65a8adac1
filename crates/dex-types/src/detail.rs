//! The fully resolved per-species detail record.

use serde::{Deserialize, Serialize};

/// Number of moves surfaced in the detail display.
pub const MOVE_PREVIEW_LEN: usize = 5;

/// Everything the detail view needs for one species, flattened from the
/// remote payload. Produced once per entry and treated as an immutable
/// value object; the cache never invalidates or refetches it.
///
/// All sequences keep the order the remote source reported: type order is
/// significant for display, and stats/abilities/moves are shown as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    /// Numeric species id.
    pub id: u32,

    /// Canonical name (matches the catalog identity).
    pub name: String,

    /// Height in decimeters, as reported by the source.
    pub height_dm: u32,

    /// Weight in hectograms, as reported by the source.
    pub weight_hg: u32,

    /// Type names in slot order (1-2 entries).
    pub types: Vec<String>,

    /// Ability names in reported order.
    pub abilities: Vec<String>,

    /// (stat name, base value) pairs in reported order.
    pub stats: Vec<(String, u32)>,

    /// Move names in reported order.
    pub moves: Vec<String>,
}

impl DetailRecord {
    /// Height in meters (the source reports decimeters).
    pub fn height_m(&self) -> f64 {
        f64::from(self.height_dm) / 10.0
    }

    /// Weight in kilograms (the source reports hectograms).
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight_hg) / 10.0
    }

    /// The first few moves, for the detail display.
    pub fn move_preview(&self) -> &[String] {
        let end = self.moves.len().min(MOVE_PREVIEW_LEN);
        &self.moves[..end]
    }
}
