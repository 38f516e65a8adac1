//! Shared test source for session integration tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use parking_lot::Mutex;

use dex_core::DetailSource;
use dex_types::{DetailRecord, SpeciesRef};

/// Call-counting in-memory source with failure injection.
pub struct FakeSource {
    listing: Vec<SpeciesRef>,
    records: HashMap<String, DetailRecord>,
    detail_calls: Mutex<HashMap<String, usize>>,
    listing_calls: AtomicUsize,
    failing: Mutex<HashSet<String>>,
}

impl FakeSource {
    pub fn new(species: &[(&str, u32)]) -> Self {
        let listing = species
            .iter()
            .map(|(name, id)| {
                SpeciesRef::new(
                    *name,
                    format!("https://example.test/api/pokemon/{}/", id),
                )
            })
            .collect();
        let records = species
            .iter()
            .map(|(name, id)| (name.to_string(), record(name, *id)))
            .collect();
        Self {
            listing,
            records,
            detail_calls: Mutex::new(HashMap::new()),
            listing_calls: AtomicUsize::new(0),
            failing: Mutex::new(HashSet::new()),
        }
    }

    pub fn fail_on(&self, name: &str) {
        self.failing.lock().insert(name.to_string());
    }

    pub fn clear_failure(&self, name: &str) {
        self.failing.lock().remove(name);
    }

    pub fn detail_calls(&self, name: &str) -> usize {
        self.detail_calls.lock().get(name).copied().unwrap_or(0)
    }

    pub fn total_detail_calls(&self) -> usize {
        self.detail_calls.lock().values().sum()
    }

    pub fn listing_calls(&self) -> usize {
        self.listing_calls.load(Ordering::SeqCst)
    }
}

pub fn record(name: &str, id: u32) -> DetailRecord {
    DetailRecord {
        id,
        name: name.to_string(),
        height_dm: 7,
        weight_hg: 69,
        types: vec!["grass".to_string()],
        abilities: vec!["overgrow".to_string()],
        stats: vec![("hp".to_string(), 45)],
        moves: vec!["tackle".to_string()],
    }
}

#[async_trait]
impl DetailSource for FakeSource {
    async fn fetch_listing(&self) -> Result<Vec<SpeciesRef>> {
        self.listing_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.listing.clone())
    }

    async fn fetch_detail(&self, entry: &SpeciesRef) -> Result<DetailRecord> {
        *self
            .detail_calls
            .lock()
            .entry(entry.name.clone())
            .or_insert(0) += 1;
        tokio::task::yield_now().await;
        if self.failing.lock().contains(&entry.name) {
            return Err(anyhow!("simulated detail failure for {}", entry.name));
        }
        self.records
            .get(&entry.name)
            .cloned()
            .ok_or_else(|| anyhow!("no record for {}", entry.name))
    }
}
