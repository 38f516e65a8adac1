//! REST client for the species index and detail endpoints.
//!
//! ## Endpoints
//! - Index: `GET {base}?limit=N` returning `{ "results": [{ "name", "url" }] }`
//! - Detail: `GET {url}` returning the nested species payload
//!
//! The detail payload wraps every name in slot objects
//! (`types[].type.name`, `abilities[].ability.name`, ...); this module
//! flattens them into [`DetailRecord`] so nothing downstream deals with
//! the wire shape.

use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tracing::debug;

use dex_types::{DetailRecord, SpeciesRef};

/// Public species index endpoint.
const POKEAPI_INDEX: &str = "https://pokeapi.co/api/v2/pokemon";

/// Full catalog size requested from the index endpoint in one call.
pub const DEFAULT_INDEX_LIMIT: usize = 1118;

/// Blocking HTTP client for the species index.
#[derive(Clone)]
pub struct RestClient {
    base_url: String,
    index_limit: usize,
    agent: ureq::Agent,
}

impl RestClient {
    /// Default request timeout in seconds (can be overridden by env).
    const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connect timeout in seconds (can be overridden by env).
    const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    fn default_timeouts() -> (Duration, Duration) {
        let timeout_secs = std::env::var("DEX_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_TIMEOUT_SECS);
        let connect_secs = std::env::var("DEX_HTTP_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_CONNECT_TIMEOUT_SECS);
        (
            Duration::from_secs(timeout_secs),
            Duration::from_secs(connect_secs),
        )
    }

    fn build_agent(timeout: Duration, connect_timeout: Duration) -> ureq::Agent {
        ureq::AgentBuilder::new()
            .timeout(timeout)
            .timeout_connect(connect_timeout)
            .build()
    }

    /// Create a client for the public species index.
    pub fn pokeapi() -> Self {
        Self::new(POKEAPI_INDEX)
    }

    /// Create a client with a custom index endpoint.
    pub fn new(base_url: &str) -> Self {
        let (timeout, connect_timeout) = Self::default_timeouts();
        Self::with_timeouts(base_url, timeout, connect_timeout)
    }

    /// Create a client with explicit timeouts.
    pub fn with_timeouts(base_url: &str, timeout: Duration, connect_timeout: Duration) -> Self {
        Self {
            base_url: base_url.to_string(),
            index_limit: DEFAULT_INDEX_LIMIT,
            agent: Self::build_agent(timeout, connect_timeout),
        }
    }

    /// Override the number of entries requested from the index endpoint.
    pub fn with_index_limit(mut self, limit: usize) -> Self {
        self.index_limit = limit;
        self
    }

    /// Fetch the full species index in one bulk call.
    pub fn fetch_index(&self) -> Result<Vec<SpeciesRef>> {
        let url = format!("{}?limit={}", self.base_url, self.index_limit);
        let page: IndexPage = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| anyhow!("species index request failed: {}", e))?
            .into_json()
            .map_err(|e| anyhow!("failed to parse species index response: {}", e))?;

        debug!(count = page.results.len(), "fetched species index");

        Ok(page
            .results
            .into_iter()
            .map(|entry| SpeciesRef::new(entry.name, entry.url))
            .collect())
    }

    /// Fetch one species detail payload and flatten it.
    pub fn fetch_detail(&self, url: &str) -> Result<DetailRecord> {
        let payload: DetailPayload = self
            .agent
            .get(url)
            .call()
            .map_err(|e| anyhow!("detail request for {} failed: {}", url, e))?
            .into_json()
            .map_err(|e| anyhow!("failed to parse detail response for {}: {}", url, e))?;

        debug!(url = url, id = payload.id, "fetched species detail");

        Ok(payload.flatten())
    }
}

// ==================== Wire format ====================

#[derive(Debug, Deserialize)]
struct IndexPage {
    results: Vec<IndexEntry>,
}

#[derive(Debug, Deserialize)]
struct IndexEntry {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    type_info: Named,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: Named,
}

#[derive(Debug, Deserialize)]
struct StatSlot {
    base_stat: u32,
    stat: Named,
}

#[derive(Debug, Deserialize)]
struct MoveSlot {
    #[serde(rename = "move")]
    move_info: Named,
}

/// Nested detail payload as returned by the remote endpoint.
#[derive(Debug, Deserialize)]
struct DetailPayload {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    types: Vec<TypeSlot>,
    abilities: Vec<AbilitySlot>,
    stats: Vec<StatSlot>,
    moves: Vec<MoveSlot>,
}

impl DetailPayload {
    /// Flatten the slot wrappers, preserving reported order everywhere.
    fn flatten(self) -> DetailRecord {
        DetailRecord {
            id: self.id,
            name: self.name,
            height_dm: self.height,
            weight_hg: self.weight,
            types: self.types.into_iter().map(|t| t.type_info.name).collect(),
            abilities: self
                .abilities
                .into_iter()
                .map(|a| a.ability.name)
                .collect(),
            stats: self
                .stats
                .into_iter()
                .map(|s| (s.stat.name, s.base_stat))
                .collect(),
            moves: self.moves.into_iter().map(|m| m.move_info.name).collect(),
        }
    }
}
