//! The seam between the engine and the network.
//!
//! [`DetailSource`] is the only way the engine reaches the remote index;
//! production code plugs in [`HttpDetailSource`] (blocking `ureq` client
//! bridged onto the runtime's blocking pool), tests plug in an in-memory
//! fake.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use dex_transport::RestClient;
use dex_types::{DetailRecord, SpeciesRef};

/// Remote access needed by the engine: one bulk listing call plus one
/// detail call per entry.
#[async_trait]
pub trait DetailSource: Send + Sync {
    /// Fetch the full species index (name + detail URL pairs).
    async fn fetch_listing(&self) -> Result<Vec<SpeciesRef>>;

    /// Fetch and flatten the detail record behind one index entry.
    async fn fetch_detail(&self, entry: &SpeciesRef) -> Result<DetailRecord>;
}

/// [`DetailSource`] backed by the blocking REST client.
///
/// Each call is moved onto `spawn_blocking` so engine tasks suspend
/// cooperatively instead of stalling the runtime.
pub struct HttpDetailSource {
    client: RestClient,
}

impl HttpDetailSource {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DetailSource for HttpDetailSource {
    async fn fetch_listing(&self) -> Result<Vec<SpeciesRef>> {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || client.fetch_index())
            .await
            .map_err(|e| anyhow!("index fetch task failed: {}", e))?
    }

    async fn fetch_detail(&self, entry: &SpeciesRef) -> Result<DetailRecord> {
        let client = self.client.clone();
        let url = entry.url.clone();
        tokio::task::spawn_blocking(move || client.fetch_detail(&url))
            .await
            .map_err(|e| anyhow!("detail fetch task failed: {}", e))?
    }
}
