//! HTTP transport for the remote species index.
//!
//! This crate owns the two remote calls the engine needs:
//! - one bulk GET of the full species index (name + detail URL pairs)
//! - one GET per species at its detail URL
//!
//! The wire payloads are nested; [`rest`] flattens them into the shared
//! [`dex_types::DetailRecord`] value object. The client is blocking
//! (`ureq`); async callers bridge it with `tokio::task::spawn_blocking`.
//!
//! # Example
//!
//! ```ignore
//! use dex_transport::RestClient;
//!
//! let client = RestClient::pokeapi();
//! let index = client.fetch_index()?;
//! let detail = client.fetch_detail(&index[0].url)?;
//! ```

pub mod rest;

// Re-export main types for convenience
pub use rest::{RestClient, DEFAULT_INDEX_LIMIT};
