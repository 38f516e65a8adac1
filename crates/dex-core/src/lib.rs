//! Catalog browsing engine over a remote species index.
//!
//! This crate is the state machine behind the browser: it reconciles a
//! full catalog snapshot ([`CatalogStore`]), a derived filtered/sorted
//! view ([`FilteredView`]), a pagination cursor into that view
//! ([`PaginationCursor`]), and an independent navigation cursor into item
//! details ([`DetailNavigator`]) - with lazy per-species detail resolution
//! memoized in a shared [`DetailCache`].
//!
//! [`CatalogSession`] ties the pieces together behind operations that map
//! 1:1 to user intents (`sort`, `filter`, `load_more`, `open_detail`,
//! `navigate`). Every operation returns pure data; rendering belongs to
//! the caller.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use dex_core::{CatalogSession, HttpDetailSource};
//! use dex_transport::RestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dex_core::CatalogError> {
//!     let source = Arc::new(HttpDetailSource::new(RestClient::pokeapi()));
//!     let mut session = CatalogSession::new(source);
//!     session.load().await?;
//!
//!     session.filter("saur")?;
//!     let batch = session.load_more().await?; // first 10 matches, resolved
//!
//!     let record = session.open_detail(0).await?;
//!     let next = session.navigate(1).await?;
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod catalog;
pub mod error;
pub mod navigator;
pub mod pager;
pub mod session;
pub mod source;
pub mod view;

// Re-export main types
pub use cache::DetailCache;
pub use catalog::CatalogStore;
pub use error::CatalogError;
pub use navigator::{DetailNavigator, NavigationState};
pub use pager::{Batch, PaginationCursor, DEFAULT_BATCH_SIZE};
pub use session::CatalogSession;
pub use source::{DetailSource, HttpDetailSource};
pub use view::FilteredView;

#[cfg(test)]
pub(crate) mod testkit;
