//! Movie list catalog
//!
//! Turns an uploaded list of movie titles into enriched TMDB records that can
//! be browsed, pruned and submitted to a persistence endpoint.
//!
//! # Pipeline
//!
//! ```text
//!  text file ──▶ parse_queries ──▶ CatalogResolver ──▶ MovieCollection ──▶ RecordSink
//!                 (trim, drop       (search → details     (remove by id)      (single POST)
//!                  blank lines)      per title, bounded)
//! ```
//!
//! `UploadSession` ties the stages together and reports every outcome as a
//! user-facing [`Notice`].
//!
//! # Example
//!
//! ```ignore
//! use catalog::{CatalogResolver, HttpSink, UploadSession};
//!
//! let resolver = CatalogResolver::new(Arc::new(tmdb_client), 5);
//! let mut session = UploadSession::new(resolver, HttpSink::new(http, endpoint, timeout));
//! session.load_text("Inception\nThe Matrix\n");
//! let notices = session.search().await;
//! ```

mod collection;
mod error;
mod ingestion;
mod lookup;
pub mod models;
mod persistence;
mod resolver;
mod session;
pub mod settings;

#[cfg(test)]
mod mocks;

pub use collection::MovieCollection;
pub use error::{ResolveError, SaveError};
pub use ingestion::{load_queries, parse_queries};
pub use lookup::MovieLookup;
pub use models::{MovieRecord, Notice, NoticeLevel, Query};
pub use persistence::{HttpSink, RecordSink, SaveReceipt};
pub use resolver::{BatchReport, CatalogResolver, QueryOutcome, DEFAULT_CONCURRENCY};
pub use session::UploadSession;
pub use settings::{Settings, SettingsError};
