//! Title → record resolution pipeline

use std::sync::Arc;

use futures::{stream, StreamExt};

use crate::error::ResolveError;
use crate::lookup::MovieLookup;
use crate::models::{MovieRecord, Query};

/// Default number of titles resolved at the same time.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Outcome of resolving a single query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Search and details both succeeded
    Found(MovieRecord),
    /// Search returned no candidates
    NotFound,
    /// A remote call failed
    Failed(String),
}

/// Aggregated result of a batch resolution.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Resolved records, in query order
    pub records: Vec<MovieRecord>,
    /// Queries for which the search returned nothing
    pub not_found: Vec<Query>,
    /// Queries whose lookup failed, with the error text
    pub failed: Vec<(Query, String)>,
}

impl BatchReport {
    fn push(&mut self, query: Query, outcome: QueryOutcome) {
        match outcome {
            QueryOutcome::Found(record) => self.records.push(record),
            QueryOutcome::NotFound => self.not_found.push(query),
            QueryOutcome::Failed(reason) => self.failed.push((query, reason)),
        }
    }
}

/// Resolves uploaded titles against a [`MovieLookup`] with bounded concurrency.
pub struct CatalogResolver<L> {
    lookup: Arc<L>,
    concurrency: usize,
}

impl<L: MovieLookup + 'static> CatalogResolver<L> {
    /// `concurrency` is clamped to at least 1.
    pub fn new(lookup: Arc<L>, concurrency: usize) -> Self {
        Self {
            lookup,
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Resolve a single query: search, take the first candidate, fetch details.
    pub async fn resolve_one(&self, query: &str) -> QueryOutcome {
        resolve_query(self.lookup.as_ref(), query).await
    }

    /// Resolve every query, isolating per-title failures.
    ///
    /// At most `concurrency` lookups are in flight. The report keeps query
    /// order regardless of completion order. Only a panicked lookup task fails
    /// the whole batch.
    pub async fn resolve_all(&self, queries: &[Query]) -> Result<BatchReport, ResolveError> {
        tracing::info!(
            "Resolving {} titles (concurrency {})",
            queries.len(),
            self.concurrency
        );

        let outcomes: Vec<Result<QueryOutcome, tokio::task::JoinError>> =
            stream::iter(queries.iter().cloned())
                .map(|query| {
                    let lookup = Arc::clone(&self.lookup);
                    tokio::spawn(async move { resolve_query(lookup.as_ref(), &query).await })
                })
                .buffered(self.concurrency)
                .collect()
                .await;

        let mut report = BatchReport::default();
        for (query, outcome) in queries.iter().zip(outcomes) {
            report.push(query.clone(), outcome?);
        }

        tracing::info!(
            "Resolved {} of {} titles ({} not found, {} failed)",
            report.records.len(),
            queries.len(),
            report.not_found.len(),
            report.failed.len()
        );
        Ok(report)
    }
}

async fn resolve_query<L: MovieLookup + ?Sized>(lookup: &L, query: &str) -> QueryOutcome {
    let candidates = match lookup.search(query).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Error fetching data for \"{}\": {}", query, e);
            return QueryOutcome::Failed(e.to_string());
        }
    };

    let Some(first) = candidates.into_iter().next() else {
        tracing::debug!("No match for \"{}\"", query);
        return QueryOutcome::NotFound;
    };

    match lookup.details(first.id).await {
        Ok(details) => QueryOutcome::Found(MovieRecord::from(details)),
        Err(e) => {
            tracing::error!(
                "Error fetching data for \"{}\" (tmdb id {}): {}",
                query,
                first.id,
                e
            );
            QueryOutcome::Failed(e.to_string())
        }
    }
}
