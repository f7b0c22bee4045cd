//! Stateful coordinator for one upload → search → prune → save cycle.

use std::path::Path;

use crate::collection::MovieCollection;
use crate::error::SaveError;
use crate::ingestion::{load_queries, parse_queries};
use crate::lookup::MovieLookup;
use crate::models::{MovieRecord, Notice, NoticeLevel, Query};
use crate::persistence::RecordSink;
use crate::resolver::CatalogResolver;

pub struct UploadSession<L, S> {
    resolver: CatalogResolver<L>,
    sink: S,
    queries: Vec<Query>,
    collection: MovieCollection,
}

impl<L: MovieLookup + 'static, S: RecordSink> UploadSession<L, S> {
    pub fn new(resolver: CatalogResolver<L>, sink: S) -> Self {
        Self {
            resolver,
            sink,
            queries: Vec::new(),
            collection: MovieCollection::new(),
        }
    }

    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    pub fn records(&self) -> &[MovieRecord] {
        self.collection.records()
    }

    /// Replace the current title list with the lines of `text`.
    pub fn load_text(&mut self, text: &str) -> usize {
        self.queries = parse_queries(text);
        self.queries.len()
    }

    /// Replace the current title list with the contents of a file.
    pub async fn load_file(&mut self, path: impl AsRef<Path>) -> std::io::Result<usize> {
        self.queries = load_queries(path).await?;
        Ok(self.queries.len())
    }

    /// Resolve the loaded titles and replace the collection with the results.
    pub async fn search(&mut self) -> Vec<Notice> {
        if self.queries.is_empty() {
            return vec![emit(Notice::warning(
                "Please upload a file with movie titles.",
            ))];
        }

        let report = match self.resolver.resolve_all(&self.queries).await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Error during data fetch process: {}", e);
                return vec![emit(Notice::error(
                    "An error occurred while fetching movie data.",
                ))];
            }
        };

        let mut notices = Vec::new();
        for (query, _) in &report.failed {
            notices.push(emit(Notice::error(format!(
                "Error fetching data for \"{}\"",
                query
            ))));
        }
        for query in &report.not_found {
            notices.push(emit(Notice::warning(format!(
                "No match found for \"{}\"",
                query
            ))));
        }

        self.collection.replace(report.records);
        notices
    }

    /// Remove the record(s) with `id` from the collection.
    pub fn remove(&mut self, id: i64) -> Notice {
        if self.collection.remove(id) > 0 {
            emit(Notice::success("Movie removed successfully."))
        } else {
            emit(Notice::warning(format!("No movie with id {} in the list.", id)))
        }
    }

    /// Submit the whole collection to the sink.
    pub async fn save(&self) -> Notice {
        if self.collection.is_empty() {
            return emit(Notice::warning(SaveError::EmptyCollection.user_message()));
        }

        match self.sink.submit(self.collection.records()).await {
            Ok(receipt) => {
                tracing::info!("Response: {} {}", receipt.status, receipt.body);
                emit(Notice::success("Data saved successfully!"))
            }
            Err(e) => {
                tracing::error!("Error saving data: {}", e);
                emit(Notice::error(e.user_message()))
            }
        }
    }
}

fn emit(notice: Notice) -> Notice {
    match notice.level {
        NoticeLevel::Success => tracing::info!("{}", notice.message),
        NoticeLevel::Warning => tracing::warn!("{}", notice.message),
        NoticeLevel::Error => tracing::error!("{}", notice.message),
    }
    notice
}
