//! In-memory implementations of [`MovieLookup`] and [`RecordSink`] for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tmdb::{MovieDetails, MovieSummary, TmdbError};

use crate::error::SaveError;
use crate::lookup::MovieLookup;
use crate::models::MovieRecord;
use crate::persistence::{RecordSink, SaveReceipt};

// ============================================================================
// Mock Lookup
// ============================================================================

#[derive(Default)]
struct LookupState {
    candidates: HashMap<String, Vec<i64>>,
    details: HashMap<i64, MovieDetails>,
    failing_searches: HashSet<String>,
    panicking_searches: HashSet<String>,
    delays: HashMap<String, Duration>,
    search_calls: Vec<String>,
    details_calls: Vec<i64>,
}

/// Mock implementation of MovieLookup backed by hash maps.
#[derive(Clone, Default)]
pub struct MockLookup {
    state: Arc<Mutex<LookupState>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a query that resolves to a single movie with full details.
    pub fn add_movie(&self, query: &str, id: i64, title: &str) {
        self.add_candidates(query, &[id]);
        self.add_details(id, title);
    }

    /// Register search candidates for a query without details.
    pub fn add_candidates(&self, query: &str, ids: &[i64]) {
        self.state
            .lock()
            .unwrap()
            .candidates
            .insert(query.to_string(), ids.to_vec());
    }

    /// Register details for a movie ID.
    pub fn add_details(&self, id: i64, title: &str) {
        let details: MovieDetails = serde_json::from_value(json!({
            "id": id,
            "title": title,
            "overview": format!("About {title}"),
            "poster_path": format!("/{id}.jpg"),
            "release_date": "2001-01-01",
            "vote_average": 7.5,
            "runtime": 120,
            "genres": [{"id": 18, "name": "Drama"}],
            "credits": {
                "cast": [{"id": 1, "name": format!("Lead of {title}")}],
                "crew": [{"id": 2, "name": format!("Director of {title}"), "job": "Director"}]
            },
            "videos": {"results": [{"key": format!("trailer-{id}"), "type": "Trailer"}]}
        }))
        .unwrap();
        self.state.lock().unwrap().details.insert(id, details);
    }

    /// Make the search for a query fail with an API error.
    pub fn fail_search(&self, query: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_searches
            .insert(query.to_string());
    }

    /// Make the search for a query panic, aborting its resolution task.
    pub fn panic_on_search(&self, query: &str) {
        self.state
            .lock()
            .unwrap()
            .panicking_searches
            .insert(query.to_string());
    }

    /// Delay the search for a query.
    pub fn set_delay(&self, query: &str, delay: Duration) {
        self.state
            .lock()
            .unwrap()
            .delays
            .insert(query.to_string(), delay);
    }

    /// Get all queries that were searched (for verification).
    pub fn search_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().search_calls.clone()
    }

    /// Get all movie IDs whose details were requested (for verification).
    pub fn details_calls(&self) -> Vec<i64> {
        self.state.lock().unwrap().details_calls.clone()
    }

    /// Highest number of simultaneous lookup calls observed.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn enter(&self) {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
    }

    fn leave(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl MovieLookup for MockLookup {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, TmdbError> {
        self.enter();
        let (delay, failing, panicking, ids) = {
            let mut state = self.state.lock().unwrap();
            state.search_calls.push(query.to_string());
            (
                state.delays.get(query).copied(),
                state.failing_searches.contains(query),
                state.panicking_searches.contains(query),
                state.candidates.get(query).cloned().unwrap_or_default(),
            )
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.leave();

        // Lock is released here so the panic does not poison it
        if panicking {
            panic!("lookup crashed on \"{query}\"");
        }

        if failing {
            return Err(TmdbError::Api {
                status_code: 500,
                message: "search unavailable".to_string(),
            });
        }

        Ok(ids
            .into_iter()
            .map(|id| MovieSummary {
                id,
                title: String::new(),
                original_title: String::new(),
                overview: String::new(),
                poster_path: None,
                release_date: None,
                vote_average: 0.0,
                popularity: 0.0,
            })
            .collect())
    }

    async fn details(&self, movie_id: i64) -> Result<MovieDetails, TmdbError> {
        self.enter();
        let details = {
            let mut state = self.state.lock().unwrap();
            state.details_calls.push(movie_id);
            state.details.get(&movie_id).cloned()
        };
        self.leave();

        details.ok_or_else(|| TmdbError::Api {
            status_code: 404,
            message: format!("movie {movie_id} not found"),
        })
    }
}

// ============================================================================
// Mock Sink
// ============================================================================

/// How the mock sink answers a submission.
#[derive(Clone, Debug)]
pub enum SinkBehavior {
    Accept,
    Reject(Option<String>),
    NoResponse,
}

/// Mock implementation of RecordSink that records every submission.
#[derive(Clone)]
pub struct MockSink {
    behavior: Arc<Mutex<SinkBehavior>>,
    submissions: Arc<Mutex<Vec<Vec<MovieRecord>>>>,
}

impl MockSink {
    pub fn new(behavior: SinkBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            submissions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get all submitted payloads (for verification).
    pub fn submissions(&self) -> Vec<Vec<MovieRecord>> {
        self.submissions.lock().unwrap().clone()
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new(SinkBehavior::Accept)
    }
}

#[async_trait]
impl RecordSink for MockSink {
    async fn submit(&self, records: &[MovieRecord]) -> Result<SaveReceipt, SaveError> {
        self.submissions.lock().unwrap().push(records.to_vec());
        match self.behavior.lock().unwrap().clone() {
            SinkBehavior::Accept => Ok(SaveReceipt {
                status: 201,
                body: r#"{"ok":true}"#.to_string(),
            }),
            SinkBehavior::Reject(message) => Err(SaveError::Rejected {
                status: 400,
                message,
            }),
            SinkBehavior::NoResponse => Err(SaveError::NoResponse("timed out".to_string())),
        }
    }
}
