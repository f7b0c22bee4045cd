//! Remote movie lookup abstraction

use async_trait::async_trait;
use tmdb::{AppendToResponse, MovieDetails, MovieSummary, TmdbClient, TmdbError};

/// The two remote calls the resolver needs.
///
/// Implemented for [`TmdbClient`]; tests substitute an in-memory lookup.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    /// Search candidates for a free-text title, in the service's ranking order.
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, TmdbError>;

    /// Fetch details for a movie with cast, crew and videos embedded.
    async fn details(&self, movie_id: i64) -> Result<MovieDetails, TmdbError>;
}

#[async_trait]
impl MovieLookup for TmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, TmdbError> {
        Ok(self.search_movie(query).await?.results)
    }

    async fn details(&self, movie_id: i64) -> Result<MovieDetails, TmdbError> {
        self.get_movie_with(
            movie_id,
            &[AppendToResponse::Credits, AppendToResponse::Videos],
        )
        .await
    }
}
