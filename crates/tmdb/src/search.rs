use crate::{
    models::{MovieSummary, PaginatedResponse},
    TmdbClient,
};

impl TmdbClient {
    /// Search movies by title.
    ///
    /// GET /search/movie
    ///
    /// Results are returned in the ranking order chosen by TMDB.
    pub async fn search_movie(&self, query: &str) -> crate::Result<PaginatedResponse<MovieSummary>> {
        let url = self.url("/search/movie");
        let mut params = self.common_params();
        params.push(("query", query.to_string()));

        tracing::debug!("TMDB search: '{}'", query);
        let response = self.client().get(&url).query(&params).send().await?;
        self.handle_response(response).await
    }
}
