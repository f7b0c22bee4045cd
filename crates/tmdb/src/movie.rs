use crate::{
    models::{AppendToResponse, MovieDetails},
    TmdbClient,
};

impl TmdbClient {
    /// Get movie details
    ///
    /// GET /movie/{movie_id}
    pub async fn get_movie(&self, movie_id: i64) -> crate::Result<MovieDetails> {
        self.get_movie_with(movie_id, &[]).await
    }

    /// Get movie details with embedded sub-resources in a single call.
    ///
    /// GET /movie/{movie_id}?append_to_response=credits,videos
    pub async fn get_movie_with(
        &self,
        movie_id: i64,
        append: &[AppendToResponse],
    ) -> crate::Result<MovieDetails> {
        let url = self.url(&format!("/movie/{}", movie_id));
        let mut params = self.common_params();
        if !append.is_empty() {
            params.push(("append_to_response", AppendToResponse::join(append)));
        }

        tracing::debug!("TMDB movie details: {}", movie_id);
        let response = self.client().get(&url).query(&params).send().await?;
        self.handle_response(response).await
    }
}
