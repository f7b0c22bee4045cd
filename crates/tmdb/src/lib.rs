mod client;
mod error;
pub mod models;
mod movie;
mod search;

pub use client::{TmdbClient, BASE_URL};
pub use error::TmdbError;
pub use models::{
    AppendToResponse, CastMember, Credits, CrewMember, Genre, MovieDetails, MovieSummary,
    PaginatedResponse, Video, Videos,
};

pub type Result<T> = std::result::Result<T, TmdbError>;
