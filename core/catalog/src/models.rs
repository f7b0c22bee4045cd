//! Record and notice types

use serde::{Deserialize, Serialize};
use tmdb::MovieDetails;

/// A trimmed, non-empty line from an uploaded title list.
pub type Query = String;

/// TMDB image base URL
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Number of cast names kept on a record.
pub const MAX_ACTORS: usize = 5;

/// Build TMDB image URL
pub fn tmdb_image_url(path: Option<&str>) -> Option<String> {
    path.filter(|p| !p.is_empty())
        .map(|p| format!("{}{}", TMDB_IMAGE_BASE_URL, p))
}

/// Fully resolved movie, flattened from a TMDB details response.
///
/// Field names on the wire match the payload accepted by the save endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// TMDB movie ID
    pub id: i64,
    pub title: String,
    pub overview: String,
    /// First cast names in billing order
    pub actors: Vec<String>,
    pub genres: Vec<String>,
    /// Absolute poster URL
    #[serde(rename = "poster", skip_serializing_if = "Option::is_none", default)]
    pub poster_url: Option<String>,
    /// Release date (YYYY-MM-DD), empty when unknown
    #[serde(rename = "release")]
    pub release_date: String,
    /// Vote average (0-10)
    pub rating: f64,
    /// Video key of the first trailer
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub trailer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub director: Option<String>,
    /// Runtime in minutes
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none", default)]
    pub runtime: Option<i64>,
}

impl From<MovieDetails> for MovieRecord {
    fn from(details: MovieDetails) -> Self {
        let credits = details.credits.unwrap_or_default();
        let actors = credits
            .cast
            .into_iter()
            .take(MAX_ACTORS)
            .map(|actor| actor.name)
            .collect();
        let director = credits
            .crew
            .into_iter()
            .find(|person| person.job == "Director")
            .map(|person| person.name);
        let trailer = details
            .videos
            .unwrap_or_default()
            .results
            .into_iter()
            .find(|video| video.video_type == "Trailer")
            .map(|video| video.key);

        Self {
            id: details.id,
            title: details.title,
            overview: details.overview,
            actors,
            genres: details.genres.into_iter().map(|g| g.name).collect(),
            poster_url: tmdb_image_url(details.poster_path.as_deref()),
            release_date: details.release_date.unwrap_or_default(),
            rating: details.vote_average,
            trailer,
            director,
            runtime: details.runtime,
        }
    }
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeLevel::Success => write!(f, "success"),
            NoticeLevel::Warning => write!(f, "warning"),
            NoticeLevel::Error => write!(f, "error"),
        }
    }
}

/// User-facing message produced by a session operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}
