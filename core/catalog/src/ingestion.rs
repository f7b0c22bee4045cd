use std::borrow::Cow;
use std::path::Path;

use crate::models::Query;

/// Split uploaded text into search queries.
///
/// Lines are trimmed and blank lines dropped; order is preserved. Any text is
/// accepted, titles that match nothing are simply not found later.
pub fn parse_queries(text: &str) -> Vec<Query> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a title list from disk and parse it.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of
/// rejecting the file, so every readable title is still searched.
pub async fn load_queries(path: impl AsRef<Path>) -> std::io::Result<Vec<Query>> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    let content = String::from_utf8_lossy(&bytes);
    if matches!(content, Cow::Owned(_)) {
        tracing::warn!(
            "{} is not valid UTF-8, invalid bytes were replaced",
            path.as_ref().display()
        );
    }
    let queries = parse_queries(&content);
    tracing::info!(
        "Loaded {} titles from {}",
        queries.len(),
        path.as_ref().display()
    );
    Ok(queries)
}
