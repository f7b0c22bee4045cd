use catalog::{MovieRecord, Notice};

fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "N/A",
    }
}

/// Human readable card for one record.
pub fn render_record(record: &MovieRecord) -> String {
    let genres = record.genres.join(", ");
    let actors = record.actors.join(", ");
    let runtime = record.runtime.map(|m| format!("{} min", m));

    let mut lines = vec![
        format!("{} [{}]", record.title, record.id),
        format!("  Rating:   {} / 10", record.rating),
        format!("  Director: {}", or_na(record.director.as_deref())),
        format!("  Release:  {}", or_na(Some(record.release_date.as_str()))),
        format!("  Genres:   {}", or_na(Some(genres.as_str()))),
        format!("  Cast:     {}", or_na(Some(actors.as_str()))),
        format!("  Runtime:  {}", or_na(runtime.as_deref())),
    ];
    if let Some(poster) = &record.poster_url {
        lines.push(format!("  Poster:   {}", poster));
    }
    if let Some(key) = &record.trailer {
        lines.push(format!("  Trailer:  https://www.youtube.com/watch?v={}", key));
    }
    lines.join("\n")
}

pub fn render_records(records: &[MovieRecord]) -> String {
    if records.is_empty() {
        return "No movies resolved.".to_string();
    }
    records
        .iter()
        .map(render_record)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(Notice::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MovieRecord {
        MovieRecord {
            id: 603,
            title: "The Matrix".to_string(),
            overview: String::new(),
            actors: vec!["Keanu Reeves".to_string(), "Carrie-Anne Moss".to_string()],
            genres: vec!["Action".to_string(), "Science Fiction".to_string()],
            poster_url: None,
            release_date: "1999-03-30".to_string(),
            rating: 8.2,
            trailer: Some("vKQi3bBA1y8".to_string()),
            director: None,
            runtime: Some(136),
        }
    }

    #[test]
    fn test_render_record() {
        let text = render_record(&record());
        assert!(text.starts_with("The Matrix [603]"));
        assert!(text.contains("Rating:   8.2 / 10"));
        assert!(text.contains("Director: N/A"));
        assert!(text.contains("Genres:   Action, Science Fiction"));
        assert!(text.contains("Runtime:  136 min"));
        assert!(text.contains("watch?v=vKQi3bBA1y8"));
        assert!(!text.contains("Poster:"));
    }

    #[test]
    fn test_render_missing_fields() {
        let mut bare = record();
        bare.genres.clear();
        bare.release_date.clear();
        bare.runtime = None;
        let text = render_record(&bare);
        assert!(text.contains("Release:  N/A"));
        assert!(text.contains("Genres:   N/A"));
        assert!(text.contains("Runtime:  N/A"));
    }

    #[test]
    fn test_render_notices_and_empty_records() {
        assert_eq!(render_records(&[]), "No movies resolved.");
        let notices = vec![
            Notice::warning("No match found for \"Zzz\""),
            Notice::success("Data saved successfully!"),
        ];
        assert_eq!(
            render_notices(&notices),
            "[warning] No match found for \"Zzz\"\n[success] Data saved successfully!"
        );
    }
}
