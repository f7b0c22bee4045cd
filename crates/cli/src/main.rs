mod output;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use catalog::{CatalogResolver, HttpSink, Notice, Settings, UploadSession};
use clap::Parser;
use tmdb::TmdbClient;

#[derive(Parser)]
#[command(name = "movie-uploader", version)]
#[command(about = "Resolve a list of movie titles against TMDB", long_about = None)]
struct Cli {
    /// Text file with one movie title per line
    file: PathBuf,

    /// Settings file (created with defaults if missing)
    #[arg(short, long, default_value = "movie-uploader.toml")]
    config: PathBuf,

    /// TMDB API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// TMDB response language, e.g. en-US
    #[arg(long)]
    language: Option<String>,

    /// Maximum number of titles resolved at once
    #[arg(short = 'j', long)]
    concurrency: Option<usize>,

    /// Remove movies with these TMDB IDs before saving
    #[arg(long = "remove", value_name = "ID")]
    remove: Vec<i64>,

    /// Submit the resulting list to the save endpoint
    #[arg(long)]
    save: bool,

    /// Save endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Save request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print records and notices as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply(&self, settings: &mut Settings) {
        if let Some(key) = &self.api_key {
            settings.tmdb.api_key = key.clone();
        }
        if let Some(language) = &self.language {
            settings.tmdb.language = language.clone();
        }
        if let Some(concurrency) = self.concurrency {
            settings.resolver.concurrency = concurrency;
        }
        if let Some(endpoint) = &self.endpoint {
            settings.persistence.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            settings.persistence.timeout_secs = timeout;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut settings = Settings::load_or_create(&cli.config)
        .await
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;
    cli.apply(&mut settings);

    if settings.tmdb.api_key.is_empty() {
        bail!(
            "no TMDB API key: set TMDB_API_KEY, pass --api-key or fill tmdb.api_key in {}",
            cli.config.display()
        );
    }

    let http = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()
        .context("building HTTP client")?;

    let tmdb = TmdbClient::with_client(http.clone(), settings.tmdb.api_key.clone())
        .with_language(settings.tmdb.language.clone())
        .with_base_url(settings.tmdb.base_url.clone());
    let resolver = CatalogResolver::new(Arc::new(tmdb), settings.resolver.concurrency);
    let sink = HttpSink::new(
        http,
        settings.persistence.endpoint.clone(),
        settings.persistence.timeout(),
    );
    let mut session = UploadSession::new(resolver, sink);

    let count = session
        .load_file(&cli.file)
        .await
        .with_context(|| format!("reading {}", cli.file.display()))?;
    tracing::info!("Searching {} titles", count);

    let mut notices: Vec<Notice> = session.search().await;
    for id in &cli.remove {
        notices.push(session.remove(*id));
    }
    if cli.save {
        notices.push(session.save().await);
    }

    if cli.json {
        let value = serde_json::json!({
            "records": session.records(),
            "notices": notices,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", output::render_records(session.records()));
        if !notices.is_empty() {
            println!();
            println!("{}", output::render_notices(&notices));
        }
    }

    Ok(())
}
