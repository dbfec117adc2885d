//! CLI binary for cyberonto.
//!
//! Results are written to stdout as JSON. All tracing output goes to stderr
//! so that stdout can be piped straight into other tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cyberonto::{AppConfig, SearchService};
use cyberonto_search::{KindFilter, SearchQuery};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Search a cybersecurity taxonomy, with DBpedia results merged in.
#[derive(Parser)]
#[command(name = "cyberonto", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the taxonomy snapshot path.
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Hybrid search over the taxonomy and DBpedia.
    Search {
        /// Search text.
        query: String,

        /// Language code (en, es, fr, de, it, pt).
        #[arg(short, long)]
        lang: Option<String>,

        /// Entity kind: all, class, property or individual.
        #[arg(short, long, default_value = "all")]
        kind: KindFilter,

        /// Search the local taxonomy only.
        #[arg(long)]
        offline: bool,

        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Results per page.
        #[arg(long, default_value_t = SearchQuery::DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },

    /// Show one taxonomy entity with its relations.
    Details {
        /// Entity name, e.g. `Ransomware`.
        name: String,

        /// Language code (en, es, fr, de, it, pt).
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Count taxonomy entities by kind.
    Stats,

    /// Check every SPARQL endpoint.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(AppConfig::default_config_path);
    let mut config = AppConfig::load_or_default(&config_path)?;
    if let Some(path) = cli.taxonomy {
        config.taxonomy_path = path;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let service = SearchService::start(config)?;

    match cli.command {
        Command::Search {
            query,
            lang,
            kind,
            offline,
            page,
            page_size,
        } => {
            let query = SearchQuery::new(query)
                .with_language(service.language(lang.as_deref()))
                .with_kind_filter(kind)
                .with_federated(!offline)
                .with_page(page, page_size);
            print_json(&service.search(&query).await?)
        }
        Command::Details { name, lang } => {
            let language = service.language(lang.as_deref());
            print_json(&service.details(&name, language)?)
        }
        Command::Stats => print_json(&service.stats()?),
        Command::Health => {
            let health = service.health().await;
            let down = health.iter().filter(|h| !h.available).count();
            if down > 0 {
                tracing::warn!(down, total = health.len(), "some endpoints unavailable");
            }
            print_json(&health)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
