//! # cyberonto-search
//!
//! Hybrid search over a cybersecurity taxonomy, augmented with a
//! time-bounded DBpedia lookup.
//!
//! ## Design
//!
//! - Local lexical search over an immutable [`Taxonomy`] snapshot, shared
//!   read-only behind an `Arc`
//! - Remote label search against the DBpedia chapter for the query
//!   language, run on its own task and abandoned at the deadline
//! - A static per-language fallback table answers when the remote side is
//!   slow, failing or thin
//! - One additive relevance score ranks everything; ties keep discovery
//!   order (local, remote, fallback)
//! - Remote failures never fail a search; only input errors and a missing
//!   knowledge base do
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> cyberonto_search::Result<()> {
//! use std::sync::Arc;
//! use cyberonto_search::{Aggregator, SearchConfig, SearchQuery, Taxonomy};
//!
//! let taxonomy = Taxonomy::from_file("taxonomy.json".as_ref())?;
//! let aggregator = Aggregator::new(SearchConfig::default(), Some(Arc::new(taxonomy)))?;
//! let response = aggregator.aggregate(&SearchQuery::new("ransomware")).await?;
//! for result in &response.results {
//!     println!("[{}] {} ({:.1})", result.source, result.label, result.score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fallback;
pub mod http;
pub mod lexicon;
pub mod local;
pub mod normalize;
pub mod orchestrator;
pub mod source;
pub mod sparql;
pub mod taxonomy;
pub mod types;

use std::sync::Arc;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use orchestrator::Aggregator;
pub use source::KnowledgeGraphSource;
pub use sparql::{EndpointHealth, SparqlClient};
pub use taxonomy::details::{EntityDetails, TaxonomyStats};
pub use taxonomy::Taxonomy;
pub use types::{
    KindFilter, Language, Provenance, RemoteOutcome, SearchCandidate, SearchQuery, SearchResponse,
    Statistics,
};

/// Run one hybrid search with a throwaway DBpedia-backed aggregator.
///
/// Convenience wrapper for one-off calls; long-lived callers should build
/// an [`Aggregator`] once and reuse it.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid `config`, otherwise the
/// same errors as [`Aggregator::aggregate`].
pub async fn search(
    query: &SearchQuery,
    config: &SearchConfig,
    taxonomy: Arc<Taxonomy>,
) -> Result<SearchResponse> {
    Aggregator::new(config.clone(), Some(taxonomy))?
        .aggregate(query)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config() {
        let config = SearchConfig {
            overall_deadline_ms: 0,
            ..Default::default()
        };
        let err = search(&SearchQuery::new("virus"), &config, Arc::new(Taxonomy::default()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("overall_deadline_ms"));
    }

    #[tokio::test]
    async fn search_offline_needs_no_network() {
        let taxonomy = Taxonomy::from_json_str(
            r#"{"classes": [{"name": "Virus", "labels": [{"value": "Virus", "lang": "en"}]}]}"#,
        )
        .expect("taxonomy");
        let query = SearchQuery::new("virus").with_federated(false);
        let response = search(&query, &SearchConfig::default(), Arc::new(taxonomy))
            .await
            .expect("search");
        assert_eq!(response.total, 1);
        assert_eq!(response.remote, RemoteOutcome::Disabled);
    }
}
