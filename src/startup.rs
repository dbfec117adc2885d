//! Startup: load the taxonomy snapshot and build the search service.
//!
//! A taxonomy that cannot be loaded does not stop the application. The
//! failure is logged and every search answers "knowledge base unavailable"
//! until the process is restarted with a usable snapshot.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use cyberonto_search::{
    Aggregator, EndpointHealth, EntityDetails, Language, SearchQuery, SearchResponse,
    SearchError, Taxonomy, TaxonomyStats,
};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::{AppError, Result};

/// Load the taxonomy at `path`, logging instead of failing.
pub fn load_taxonomy(path: &Path) -> Option<Arc<Taxonomy>> {
    let started = Instant::now();
    match Taxonomy::from_file(path) {
        Ok(taxonomy) => {
            info!(
                path = %path.display(),
                entities = taxonomy.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "knowledge base ready"
            );
            Some(Arc::new(taxonomy))
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "knowledge base unavailable");
            None
        }
    }
}

/// The search front end used by the CLI.
#[derive(Debug, Clone)]
pub struct SearchService {
    config: AppConfig,
    aggregator: Aggregator,
}

impl SearchService {
    /// Load the configured taxonomy and build the aggregator.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] for invalid settings or
    /// [`AppError::Search`] if the HTTP client cannot be built. A missing
    /// taxonomy is not an error here.
    pub fn start(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let taxonomy = load_taxonomy(&config.taxonomy_path);
        Self::with_taxonomy(config, taxonomy)
    }

    /// Build the service around an already loaded snapshot.
    ///
    /// # Errors
    ///
    /// Same as [`SearchService::start`].
    pub fn with_taxonomy(config: AppConfig, taxonomy: Option<Arc<Taxonomy>>) -> Result<Self> {
        let aggregator = Aggregator::new(config.search.clone(), taxonomy)?;
        Ok(Self { config, aggregator })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve a user-supplied language code; unsupported codes map to
    /// the configured default.
    pub fn language(&self, code: Option<&str>) -> Language {
        let default = self.config.search.default_language;
        match code {
            Some(code) => {
                let language = Language::from_code_or(code, default);
                if Language::from_code(code).is_none() {
                    warn!(code, %default, "unsupported language, using default");
                }
                language
            }
            None => default,
        }
    }

    fn taxonomy(&self) -> Result<&Arc<Taxonomy>> {
        self.aggregator
            .taxonomy()
            .ok_or(AppError::Search(SearchError::KnowledgeBaseUnavailable))
    }

    /// Run one hybrid search.
    ///
    /// # Errors
    ///
    /// Input errors and an unavailable knowledge base; remote failures
    /// are absorbed into the response.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        Ok(self.aggregator.aggregate(query).await?)
    }

    /// Full details for one taxonomy entity.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`] for an unknown name and
    /// [`SearchError::KnowledgeBaseUnavailable`] without a taxonomy.
    pub fn details(&self, name: &str, language: Language) -> Result<EntityDetails> {
        let default = self.config.search.default_language;
        self.taxonomy()?
            .details(name, language, default)
            .ok_or_else(|| AppError::NotFound(name.to_owned()))
    }

    /// Entity counts of the loaded taxonomy.
    ///
    /// # Errors
    ///
    /// [`SearchError::KnowledgeBaseUnavailable`] without a taxonomy.
    pub fn stats(&self) -> Result<TaxonomyStats> {
        Ok(self.taxonomy()?.stats())
    }

    /// Probe every SPARQL endpoint.
    pub async fn health(&self) -> Vec<EndpointHealth> {
        self.aggregator.source().probe_all().await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    const TAXONOMY: &str = r#"{
        "classes": [
            {"name": "Malware", "labels": [{"value": "Malware", "lang": "en"}]},
            {"name": "Worm", "parents": ["Malware"],
             "labels": [{"value": "Worm", "lang": "en"}, {"value": "Gusano", "lang": "es"}]}
        ],
        "individuals": [{"name": "Stuxnet", "classes": ["Worm"]}]
    }"#;

    fn service() -> SearchService {
        let taxonomy = Taxonomy::from_json_str(TAXONOMY).expect("taxonomy");
        SearchService::with_taxonomy(AppConfig::default(), Some(Arc::new(taxonomy)))
            .expect("service")
    }

    #[test]
    fn missing_file_loads_nothing() {
        assert!(load_taxonomy(Path::new("/nonexistent/taxonomy.json")).is_none());
    }

    #[test]
    fn language_resolution_falls_back_to_default() {
        let service = service();
        assert_eq!(service.language(Some("es")), Language::Es);
        assert_eq!(service.language(Some("zh")), Language::En);
        assert_eq!(service.language(None), Language::En);
    }

    #[test]
    fn details_and_stats() {
        let service = service();
        let worm = service.details("Worm", Language::Es).expect("details");
        assert_eq!(worm.label, "Gusano");

        let err = service.details("Rootkit", Language::En).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let stats = service.stats().expect("stats");
        assert_eq!(stats.classes, 2);
        assert_eq!(stats.individuals, 1);
    }

    #[tokio::test]
    async fn offline_search() {
        let query = SearchQuery::new("worm").with_federated(false);
        let response = service().search(&query).await.expect("search");
        assert_eq!(response.results[0].name, "Worm");
    }

    #[tokio::test]
    async fn without_taxonomy_everything_is_unavailable() {
        let service = SearchService::with_taxonomy(AppConfig::default(), None).expect("service");
        let unavailable =
            |e: &AppError| matches!(e, AppError::Search(SearchError::KnowledgeBaseUnavailable));

        assert!(unavailable(&service.stats().unwrap_err()));
        assert!(unavailable(&service.details("Worm", Language::En).unwrap_err()));
        let err = service
            .search(&SearchQuery::new("worm"))
            .await
            .unwrap_err();
        assert!(unavailable(&err));
    }
}
