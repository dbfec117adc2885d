//! DBpedia SPARQL client.
//!
//! [`SparqlClient`] implements [`KnowledgeGraphSource`] over HTTP GET
//! against the DBpedia chapter for the requested language. A failed
//! non-default-language call is retried once against the default-language
//! chapter when `retry_default_language` is set. The deadline itself is
//! enforced by [`crate::source::query_remote`], not here.

pub mod endpoints;
pub mod query;
pub mod results;

use serde::Serialize;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::http::{self, SPARQL_JSON};
use crate::lexicon::domain_keywords;
use crate::source::KnowledgeGraphSource;
use crate::types::{Language, SearchCandidate};

use self::endpoints::endpoint_for;
use self::query::{build_label_query, PROBE_QUERY};
use self::results::parse_results;

/// Health-check error details are cut to this many characters.
const MAX_PROBE_DETAIL_CHARS: usize = 100;

/// Result of probing one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointHealth {
    pub language: Language,
    pub endpoint: String,
    pub available: bool,
    /// Error text for unavailable endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// SPARQL client for the DBpedia chapters.
#[derive(Debug, Clone)]
pub struct SparqlClient {
    client: reqwest::Client,
    config: SearchConfig,
}

impl SparqlClient {
    /// Create a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: SearchConfig) -> Result<Self> {
        let client = http::build_client(&config)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Send one SPARQL query and return the raw response body.
    async fn fetch(&self, endpoint: &str, sparql: &str) -> Result<String> {
        let response = self
            .client
            .get(endpoint)
            .query(&[("query", sparql), ("format", SPARQL_JSON)])
            .header(reqwest::header::ACCEPT, SPARQL_JSON)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("SPARQL request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("SPARQL endpoint error: {e}")))?;

        response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("SPARQL response read failed: {e}")))
    }

    /// One label query against the endpoint for `language`, no retry.
    async fn search_language(
        &self,
        text: &str,
        language: Language,
        limit: usize,
    ) -> Result<Vec<SearchCandidate>> {
        let endpoint = endpoint_for(language, &self.config);
        let keywords = self
            .config
            .category_filter
            .then(|| domain_keywords(language));
        let sparql = build_label_query(text, language, keywords, limit);

        tracing::trace!(%language, %endpoint, query = text, "SPARQL label search");
        let body = self.fetch(&endpoint, &sparql).await?;
        tracing::trace!(bytes = body.len(), "SPARQL response received");

        parse_results(&body, text, language)
    }

    /// Check whether the endpoint for `language` answers a trivial query.
    pub async fn probe(&self, language: Language) -> EndpointHealth {
        let endpoint = endpoint_for(language, &self.config);
        let outcome = match self.fetch(&endpoint, PROBE_QUERY).await {
            Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
                .map(|_| ())
                .map_err(|e| SearchError::Parse(format!("invalid SPARQL JSON: {e}"))),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => EndpointHealth {
                language,
                endpoint,
                available: true,
                detail: None,
            },
            Err(e) => {
                tracing::warn!(%language, %endpoint, error = %e, "endpoint probe failed");
                EndpointHealth {
                    language,
                    endpoint,
                    available: false,
                    detail: Some(e.to_string().chars().take(MAX_PROBE_DETAIL_CHARS).collect()),
                }
            }
        }
    }

    /// Probe every language endpoint concurrently.
    pub async fn probe_all(&self) -> Vec<EndpointHealth> {
        let probes = Language::all().iter().map(|lang| self.probe(*lang));
        futures::future::join_all(probes).await
    }
}

impl KnowledgeGraphSource for SparqlClient {
    async fn query(
        &self,
        text: &str,
        language: Language,
        limit: usize,
    ) -> Result<Vec<SearchCandidate>> {
        let first = self.search_language(text, language, limit).await;

        let default = self.config.default_language;
        match first {
            Err(err) if self.config.retry_default_language && language != default => {
                tracing::warn!(
                    from = %language,
                    to = %default,
                    error = %err,
                    "remote query failed, retrying against default-language endpoint"
                );
                let retried = self.search_language(text, default, limit).await;
                if let Err(retry_err) = &retried {
                    tracing::warn!(%default, error = %retry_err, "default-language retry failed");
                }
                retried
            }
            other => other,
        }
    }
}
