//! The hybrid search aggregator: local match, time-bounded remote lookup,
//! fallback, merge, rank, paginate.

use std::sync::Arc;

use tokio::time::Instant;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::fallback::fallback_results;
use crate::local::search_local;
use crate::normalize::normalized_len;
use crate::source::{query_remote, KnowledgeGraphSource, MIN_REMOTE_QUERY_CHARS};
use crate::sparql::SparqlClient;
use crate::taxonomy::Taxonomy;
use crate::types::{Language, RemoteOutcome, SearchCandidate, SearchQuery, SearchResponse, Statistics};

use super::dedup::exclude_known_labels;

/// Answers [`SearchQuery`]s against a taxonomy snapshot and a remote
/// knowledge graph.
///
/// The aggregator holds no mutable state; one instance can serve any
/// number of concurrent requests.
#[derive(Debug)]
pub struct Aggregator<S = SparqlClient> {
    config: SearchConfig,
    taxonomy: Option<Arc<Taxonomy>>,
    source: Arc<S>,
}

impl<S> Clone for Aggregator<S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            taxonomy: self.taxonomy.clone(),
            source: Arc::clone(&self.source),
        }
    }
}

impl Aggregator<SparqlClient> {
    /// Create an aggregator backed by DBpedia.
    ///
    /// `taxonomy` is `None` when the knowledge base failed to load; every
    /// search then fails with [`SearchError::KnowledgeBaseUnavailable`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid configuration and
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: SearchConfig, taxonomy: Option<Arc<Taxonomy>>) -> Result<Self> {
        let source = SparqlClient::new(config.clone())?;
        Self::with_source(config, taxonomy, Arc::new(source))
    }
}

impl<S> Aggregator<S>
where
    S: KnowledgeGraphSource + 'static,
{
    /// Create an aggregator with a custom remote source.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid configuration.
    pub fn with_source(
        config: SearchConfig,
        taxonomy: Option<Arc<Taxonomy>>,
        source: Arc<S>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            taxonomy,
            source,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn taxonomy(&self) -> Option<&Arc<Taxonomy>> {
        self.taxonomy.as_ref()
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Run one search within the configured overall deadline.
    ///
    /// # Errors
    ///
    /// Only input errors ([`SearchError::EmptyQuery`],
    /// [`SearchError::InvalidPagination`]) and
    /// [`SearchError::KnowledgeBaseUnavailable`]. Remote failures are
    /// absorbed and reported in [`SearchResponse::remote`].
    pub async fn aggregate(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let deadline = Instant::now() + self.config.overall_deadline();
        self.aggregate_until(query, deadline).await
    }

    /// Run one search that must finish by `deadline`.
    ///
    /// Useful when the caller has already spent part of the overall budget.
    ///
    /// # Errors
    ///
    /// Same as [`Aggregator::aggregate`].
    pub async fn aggregate_until(
        &self,
        query: &SearchQuery,
        deadline: Instant,
    ) -> Result<SearchResponse> {
        let started = Instant::now();

        // 1. Input validation.
        let chars = normalized_len(&query.text);
        if chars == 0 {
            return Err(SearchError::EmptyQuery);
        }
        if query.page == 0 {
            return Err(SearchError::InvalidPagination("page must be at least 1".into()));
        }
        if query.page_size == 0 {
            return Err(SearchError::InvalidPagination(
                "page_size must be greater than 0".into(),
            ));
        }
        let taxonomy = self
            .taxonomy
            .as_deref()
            .ok_or(SearchError::KnowledgeBaseUnavailable)?;

        let language = query.language;
        tracing::trace!(query = %query.text, %language, "aggregating");

        // 2. Local lexical search, synchronous.
        let local = search_local(
            taxonomy,
            &query.text,
            language,
            self.config.default_language,
            query.kind_filter,
        );

        // 3. Remote lookup with fallback.
        let (remote, outcome) = if !query.federated {
            (Vec::new(), RemoteOutcome::Disabled)
        } else if chars < MIN_REMOTE_QUERY_CHARS {
            (Vec::new(), RemoteOutcome::QueryTooShort)
        } else {
            self.remote_candidates(&query.text, language, deadline).await
        };

        // 4. Merge and rank. Stable sort keeps discovery order on ties.
        let mut merged = local;
        merged.extend(remote);
        merged.sort_by(|a, b| b.score.total_cmp(&a.score));

        // 5. Statistics over the full set, then the page slice.
        let statistics = Statistics::from_candidates(&merged);
        let total = merged.len();
        let results = paginate(merged, query.page, query.page_size);

        tracing::debug!(
            %language,
            offline = statistics.offline,
            online = statistics.online,
            fallback = statistics.fallback,
            total,
            page_len = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search complete"
        );

        Ok(SearchResponse {
            query: query.text.clone(),
            language,
            kind_filter: query.kind_filter,
            federated: query.federated,
            page: query.page,
            page_size: query.page_size,
            total,
            statistics,
            remote: outcome,
            results,
        })
    }

    /// The remote leg: query the source if the budget allows, and fall
    /// back to the static table on failure or thin results.
    async fn remote_candidates(
        &self,
        text: &str,
        language: Language,
        deadline: Instant,
    ) -> (Vec<SearchCandidate>, RemoteOutcome) {
        let now = Instant::now();
        let remaining = deadline.saturating_duration_since(now);
        let fallback_limit = self.config.fallback_limit;

        if remaining < self.config.min_remote_budget() {
            tracing::warn!(
                %language,
                remaining_ms = remaining.as_millis() as u64,
                "remote budget exhausted, answering from fallback table"
            );
            let fallback = fallback_results(text, language, fallback_limit);
            return (fallback, RemoteOutcome::BudgetExhausted);
        }

        let call_deadline = now + remaining.min(self.config.remote_timeout());
        match query_remote(
            &self.source,
            text,
            language,
            self.config.remote_limit,
            call_deadline,
        )
        .await
        {
            Ok(results) if results.len() >= self.config.supplement_threshold => {
                let count = results.len();
                (results, RemoteOutcome::Succeeded { results: count })
            }
            Ok(mut results) => {
                let extra = fallback_results(text, language, usize::MAX);
                let extra: Vec<SearchCandidate> = exclude_known_labels(&results, extra)
                    .into_iter()
                    .take(fallback_limit)
                    .collect();
                let outcome = RemoteOutcome::Supplemented {
                    results: results.len(),
                    fallback: extra.len(),
                };
                tracing::debug!(
                    %language,
                    remote = results.len(),
                    fallback = extra.len(),
                    "thin remote results supplemented from fallback table"
                );
                results.extend(extra);
                (results, outcome)
            }
            Err(err) => {
                tracing::warn!(
                    %language,
                    error = %err,
                    elapsed_ms = now.elapsed().as_millis() as u64,
                    "remote search failed, answering from fallback table"
                );
                let fallback = fallback_results(text, language, fallback_limit);
                (
                    fallback,
                    RemoteOutcome::Failed {
                        reason: err.to_string(),
                    },
                )
            }
        }
    }
}

/// Slice `[(page - 1) * page_size, page * page_size)` out of `items`,
/// clamped to the available length. Out-of-range pages are empty.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Vec<T> {
    let Some(start) = page.saturating_sub(1).checked_mul(page_size) else {
        return Vec::new();
    };
    items.into_iter().skip(start).take(page_size).collect()
}
