//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls the time budgets, the remote result limits,
//! the fallback thresholds and the SPARQL endpoints. The defaults keep a
//! request under ten seconds even when the remote side never answers.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::types::Language;

/// Configuration for the hybrid search aggregator.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Language used when the requested one has no label, comment or
    /// endpoint, and the target of the remote retry.
    pub default_language: Language,
    /// Total time budget for one aggregation, in milliseconds.
    pub overall_deadline_ms: u64,
    /// Hard timeout for a single remote call, in milliseconds.
    pub remote_timeout_ms: u64,
    /// Below this much remaining budget the remote call is skipped.
    pub min_remote_budget_ms: u64,
    /// `LIMIT` requested from the SPARQL endpoint.
    pub remote_limit: usize,
    /// Remote result counts below this are supplemented from the fallback table.
    pub supplement_threshold: usize,
    /// Maximum number of fallback entries added to a response.
    pub fallback_limit: usize,
    /// Restrict remote matches to resources in cybersecurity categories.
    pub category_filter: bool,
    /// Retry a failed non-default-language call once against the
    /// default-language endpoint.
    pub retry_default_language: bool,
    /// User-Agent sent to SPARQL endpoints.
    pub user_agent: String,
    /// Endpoint overrides by language. Languages without an entry use the
    /// public DBpedia chapter.
    pub endpoints: HashMap<Language, String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            overall_deadline_ms: 10_000,
            remote_timeout_ms: 8_000,
            min_remote_budget_ms: 2_000,
            remote_limit: 15,
            supplement_threshold: 3,
            fallback_limit: 5,
            category_filter: true,
            retry_default_language: true,
            user_agent: "CybersecuritySearchBot/1.0".into(),
            endpoints: HashMap::new(),
        }
    }
}

impl SearchConfig {
    pub fn overall_deadline(&self) -> Duration {
        Duration::from_millis(self.overall_deadline_ms)
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_millis(self.remote_timeout_ms)
    }

    pub fn min_remote_budget(&self) -> Duration {
        Duration::from_millis(self.min_remote_budget_ms)
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `overall_deadline_ms` and `remote_timeout_ms` must be greater than 0
    /// - `min_remote_budget_ms` must not exceed `overall_deadline_ms`
    /// - `remote_limit` must be greater than 0
    /// - `user_agent` must not be empty
    /// - endpoint overrides must be absolute http(s) URLs
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.overall_deadline_ms == 0 {
            return Err(SearchError::Config(
                "overall_deadline_ms must be greater than 0".into(),
            ));
        }
        if self.remote_timeout_ms == 0 {
            return Err(SearchError::Config(
                "remote_timeout_ms must be greater than 0".into(),
            ));
        }
        if self.min_remote_budget_ms > self.overall_deadline_ms {
            return Err(SearchError::Config(
                "min_remote_budget_ms must be <= overall_deadline_ms".into(),
            ));
        }
        if self.remote_limit == 0 {
            return Err(SearchError::Config(
                "remote_limit must be greater than 0".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(SearchError::Config("user_agent must not be empty".into()));
        }
        for (language, endpoint) in &self.endpoints {
            let parsed = url::Url::parse(endpoint).map_err(|e| {
                SearchError::Config(format!("invalid endpoint for {language}: {e}"))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(SearchError::Config(format!(
                    "endpoint for {language} must use http or https"
                )));
            }
        }
        Ok(())
    }
}
