//! Shared HTTP client for SPARQL endpoint requests.
//!
//! Provides a configured [`reqwest::Client`] with the bot User-Agent
//! DBpedia asks automated clients to send, and a request timeout equal to
//! the per-call remote timeout.

use crate::config::SearchConfig;
use crate::error::SearchError;

/// Media type requested from SPARQL endpoints.
pub const SPARQL_JSON: &str = "application/sparql-results+json";

/// Build a [`reqwest::Client`] configured for SPARQL queries.
///
/// The client has:
/// - Timeout from `remote_timeout_ms` (a backstop; the aggregator's own
///   deadline normally fires first)
/// - The configured User-Agent
/// - gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(config.remote_timeout())
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_client_with_default_config() {
        let config = SearchConfig::default();
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn build_client_with_custom_ua() {
        let config = SearchConfig {
            user_agent: "CustomBot/1.0".into(),
            ..Default::default()
        };
        assert!(build_client(&config).is_ok());
    }
}
