//! Pluggable knowledge-graph backends and the deadline-bounded remote call.
//!
//! [`KnowledgeGraphSource`] is the seam between the aggregator and the
//! network. [`crate::sparql::SparqlClient`] is the production
//! implementation; tests plug in sources that answer instantly, fail, or
//! never answer at all.

use std::future::Future;
use std::sync::Arc;

use tokio::time::Instant;

use crate::error::{Result, SearchError};
use crate::normalize::normalized_len;
use crate::types::{Language, SearchCandidate};

/// Shortest normalised query sent to a remote source.
pub const MIN_REMOTE_QUERY_CHARS: usize = 2;

/// A remote knowledge graph that can be searched by label.
///
/// Implementations must be `Send + Sync`; each call runs on its own
/// spawned task and may be abandoned at any await point.
pub trait KnowledgeGraphSource: Send + Sync {
    /// Search for resources whose label contains `text` in `language`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] or [`SearchError::Parse`] when the
    /// remote side cannot be reached or answers with garbage.
    fn query(
        &self,
        text: &str,
        language: Language,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<SearchCandidate>>> + Send;
}

/// Run `source.query` on a separate task and wait for it until `deadline`.
///
/// At the deadline the task is aborted and [`SearchError::Timeout`] is
/// returned straight away; the aborted task is never awaited, so a remote
/// side that never answers cannot hold the caller.
///
/// # Errors
///
/// - [`SearchError::InvalidQuery`] if `text` normalises to fewer than
///   [`MIN_REMOTE_QUERY_CHARS`] characters (nothing is sent)
/// - [`SearchError::Timeout`] if the deadline passes first
/// - any error reported by the source itself
pub async fn query_remote<S>(
    source: &Arc<S>,
    text: &str,
    language: Language,
    limit: usize,
    deadline: Instant,
) -> Result<Vec<SearchCandidate>>
where
    S: KnowledgeGraphSource + 'static,
{
    let chars = normalized_len(text);
    if chars < MIN_REMOTE_QUERY_CHARS {
        return Err(SearchError::InvalidQuery(format!(
            "remote queries need at least {MIN_REMOTE_QUERY_CHARS} characters, got {chars}"
        )));
    }

    let started = Instant::now();
    let source = Arc::clone(source);
    let text = text.trim().to_owned();
    let mut handle = tokio::spawn(async move { source.query(&text, language, limit).await });

    match tokio::time::timeout_at(deadline, &mut handle).await {
        Ok(Ok(result)) => {
            if let Ok(candidates) = &result {
                tracing::debug!(
                    %language,
                    count = candidates.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "remote query returned"
                );
            }
            result
        }
        Ok(Err(join_err)) => Err(SearchError::Http(format!("remote task failed: {join_err}"))),
        Err(_) => {
            handle.abort();
            let waited = started.elapsed().as_millis() as u64;
            tracing::warn!(%language, elapsed_ms = waited, "remote query abandoned at deadline");
            Err(SearchError::Timeout(format!("no answer after {waited} ms")))
        }
    }
}
