//! SPARQL JSON result parsing.

use serde::Deserialize;

use super::endpoints::page_link;
use crate::error::{Result, SearchError};
use crate::lexicon::{missing_abstract_description, normalized_keywords};
use crate::normalize::normalize;
use crate::orchestrator::dedup::dedup_by_uri;
use crate::orchestrator::scoring::score_remote;
use crate::types::{CandidateKind, Language, Provenance, Relations, SearchCandidate};

/// Descriptions longer than this many characters are cut.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
struct SparqlResults {
    results: ResultSet,
}

#[derive(Debug, Deserialize)]
struct ResultSet {
    #[serde(default)]
    bindings: Vec<serde_json::Value>,
}

/// Extract `name.value` from one binding row, ignoring blank values.
fn value<'a>(row: &'a serde_json::Value, name: &str) -> Option<&'a str> {
    row.get(name)?
        .get("value")?
        .as_str()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Cut `text` to [`MAX_DESCRIPTION_CHARS`], ending in `...` when shortened.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() <= MAX_DESCRIPTION_CHARS {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(MAX_DESCRIPTION_CHARS - 3).collect();
    cut.push_str("...");
    cut
}

/// Parse a `application/sparql-results+json` body into remote candidates.
///
/// Rows without a `resource` or `label` binding are skipped. Duplicate
/// resources keep their first row. `query` is the user's text, used for
/// scoring and for the placeholder description of rows without an
/// abstract.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if the body is not a SPARQL JSON result
/// document.
pub fn parse_results(body: &str, query: &str, language: Language) -> Result<Vec<SearchCandidate>> {
    let document: SparqlResults = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("invalid SPARQL JSON: {e}")))?;

    let norm_query = normalize(query);
    let keywords = normalized_keywords(language);
    let total = document.results.bindings.len();

    let candidates: Vec<SearchCandidate> = document
        .results
        .bindings
        .iter()
        .filter_map(|row| {
            let uri = value(row, "resource")?;
            let label = value(row, "label")?;
            let name = uri.rsplit('/').next().filter(|n| !n.is_empty())?;

            let description = match value(row, "abstract") {
                Some(text) => truncate_description(text),
                None => missing_abstract_description(language, query.trim()),
            };
            let score = score_remote(
                &norm_query,
                &normalize(label),
                &normalize(&description),
                &keywords,
            );

            Some(SearchCandidate {
                name: name.to_owned(),
                label: label.to_owned(),
                kind: CandidateKind::External,
                description,
                score,
                source: Provenance::Remote,
                uri: Some(uri.to_owned()),
                external_link: Some(page_link(language, name)),
                relations: Relations::None,
            })
        })
        .collect();

    if candidates.len() < total {
        tracing::debug!(
            skipped = total - candidates.len(),
            "SPARQL rows without resource or label skipped"
        );
    }

    Ok(dedup_by_uri(candidates))
}
