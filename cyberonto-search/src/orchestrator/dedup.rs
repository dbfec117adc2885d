//! Candidate deduplication.
//!
//! Remote rows are deduplicated by resource URI, keeping the first
//! occurrence. Fallback supplements are filtered against the labels that
//! are already present so the same resource is not listed twice.

use std::collections::HashSet;

use crate::normalize::normalize;
use crate::types::SearchCandidate;

/// Drop candidates whose URI was already seen, keeping the first occurrence.
///
/// Candidates without a URI are always kept.
pub fn dedup_by_uri(candidates: Vec<SearchCandidate>) -> Vec<SearchCandidate> {
    let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|c| match &c.uri {
            Some(uri) => seen.insert(uri.clone()),
            None => true,
        })
        .collect()
}

/// Keep only `extra` candidates whose normalised label is not already
/// among `existing`, nor repeated earlier in `extra`.
pub fn exclude_known_labels(
    existing: &[SearchCandidate],
    extra: Vec<SearchCandidate>,
) -> Vec<SearchCandidate> {
    let mut known: HashSet<String> = existing.iter().map(|c| normalize(&c.label)).collect();
    extra
        .into_iter()
        .filter(|c| known.insert(normalize(&c.label)))
        .collect()
}
