//! Additive relevance scoring for local and remote candidates.
//!
//! Local candidates are scored on label, name and comment matches with a
//! small bonus by entity kind. Remote and fallback candidates carry no
//! structure, so they get a looser formula that is clamped to
//! [`REMOTE_SCORE_MIN`]..=[`REMOTE_SCORE_MAX`].
//!
//! Every text argument must already be normalised with
//! [`crate::normalize::normalize`].

use crate::types::EntityKind;

/// Lowest score a remote candidate can receive.
pub const REMOTE_SCORE_MIN: f64 = 10.0;
/// Highest score a remote candidate can receive.
pub const REMOTE_SCORE_MAX: f64 = 100.0;

/// Penalty per character of label, so shorter labels win ties.
const LENGTH_PENALTY: f64 = 0.1;

/// Score one local entity match.
///
/// ```text
/// label:   exact +120 | prefix +70 | contains +40
/// name:    exact +90  | prefix +60 | contains +30
/// comment: contains +20
/// kind:    class +5, individual +3, property 0
/// minus 0.1 per label character
/// ```
pub fn score_local(query: &str, label: &str, name: &str, comment: &str, kind: EntityKind) -> f64 {
    let mut score = tiered(query, label, 120.0, 70.0, 40.0) + tiered(query, name, 90.0, 60.0, 30.0);

    if !query.is_empty() && !comment.is_empty() && comment.contains(query) {
        score += 20.0;
    }

    score -= length_penalty(label);

    score
        + match kind {
            EntityKind::Class => 5.0,
            EntityKind::Individual => 3.0,
            EntityKind::ObjectProperty | EntityKind::DataProperty => 0.0,
        }
}

/// Score a remote or fallback candidate.
///
/// `keywords` are the normalised per-language domain terms (see
/// [`crate::lexicon::normalized_keywords`]); each one found in the label or
/// the description adds 10.
pub fn score_remote(query: &str, label: &str, description: &str, keywords: &[String]) -> f64 {
    let mut score = 0.0;

    if !query.is_empty() {
        if label == query {
            score += 100.0;
        } else if label.contains(query) {
            score += 60.0;
        }
        if description.contains(query) {
            score += 30.0;
        }
    }

    let matched = keywords
        .iter()
        .filter(|k| !k.is_empty() && (label.contains(k.as_str()) || description.contains(k.as_str())))
        .count();
    score += 10.0 * matched as f64;

    score -= length_penalty(label);

    score.clamp(REMOTE_SCORE_MIN, REMOTE_SCORE_MAX)
}

/// Highest applicable tier: exact, then prefix, then containment.
fn tiered(query: &str, field: &str, exact: f64, prefix: f64, contains: f64) -> f64 {
    if query.is_empty() || field.is_empty() {
        0.0
    } else if field == query {
        exact
    } else if field.starts_with(query) {
        prefix
    } else if field.contains(query) {
        contains
    } else {
        0.0
    }
}

fn length_penalty(label: &str) -> f64 {
    LENGTH_PENALTY * label.chars().count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn exact_label_beats_substring() {
        let exact = score_local("virus", "virus", "virus", "", EntityKind::Class);
        let prefix = score_local("virus", "virus informatico", "virus", "", EntityKind::Class);
        let contains = score_local("virus", "computer virus", "computervirus", "", EntityKind::Class);
        assert!(exact > prefix);
        assert!(exact > contains);
        assert!(prefix > contains);
    }

    #[test]
    fn exact_label_beats_substring_even_with_comment_and_kind_bonus() {
        // Worst case for the exact match: property, no comment, no name match.
        let exact = score_local("worm", "worm", "w1", "", EntityKind::ObjectProperty);
        // Best case for a substring match: class, comment and name hits.
        let substring = score_local("worm", "xworm", "xworm", "a worm", EntityKind::Class);
        assert!(exact > substring, "{exact} <= {substring}");
    }

    #[test]
    fn local_formula_components() {
        // label exact 120 + name exact 90 + comment 20 - 0.5 + class 5
        let score = score_local("virus", "virus", "virus", "a virus", EntityKind::Class);
        assert!(approx(score, 234.5));

        // label prefix 70 + name contains 30 - 1.4 + individual 3
        let score = score_local(
            "ransom",
            "ransomware 2.0",
            "theransomware",
            "",
            EntityKind::Individual,
        );
        assert!(approx(score, 101.6));
    }

    #[test]
    fn comment_ignored_for_empty_query() {
        let score = score_local("", "label", "name", "comment", EntityKind::DataProperty);
        assert!(approx(score, -0.5));
    }

    #[test]
    fn longer_labels_rank_lower() {
        let short = score_local("mal", "malware", "malware", "", EntityKind::Class);
        let long = score_local("mal", "malware analysis", "malware", "", EntityKind::Class);
        assert!(short > long);
    }

    #[test]
    fn remote_score_is_clamped() {
        let high = score_remote(
            "security",
            "security",
            "computer security protects information and data on a network",
            &keywords(&["security", "computer", "information", "data", "network"]),
        );
        assert!(approx(high, REMOTE_SCORE_MAX));

        let low = score_remote("x", &"a".repeat(400), "", &[]);
        assert!(approx(low, REMOTE_SCORE_MIN));
    }

    #[test]
    fn remote_formula_components() {
        // contains 60 + description 30 + one keyword 10 - 1.2
        let score = score_remote("worm", "stuxnet worm", "a worm", &keywords(&["worm", "trojan"]));
        assert!(approx(score, 98.8));

        // exact 100 - 0.4, clamp keeps it under 100
        let score = score_remote("worm", "worm", "", &[]);
        assert!(approx(score, 99.6));
    }

    #[test]
    fn lexicon_keywords_match_folded_text() {
        let es = crate::lexicon::normalized_keywords(crate::types::Language::Es);
        let with = score_remote("cripto", "criptografia", "", &es);
        let without = score_remote("cripto", "criptografia", "", &[]);
        assert!(with - without >= 10.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let a = score_local("mal", "malware", "Malware", "malicious", EntityKind::Class);
        let b = score_local("mal", "malware", "Malware", "malicious", EntityKind::Class);
        assert!(approx(a, b));
    }
}
