//! Local lexical search over the taxonomy snapshot.
//!
//! A pure scan: every entity of an allowed kind is matched by substring
//! containment of the normalised query in its normalised label, name or
//! comment. No I/O and no suspension points, so it is safe to call from
//! inside an async task.

use crate::lexicon;
use crate::normalize::normalize;
use crate::orchestrator::scoring::score_local;
use crate::taxonomy::{Entity, EntityRelations, Taxonomy};
use crate::types::{CandidateKind, KindFilter, Language, Provenance, Relations, SearchCandidate};

/// Maximum parent (or domain) labels attached to a candidate.
pub const MAX_UPWARD_LABELS: usize = 3;
/// Maximum subclass (or range) labels attached to a candidate.
pub const MAX_DOWNWARD_LABELS: usize = 5;

/// Find taxonomy entities matching `query`.
///
/// Results come out grouped by kind (classes, object properties, data
/// properties, individuals) in taxonomy order. They are scored but not
/// sorted. An empty normalised query matches nothing.
pub fn search_local(
    taxonomy: &Taxonomy,
    query: &str,
    lang: Language,
    default: Language,
    kind_filter: KindFilter,
) -> Vec<SearchCandidate> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }

    let candidates: Vec<SearchCandidate> = taxonomy
        .entities()
        .filter(|entity| kind_filter.allows(entity.kind()))
        .filter_map(|entity| match_entity(taxonomy, entity, &query, lang, default))
        .collect();

    tracing::debug!(
        %lang,
        filter = ?kind_filter,
        count = candidates.len(),
        "local search complete"
    );
    candidates
}

fn match_entity(
    taxonomy: &Taxonomy,
    entity: &Entity,
    query: &str,
    lang: Language,
    default: Language,
) -> Option<SearchCandidate> {
    let label = taxonomy.label(entity, lang, default);
    let comment = taxonomy.comment(entity, lang, default);

    let norm_label = normalize(label);
    let norm_name = normalize(&entity.name);
    let norm_comment = normalize(comment);

    if !(norm_label.contains(query) || norm_name.contains(query) || norm_comment.contains(query)) {
        return None;
    }

    let kind = entity.kind();
    let description = if comment.is_empty() {
        lexicon::kind_description(lang, kind).to_owned()
    } else {
        comment.to_owned()
    };

    Some(SearchCandidate {
        name: entity.name.clone(),
        label: label.to_owned(),
        kind: CandidateKind::from(kind),
        description,
        score: score_local(query, &norm_label, &norm_name, &norm_comment, kind),
        source: Provenance::Local,
        uri: None,
        external_link: None,
        relations: related_labels(taxonomy, entity, lang, default),
    })
}

fn related_labels(
    taxonomy: &Taxonomy,
    entity: &Entity,
    lang: Language,
    default: Language,
) -> Relations {
    let labels = |names: &[String], max: usize| -> Vec<String> {
        names
            .iter()
            .take(max)
            .map(|name| taxonomy.label_of(name, lang, default))
            .collect()
    };

    match &entity.relations {
        EntityRelations::Class { parents } => Relations::Class {
            parents: labels(parents, MAX_UPWARD_LABELS),
            subclasses: taxonomy
                .subclasses_of(&entity.name)
                .take(MAX_DOWNWARD_LABELS)
                .map(|sub| taxonomy.label(sub, lang, default).to_owned())
                .collect(),
        },
        EntityRelations::ObjectProperty { domain, range }
        | EntityRelations::DataProperty { domain, range } => Relations::Property {
            domain: labels(domain, MAX_UPWARD_LABELS),
            range: labels(range, MAX_DOWNWARD_LABELS),
        },
        EntityRelations::Individual { classes } => Relations::Individual {
            classes: labels(classes, usize::MAX),
        },
    }
}
