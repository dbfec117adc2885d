//! Immutable in-memory taxonomy snapshot.
//!
//! A [`Taxonomy`] is built once (usually from a JSON document, see
//! [`load`]) and then shared read-only, typically behind an `Arc`, by
//! every request. Entities are stored grouped by kind in the order
//! classes, object properties, data properties, individuals; within a kind
//! the document order is preserved. Search relies on that order for
//! deterministic output.

pub mod details;
pub mod load;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::types::{EntityKind, Language};

/// A label or comment with an optional RDF language tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangString {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl LangString {
    pub fn new(value: impl Into<String>, lang: Option<&str>) -> Self {
        Self {
            value: value.into(),
            lang: lang.map(str::to_owned),
        }
    }

    fn language(&self) -> Option<Language> {
        self.lang.as_deref().and_then(Language::from_code)
    }
}

/// Structural relations, by entity kind. Targets are entity names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRelations {
    Class { parents: Vec<String> },
    ObjectProperty { domain: Vec<String>, range: Vec<String> },
    DataProperty { domain: Vec<String>, range: Vec<String> },
    Individual { classes: Vec<String> },
}

/// One class, property or individual of the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Stable identifier (the IRI fragment).
    pub name: String,
    pub labels: Vec<LangString>,
    pub comments: Vec<LangString>,
    pub relations: EntityRelations,
}

impl Entity {
    fn new(name: impl Into<String>, relations: EntityRelations) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
            comments: Vec::new(),
            relations,
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, EntityRelations::Class { parents: Vec::new() })
    }

    pub fn object_property(name: impl Into<String>) -> Self {
        Self::new(
            name,
            EntityRelations::ObjectProperty {
                domain: Vec::new(),
                range: Vec::new(),
            },
        )
    }

    pub fn data_property(name: impl Into<String>) -> Self {
        Self::new(
            name,
            EntityRelations::DataProperty {
                domain: Vec::new(),
                range: Vec::new(),
            },
        )
    }

    pub fn individual(name: impl Into<String>) -> Self {
        Self::new(name, EntityRelations::Individual { classes: Vec::new() })
    }

    pub fn with_label(mut self, value: impl Into<String>, lang: &str) -> Self {
        self.labels.push(LangString::new(value, Some(lang)));
        self
    }

    pub fn with_comment(mut self, value: impl Into<String>, lang: &str) -> Self {
        self.comments.push(LangString::new(value, Some(lang)));
        self
    }

    /// Set parents (class), domain (property) or classes (individual).
    pub fn with_upward<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        match &mut self.relations {
            EntityRelations::Class { parents } => *parents = names,
            EntityRelations::ObjectProperty { domain, .. }
            | EntityRelations::DataProperty { domain, .. } => *domain = names,
            EntityRelations::Individual { classes } => *classes = names,
        }
        self
    }

    /// Set the range of a property. No effect on other kinds.
    pub fn with_range<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let EntityRelations::ObjectProperty { range, .. }
        | EntityRelations::DataProperty { range, .. } = &mut self.relations
        {
            *range = names.into_iter().map(Into::into).collect();
        }
        self
    }

    pub fn kind(&self) -> EntityKind {
        match self.relations {
            EntityRelations::Class { .. } => EntityKind::Class,
            EntityRelations::ObjectProperty { .. } => EntityKind::ObjectProperty,
            EntityRelations::DataProperty { .. } => EntityKind::DataProperty,
            EntityRelations::Individual { .. } => EntityKind::Individual,
        }
    }
}

fn kind_rank(kind: EntityKind) -> u8 {
    match kind {
        EntityKind::Class => 0,
        EntityKind::ObjectProperty => 1,
        EntityKind::DataProperty => 2,
        EntityKind::Individual => 3,
    }
}

/// Pick the text for `lang`: exact tag, then `default`, then the first value.
fn pick_text(values: &[LangString], lang: Language, default: Language) -> Option<&str> {
    values
        .iter()
        .find(|v| v.language() == Some(lang))
        .or_else(|| values.iter().find(|v| v.language() == Some(default)))
        .or_else(|| values.first())
        .map(|v| v.value.as_str())
}

/// Read-only taxonomy snapshot.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    entities: Vec<Entity>,
    by_name: HashMap<String, usize>,
    /// Parent class name → indexes of its direct subclasses.
    subclasses: HashMap<String, Vec<usize>>,
    /// Class name → indexes of individuals asserted to belong to it.
    instances: HashMap<String, Vec<usize>>,
}

impl Taxonomy {
    /// Build a snapshot from entities in any order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Taxonomy`] if an entity has an empty name.
    pub fn new(mut entities: Vec<Entity>) -> Result<Self> {
        if let Some(pos) = entities.iter().position(|e| e.name.trim().is_empty()) {
            return Err(SearchError::Taxonomy(format!(
                "entity #{pos} has an empty name"
            )));
        }

        // Stable: document order is kept within each kind.
        entities.sort_by_key(|e| kind_rank(e.kind()));

        let mut by_name = HashMap::with_capacity(entities.len());
        let mut subclasses: HashMap<String, Vec<usize>> = HashMap::new();
        let mut instances: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, entity) in entities.iter().enumerate() {
            if by_name.contains_key(&entity.name) {
                tracing::debug!(name = %entity.name, "duplicate entity name, first definition kept");
            } else {
                by_name.insert(entity.name.clone(), index);
            }
            match &entity.relations {
                EntityRelations::Class { parents } => {
                    for parent in parents {
                        subclasses.entry(parent.clone()).or_default().push(index);
                    }
                }
                EntityRelations::Individual { classes } => {
                    for class in classes {
                        instances.entry(class.clone()).or_default().push(index);
                    }
                }
                EntityRelations::ObjectProperty { .. } | EntityRelations::DataProperty { .. } => {}
            }
        }

        Ok(Self {
            entities,
            by_name,
            subclasses,
            instances,
        })
    }

    /// All entities, grouped by kind.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Entities of one kind, in document order.
    pub fn entities_of(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.kind() == kind)
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.by_name.get(name).map(|&i| &self.entities[i])
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Direct subclasses of `class`, in document order.
    pub fn subclasses_of(&self, class: &str) -> impl Iterator<Item = &Entity> {
        self.indexed(self.subclasses.get(class))
    }

    /// Individuals asserted to belong to `class`, in document order.
    pub fn instances_of(&self, class: &str) -> impl Iterator<Item = &Entity> {
        self.indexed(self.instances.get(class))
    }

    fn indexed<'a>(&'a self, indexes: Option<&'a Vec<usize>>) -> impl Iterator<Item = &'a Entity> {
        indexes
            .into_iter()
            .flatten()
            .map(move |&i| &self.entities[i])
    }

    /// Display label: `lang`, then `default`, then the first label, then the name.
    pub fn label<'a>(&self, entity: &'a Entity, lang: Language, default: Language) -> &'a str {
        pick_text(&entity.labels, lang, default).unwrap_or(&entity.name)
    }

    /// Comment with the same fallback chain as [`Taxonomy::label`]; empty if none.
    pub fn comment<'a>(&self, entity: &'a Entity, lang: Language, default: Language) -> &'a str {
        pick_text(&entity.comments, lang, default).unwrap_or_default()
    }

    /// Label for a referenced entity name. Unknown names display as-is.
    pub fn label_of(&self, name: &str, lang: Language, default: Language) -> String {
        match self.get(name) {
            Some(entity) => self.label(entity, lang, default).to_owned(),
            None => name.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Taxonomy {
        Taxonomy::new(vec![
            Entity::individual("WannaCry").with_upward(["Ransomware"]),
            Entity::class("Malware")
                .with_label("Malware", "en")
                .with_label("Software malicioso", "es"),
            Entity::object_property("exploits")
                .with_upward(["Attack"])
                .with_range(["Vulnerability"]),
            Entity::class("Ransomware").with_upward(["Malware"]),
            Entity::class("Virus")
                .with_upward(["Malware"])
                .with_label("Virus informático", "es"),
        ])
        .expect("valid taxonomy")
    }

    #[test]
    fn entities_grouped_by_kind_in_document_order() {
        let tax = sample();
        let names: Vec<&str> = tax.entities().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Malware", "Ransomware", "Virus", "exploits", "WannaCry"]
        );
    }

    #[test]
    fn empty_name_rejected() {
        let err = Taxonomy::new(vec![Entity::class(" ")]).unwrap_err();
        assert!(err.to_string().contains("empty name"));
    }

    #[test]
    fn subclass_and_instance_indexes() {
        let tax = sample();
        let subs: Vec<&str> = tax.subclasses_of("Malware").map(|e| e.name.as_str()).collect();
        assert_eq!(subs, vec!["Ransomware", "Virus"]);
        let inst: Vec<&str> = tax
            .instances_of("Ransomware")
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(inst, vec!["WannaCry"]);
        assert_eq!(tax.subclasses_of("Nothing").count(), 0);
    }

    #[test]
    fn label_prefers_requested_language() {
        let tax = sample();
        let malware = tax.get("Malware").expect("present");
        assert_eq!(tax.label(malware, Language::Es, Language::En), "Software malicioso");
        assert_eq!(tax.label(malware, Language::En, Language::En), "Malware");
    }

    #[test]
    fn label_falls_back_to_default_then_first_then_name() {
        let tax = sample();
        let malware = tax.get("Malware").expect("present");
        assert_eq!(tax.label(malware, Language::Fr, Language::En), "Malware");
        assert_eq!(tax.label(malware, Language::Fr, Language::Es), "Software malicioso");

        let virus = tax.get("Virus").expect("present");
        assert_eq!(tax.label(virus, Language::Fr, Language::En), "Virus informático");

        let ransomware = tax.get("Ransomware").expect("present");
        assert_eq!(tax.label(ransomware, Language::En, Language::En), "Ransomware");
    }

    #[test]
    fn untagged_label_used_as_first_available() {
        let mut entity = Entity::class("Worm");
        entity.labels.push(LangString::new("Computer worm", None));
        let tax = Taxonomy::new(vec![entity]).expect("valid");
        let worm = tax.get("Worm").expect("present");
        assert_eq!(tax.label(worm, Language::De, Language::En), "Computer worm");
    }

    #[test]
    fn comment_defaults_to_empty() {
        let tax = sample();
        let virus = tax.get("Virus").expect("present");
        assert_eq!(tax.comment(virus, Language::En, Language::En), "");
    }

    #[test]
    fn label_of_unknown_name_is_name() {
        let tax = sample();
        assert_eq!(tax.label_of("Attack", Language::En, Language::En), "Attack");
        assert_eq!(
            tax.label_of("Malware", Language::Es, Language::En),
            "Software malicioso"
        );
    }

    #[test]
    fn duplicate_names_keep_first() {
        let tax = Taxonomy::new(vec![
            Entity::class("Threat").with_label("First", "en"),
            Entity::class("Threat").with_label("Second", "en"),
        ])
        .expect("valid");
        assert_eq!(tax.len(), 2);
        let threat = tax.get("Threat").expect("present");
        assert_eq!(tax.label(threat, Language::En, Language::En), "First");
    }

    #[test]
    fn with_range_ignored_for_classes() {
        let class = Entity::class("Asset").with_range(["X"]);
        assert_eq!(class.relations, EntityRelations::Class { parents: vec![] });
    }
}
