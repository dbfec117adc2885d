//! Entity detail views and snapshot statistics.

use serde::{Deserialize, Serialize};

use super::{EntityRelations, Taxonomy};
use crate::lexicon;
use crate::types::{EntityKind, Language};

/// A referenced entity rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub name: String,
    pub label: String,
}

/// Full, untruncated relations of one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailRelations {
    Class {
        parents: Vec<EntityRef>,
        subclasses: Vec<EntityRef>,
        instances: Vec<EntityRef>,
    },
    Property {
        domain: Vec<EntityRef>,
        range: Vec<EntityRef>,
    },
    Individual {
        classes: Vec<EntityRef>,
    },
}

/// Everything known locally about one entity, in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDetails {
    pub name: String,
    pub label: String,
    pub comment: String,
    pub kind: EntityKind,
    pub language: Language,
    pub relations: DetailRelations,
}

/// Entity counts by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyStats {
    pub classes: usize,
    pub object_properties: usize,
    pub data_properties: usize,
    pub individuals: usize,
}

impl TaxonomyStats {
    pub fn properties(&self) -> usize {
        self.object_properties + self.data_properties
    }
}

impl Taxonomy {
    /// Describe the entity called `name`, or `None` if it does not exist.
    pub fn details(&self, name: &str, lang: Language, default: Language) -> Option<EntityDetails> {
        let entity = self.get(name)?;
        let refs = |names: &[String]| -> Vec<EntityRef> {
            names
                .iter()
                .map(|n| EntityRef {
                    name: n.clone(),
                    label: self.label_of(n, lang, default),
                })
                .collect()
        };

        let relations = match &entity.relations {
            EntityRelations::Class { parents } => DetailRelations::Class {
                parents: refs(parents),
                subclasses: self
                    .subclasses_of(&entity.name)
                    .map(|e| EntityRef {
                        name: e.name.clone(),
                        label: self.label(e, lang, default).to_owned(),
                    })
                    .collect(),
                instances: self
                    .instances_of(&entity.name)
                    .map(|e| EntityRef {
                        name: e.name.clone(),
                        label: self.label(e, lang, default).to_owned(),
                    })
                    .collect(),
            },
            EntityRelations::ObjectProperty { domain, range }
            | EntityRelations::DataProperty { domain, range } => DetailRelations::Property {
                domain: refs(domain),
                range: refs(range),
            },
            EntityRelations::Individual { classes } => DetailRelations::Individual {
                classes: refs(classes),
            },
        };

        let comment = match self.comment(entity, lang, default) {
            "" => lexicon::no_description(lang).to_owned(),
            text => text.to_owned(),
        };

        Some(EntityDetails {
            name: entity.name.clone(),
            label: self.label(entity, lang, default).to_owned(),
            comment,
            kind: entity.kind(),
            language: lang,
            relations,
        })
    }

    pub fn stats(&self) -> TaxonomyStats {
        let mut stats = TaxonomyStats::default();
        for entity in self.entities() {
            match entity.kind() {
                EntityKind::Class => stats.classes += 1,
                EntityKind::ObjectProperty => stats.object_properties += 1,
                EntityKind::DataProperty => stats.data_properties += 1,
                EntityKind::Individual => stats.individuals += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Entity;

    fn sample() -> Taxonomy {
        Taxonomy::new(vec![
            Entity::class("Malware")
                .with_label("Malware", "en")
                .with_comment("Malicious software", "en"),
            Entity::class("Virus")
                .with_upward(["Malware"])
                .with_label("Virus", "en")
                .with_label("Virus informático", "es"),
            Entity::object_property("infects")
                .with_upward(["Virus"])
                .with_range(["Asset"]),
            Entity::data_property("severity").with_upward(["Vulnerability"]),
            Entity::individual("ILOVEYOU").with_upward(["Virus"]),
        ])
        .expect("valid")
    }

    #[test]
    fn class_details_include_subclasses_and_instances() {
        let tax = sample();
        let details = tax
            .details("Virus", Language::Es, Language::En)
            .expect("exists");
        assert_eq!(details.label, "Virus informático");
        assert_eq!(details.kind, EntityKind::Class);
        match details.relations {
            DetailRelations::Class {
                parents,
                subclasses,
                instances,
            } => {
                assert_eq!(parents[0].name, "Malware");
                assert!(subclasses.is_empty());
                assert_eq!(instances.len(), 1);
                assert_eq!(instances[0].label, "ILOVEYOU");
            }
            other => panic!("unexpected relations: {other:?}"),
        }
    }

    #[test]
    fn missing_comment_uses_translated_placeholder() {
        let tax = sample();
        let details = tax
            .details("Virus", Language::Es, Language::En)
            .expect("exists");
        assert_eq!(details.comment, "Sin descripción disponible");

        let details = tax
            .details("Malware", Language::En, Language::En)
            .expect("exists");
        assert_eq!(details.comment, "Malicious software");
    }

    #[test]
    fn property_details_resolve_labels() {
        let tax = sample();
        let details = tax
            .details("infects", Language::En, Language::En)
            .expect("exists");
        assert_eq!(
            details.relations,
            DetailRelations::Property {
                domain: vec![EntityRef {
                    name: "Virus".into(),
                    label: "Virus".into()
                }],
                range: vec![EntityRef {
                    name: "Asset".into(),
                    label: "Asset".into()
                }],
            }
        );
    }

    #[test]
    fn unknown_entity_has_no_details() {
        assert!(sample()
            .details("Nope", Language::En, Language::En)
            .is_none());
    }

    #[test]
    fn stats_count_each_kind() {
        let stats = sample().stats();
        assert_eq!(stats.classes, 2);
        assert_eq!(stats.object_properties, 1);
        assert_eq!(stats.data_properties, 1);
        assert_eq!(stats.individuals, 1);
        assert_eq!(stats.properties(), 2);
    }
}
