//! JSON taxonomy documents.
//!
//! The document mirrors the four OWL entity collections:
//!
//! ```json
//! {
//!   "classes": [{"name": "Virus", "labels": [{"value": "Virus", "lang": "en"}], "parents": ["Malware"]}],
//!   "object_properties": [{"name": "exploits", "domain": ["Attack"], "range": ["Vulnerability"]}],
//!   "data_properties": [{"name": "cvssScore", "domain": ["Vulnerability"]}],
//!   "individuals": [{"name": "WannaCry", "classes": ["Ransomware"]}]
//! }
//! ```
//!
//! Every collection and every field other than `name` is optional.

use std::path::Path;

use serde::Deserialize;

use super::{Entity, EntityRelations, LangString, Taxonomy};
use crate::error::{Result, SearchError};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TaxonomyDocument {
    classes: Vec<ClassRecord>,
    object_properties: Vec<PropertyRecord>,
    data_properties: Vec<PropertyRecord>,
    individuals: Vec<IndividualRecord>,
}

#[derive(Debug, Deserialize)]
struct ClassRecord {
    name: String,
    #[serde(default)]
    labels: Vec<LangString>,
    #[serde(default)]
    comments: Vec<LangString>,
    #[serde(default)]
    parents: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PropertyRecord {
    name: String,
    #[serde(default)]
    labels: Vec<LangString>,
    #[serde(default)]
    comments: Vec<LangString>,
    #[serde(default)]
    domain: Vec<String>,
    #[serde(default)]
    range: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct IndividualRecord {
    name: String,
    #[serde(default)]
    labels: Vec<LangString>,
    #[serde(default)]
    comments: Vec<LangString>,
    #[serde(default)]
    classes: Vec<String>,
}

impl TaxonomyDocument {
    fn into_entities(self) -> Vec<Entity> {
        let classes = self.classes.into_iter().map(|r| Entity {
            name: r.name,
            labels: r.labels,
            comments: r.comments,
            relations: EntityRelations::Class { parents: r.parents },
        });
        let object_properties = self.object_properties.into_iter().map(|r| Entity {
            name: r.name,
            labels: r.labels,
            comments: r.comments,
            relations: EntityRelations::ObjectProperty {
                domain: r.domain,
                range: r.range,
            },
        });
        let data_properties = self.data_properties.into_iter().map(|r| Entity {
            name: r.name,
            labels: r.labels,
            comments: r.comments,
            relations: EntityRelations::DataProperty {
                domain: r.domain,
                range: r.range,
            },
        });
        let individuals = self.individuals.into_iter().map(|r| Entity {
            name: r.name,
            labels: r.labels,
            comments: r.comments,
            relations: EntityRelations::Individual { classes: r.classes },
        });
        classes
            .chain(object_properties)
            .chain(data_properties)
            .chain(individuals)
            .collect()
    }
}

impl Taxonomy {
    /// Parse a taxonomy from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Taxonomy`] if the JSON is malformed or an
    /// entity has an empty name.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: TaxonomyDocument = serde_json::from_str(json)
            .map_err(|e| SearchError::Taxonomy(format!("invalid taxonomy document: {e}")))?;
        Self::new(document.into_entities())
    }

    /// Read and parse a taxonomy JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Taxonomy`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SearchError::Taxonomy(format!("cannot read {}: {e}", path.display()))
        })?;
        let taxonomy = Self::from_json_str(&content)?;
        let stats = taxonomy.stats();
        tracing::info!(
            path = %path.display(),
            classes = stats.classes,
            properties = stats.properties(),
            individuals = stats.individuals,
            "taxonomy loaded"
        );
        Ok(taxonomy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntityKind, Language};

    const DOC: &str = r#"{
        "classes": [
            {"name": "Malware", "labels": [{"value": "Malware", "lang": "en"}]},
            {"name": "Virus", "parents": ["Malware"],
             "labels": [{"value": "Computer virus", "lang": "en"}, {"value": "Virus informático", "lang": "es"}],
             "comments": [{"value": "Self-replicating malicious program", "lang": "en"}]}
        ],
        "object_properties": [{"name": "infects", "domain": ["Virus"], "range": ["Asset"]}],
        "data_properties": [{"name": "cvssScore", "domain": ["Vulnerability"]}],
        "individuals": [{"name": "ILOVEYOU", "classes": ["Virus"]}]
    }"#;

    #[test]
    fn parses_all_collections() {
        let tax = Taxonomy::from_json_str(DOC).expect("parse");
        let stats = tax.stats();
        assert_eq!(stats.classes, 2);
        assert_eq!(stats.object_properties, 1);
        assert_eq!(stats.data_properties, 1);
        assert_eq!(stats.individuals, 1);
        assert_eq!(
            tax.get("cvssScore").map(Entity::kind),
            Some(EntityKind::DataProperty)
        );
    }

    #[test]
    fn labels_and_relations_survive_parsing() {
        let tax = Taxonomy::from_json_str(DOC).expect("parse");
        let virus = tax.get("Virus").expect("present");
        assert_eq!(tax.label(virus, Language::Es, Language::En), "Virus informático");
        assert_eq!(
            tax.comment(virus, Language::Es, Language::En),
            "Self-replicating malicious program"
        );
        assert_eq!(tax.subclasses_of("Malware").count(), 1);
        assert_eq!(tax.instances_of("Virus").count(), 1);
    }

    #[test]
    fn empty_document_is_valid() {
        let tax = Taxonomy::from_json_str("{}").expect("parse");
        assert!(tax.is_empty());
    }

    #[test]
    fn malformed_json_rejected() {
        let err = Taxonomy::from_json_str("{\"classes\": [").unwrap_err();
        assert!(err.to_string().contains("invalid taxonomy document"));
    }

    #[test]
    fn missing_name_rejected() {
        let err = Taxonomy::from_json_str(r#"{"classes": [{"labels": []}]}"#).unwrap_err();
        assert!(matches!(err, SearchError::Taxonomy(_)));
    }

    #[test]
    fn missing_file_reported() {
        let err = Taxonomy::from_file(Path::new("/nonexistent/taxonomy.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
