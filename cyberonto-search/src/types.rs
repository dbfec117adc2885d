//! Core types: languages, entity kinds, candidates, queries and responses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages with a dedicated DBpedia chapter and translated tables.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, the default chapter at `dbpedia.org`.
    #[default]
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// German.
    De,
    /// Italian.
    It,
    /// Portuguese.
    Pt,
}

impl Language {
    /// Returns the ISO 639-1 code, as used in RDF language tags.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
            Self::Pt => "pt",
        }
    }

    /// Parse a language code, case-insensitively. Region suffixes
    /// (`en-GB`, `pt_BR`) are ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "fr" => Some(Self::Fr),
            "de" => Some(Self::De),
            "it" => Some(Self::It),
            "pt" => Some(Self::Pt),
            _ => None,
        }
    }

    /// Parse a language code, resolving unsupported codes to `default`.
    pub fn from_code_or(code: &str, default: Language) -> Self {
        Self::from_code(code).unwrap_or(default)
    }

    /// Returns all supported languages.
    pub fn all() -> &'static [Language] {
        &[Self::En, Self::Es, Self::Fr, Self::De, Self::It, Self::Pt]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unsupported language: {s}"))
    }
}

/// The four entity kinds of the taxonomy, fixed at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Class,
    ObjectProperty,
    DataProperty,
    Individual,
}

impl EntityKind {
    /// Returns `true` for object and data properties.
    pub fn is_property(&self) -> bool {
        matches!(self, Self::ObjectProperty | Self::DataProperty)
    }
}

/// Which entity kinds a search should consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Class,
    Property,
    Individual,
}

impl KindFilter {
    /// Returns `true` if entities of `kind` pass this filter.
    pub fn allows(&self, kind: EntityKind) -> bool {
        match self {
            Self::All => true,
            Self::Class => kind == EntityKind::Class,
            Self::Property => kind.is_property(),
            Self::Individual => kind == EntityKind::Individual,
        }
    }
}

impl FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "class" => Ok(Self::Class),
            "property" => Ok(Self::Property),
            "individual" => Ok(Self::Individual),
            other => Err(format!("unknown kind filter: {other}")),
        }
    }
}

/// Kind tag carried by a search candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Class,
    ObjectProperty,
    DataProperty,
    Individual,
    /// A resource from the remote knowledge graph or the fallback table.
    External,
}

impl From<EntityKind> for CandidateKind {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Class => Self::Class,
            EntityKind::ObjectProperty => Self::ObjectProperty,
            EntityKind::DataProperty => Self::DataProperty,
            EntityKind::Individual => Self::Individual,
        }
    }
}

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provenance {
    /// Local taxonomy match.
    #[serde(rename = "offline")]
    Local,
    /// Remote knowledge-graph result.
    #[serde(rename = "online")]
    Remote,
    /// Static curated fallback table.
    #[serde(rename = "fallback")]
    Fallback,
}

impl Provenance {
    /// Returns the wire name of this provenance.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Local => "offline",
            Self::Remote => "online",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural context attached to a local candidate, already rendered
/// as display labels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relations {
    /// Remote and fallback candidates carry no structure.
    #[default]
    None,
    Class {
        parents: Vec<String>,
        subclasses: Vec<String>,
    },
    Property {
        domain: Vec<String>,
        range: Vec<String>,
    },
    Individual {
        classes: Vec<String>,
    },
}

/// A single ranked search result. Lives for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCandidate {
    /// Stable identifier: the entity name, or the remote resource name.
    pub name: String,
    /// Display label in the requested language (or its fallback).
    pub label: String,
    pub kind: CandidateKind,
    /// Description text shown with the result.
    pub description: String,
    /// Relevance score (higher is better).
    pub score: f64,
    pub source: Provenance,
    /// Remote resource URI, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Human-facing page for the resource, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    #[serde(default)]
    pub relations: Relations,
}

/// An inbound search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub language: Language,
    pub kind_filter: KindFilter,
    /// Whether to consult the remote knowledge graph.
    pub federated: bool,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl SearchQuery {
    /// Default number of results per page.
    pub const DEFAULT_PAGE_SIZE: usize = 50;

    /// Create a query for `text` with default options: English, all
    /// kinds, federated search enabled, first page of 50.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: Language::En,
            kind_filter: KindFilter::All,
            federated: true,
            page: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_kind_filter(mut self, kind_filter: KindFilter) -> Self {
        self.kind_filter = kind_filter;
        self
    }

    pub fn with_federated(mut self, federated: bool) -> Self {
        self.federated = federated;
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

/// Per-provenance counts over the full merged result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub offline: usize,
    pub online: usize,
    pub fallback: usize,
    pub total: usize,
}

impl Statistics {
    /// Count candidates by provenance.
    pub fn from_candidates(candidates: &[SearchCandidate]) -> Self {
        let mut stats = Self {
            total: candidates.len(),
            ..Self::default()
        };
        for candidate in candidates {
            match candidate.source {
                Provenance::Local => stats.offline += 1,
                Provenance::Remote => stats.online += 1,
                Provenance::Fallback => stats.fallback += 1,
            }
        }
        stats
    }
}

/// What happened to the remote leg of an aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RemoteOutcome {
    /// Federated search was switched off for this request.
    Disabled,
    /// The normalised query was too short to send remotely.
    QueryTooShort,
    /// Not enough of the overall budget remained; fallback used directly.
    BudgetExhausted,
    /// The remote call returned enough results.
    Succeeded { results: usize },
    /// The remote call returned too few results; fallback entries appended.
    Supplemented { results: usize, fallback: usize },
    /// The remote call failed or timed out; fallback used instead.
    Failed { reason: String },
}

/// The answer to one [`SearchQuery`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub language: Language,
    pub kind_filter: KindFilter,
    pub federated: bool,
    pub page: usize,
    pub page_size: usize,
    /// Size of the full merged result set, before pagination.
    pub total: usize,
    pub statistics: Statistics,
    pub remote: RemoteOutcome,
    /// The requested page of results.
    pub results: Vec<SearchCandidate>,
}
