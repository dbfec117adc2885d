//! Error types for the cyberonto-search crate.
//!
//! Input and availability errors are surfaced to callers of the
//! aggregator. Remote errors (`Timeout`, `Http`, `Parse`) are produced by
//! the federated client and absorbed by the aggregator, which answers
//! from the fallback table instead.

/// Errors that can occur during a hybrid search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The query text was empty or normalised to nothing.
    #[error("empty query: a search term is required")]
    EmptyQuery,

    /// The requested page or page size is out of range.
    #[error("invalid pagination: {0}")]
    InvalidPagination(String),

    /// The query is unsuitable for a remote lookup (e.g. too short).
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// No taxonomy snapshot has been loaded.
    #[error("knowledge base unavailable")]
    KnowledgeBaseUnavailable,

    /// The taxonomy document could not be read or is inconsistent.
    #[error("taxonomy error: {0}")]
    Taxonomy(String),

    /// A remote query exceeded its deadline.
    #[error("remote query timed out: {0}")]
    Timeout(String),

    /// An HTTP request to a SPARQL endpoint failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The SPARQL endpoint returned a payload that could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Returns `true` for errors caused by the caller's input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyQuery | Self::InvalidPagination(_))
    }

    /// Returns `true` for transient remote failures the aggregator absorbs.
    pub fn is_remote_failure(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Http(_) | Self::Parse(_))
    }
}

/// Convenience type alias for cyberonto-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
