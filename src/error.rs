//! Error types for the cyberonto application.

use cyberonto_search::SearchError;

/// Top-level error type for the application layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Error from the search core.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// The requested taxonomy entity does not exist.
    #[error("no entity named {0:?}")]
    NotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
