//! Movie lookup error types.

use thiserror::Error;

/// Errors that can occur while fetching a movie from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MovieError {
    /// Genre name is not one of the supported categories.
    #[error("genre not recognized: {0}")]
    UnrecognizedGenre(String),

    /// Transport-level failure (connect, timeout, body read).
    #[error("network error: {0}")]
    Network(String),

    /// Catalog answered with a non-success status.
    #[error("catalog rejected request with status {status}")]
    Rejected { status: u16 },

    /// Response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Catalog returned an empty result list.
    #[error("no movies found")]
    EmptyResult,
}

impl MovieError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        MovieError::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        MovieError::Parse(message.into())
    }
}
