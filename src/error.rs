//! Error types for indexing, resolution and export.

use thiserror::Error;

use crate::base::NodeId;

/// Errors surfaced by the top-level indexing and export operations.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// No owning Identifiable above an element: the tree is not rooted.
    #[error("Could not determine Identifiable parent of {node} ('{id_short}')")]
    Lookup { node: NodeId, id_short: String },

    /// An ancestor handle does not address an element of the snapshot.
    #[error("Corrupt tree: {node} is neither an element nor an Identifiable")]
    Structural { node: NodeId },

    /// The tree source failed to deliver a snapshot.
    #[error("Failed to fetch submodels: {0}")]
    SourceFetch(#[from] SourceError),

    /// XML serialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatcherError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }
}

/// Errors at the tree source boundary.
#[derive(Debug, Error)]
pub enum SourceError {
    /// IO error while reading a snapshot file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport-level failure talking to the repository.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The repository answered with a non-success status.
    #[error("Repository returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The payload is well-formed but does not describe submodels.
    #[error("Invalid payload: {0}")]
    Invalid(String),
}

impl SourceError {
    /// Create an HTTP error.
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http(message.into())
    }

    /// Create an invalid payload error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Result alias defaulting to [`MatcherError`].
pub type Result<T, E = MatcherError> = std::result::Result<T, E>;
