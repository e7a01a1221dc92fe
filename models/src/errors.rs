// models/src/errors.rs

use std::io;

pub use thiserror::Error;

use crate::keys::VertexKey;

#[derive(Debug, Error)]
pub enum GraphError {
    /// The forward and inbound adjacency lists disagree. Every outbound
    /// edge must have exactly one matching inbound entry; mutation paths
    /// return this instead of leaving the index half-updated.
    #[error("adjacency index inconsistent between '{from}' and '{to}'")]
    AdjacencyInconsistent { from: VertexKey, to: VertexKey },

    /// An algorithm parameter is outside its documented range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A validation error.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A dump line that is neither a vertex record (`key`) nor an edge
    /// record (`from to weight`).
    #[error("malformed graph record '{0}'")]
    InvalidRecord(String),
}

/// A type alias for a `Result` that returns a `GraphError` on failure.
pub type GraphResult<T> = Result<T, GraphError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
