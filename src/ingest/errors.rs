//! Ingestion error types

use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// Result type for ingestion
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors raised while loading a recipe source
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read source: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid source JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Top level is neither a list nor an object of recipes
    #[error("Unsupported source shape: expected a list or an object of recipes, found {0}")]
    UnsupportedShape(&'static str),

    #[error("{0}")]
    Store(#[from] StoreError),
}
