//! # Portico Store Errors
//!
//! Defines [`StoreError`], the errors raised while initializing the
//! namespace-scoped state stores and persisting their snapshots.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid store namespace '{namespace}': {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    #[error("I/O error during operation '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Store snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        StoreError::Io {
            source,
            operation: operation.into(),
            path,
        }
    }
}
