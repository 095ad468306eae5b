//! # Portico Config Errors
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported configuration format for path: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("I/O error reading config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config '{path}': {reason}")]
    Parse {
        path: PathBuf,
        format: String,
        reason: String,
    },
}
