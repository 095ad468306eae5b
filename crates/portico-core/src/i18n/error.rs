//! # Portico I18n Errors
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Locale '{locale}' is not available")]
    LocaleNotFound { locale: String },

    #[error("Messages for locale '{locale}' are invalid: {reason}")]
    InvalidMessages { locale: String, reason: String },

    #[error("I/O error reading locale file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
