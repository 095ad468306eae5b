//! # Portico Kernel Errors
//!
//! Defines the crate-wide [`Error`] type and the [`Result`] alias.
//!
//! Each subsystem owns a typed error enum in its own `error` module; the kernel
//! error wraps all of them and adds the bootstrap-level failures. [`Error::class`]
//! maps any error onto the startup taxonomy (configuration, bootstrap, deferred
//! subsystem, runtime).
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::error::ConfigError;
use crate::i18n::error::I18nError;
use crate::installer::error::InstallerError;
use crate::kernel::steps::BootstrapStep;
use crate::router::error::RouterError;
use crate::store::error::StoreError;

/// Crate-wide error type
#[derive(Debug, ThisError)]
pub enum Error {
    /// Route model or navigation error
    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    /// Plugin, directive or adapter installation error
    #[error("Installer error: {0}")]
    Installer(#[from] InstallerError),

    /// Internationalization error
    #[error("I18n error: {0}")]
    I18n(#[from] I18nError),

    /// State store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration file error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A bootstrap step failed and the remaining sequence was aborted.
    #[error("Bootstrap step '{step}' failed: {source}")]
    BootstrapStepFailed {
        step: BootstrapStep,
        #[source]
        source: Box<Error>,
    },

    #[error("Application is already mounted at '{anchor}'")]
    AlreadyMounted { anchor: String },

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Where an error sits in the startup failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum ErrorClass {
    /// Malformed route modules or registry entries. Fails fast, never recovered at runtime.
    #[error("configuration")]
    Configuration,
    /// An awaited bootstrap step rejected. Fatal for startup.
    #[error("bootstrap")]
    Bootstrap,
    /// A deferred plugin load failed. Isolated to that subsystem.
    #[error("deferred subsystem")]
    DeferredSubsystem,
    /// Anything raised after startup (navigation, store access, ...).
    #[error("runtime")]
    Runtime,
}

impl Error {
    /// Classify this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::Router(e) if e.is_configuration() => ErrorClass::Configuration,
            Error::Installer(InstallerError::LoadFailed { .. }) => ErrorClass::DeferredSubsystem,
            Error::BootstrapStepFailed { source, .. } => match source.class() {
                ErrorClass::Configuration => ErrorClass::Configuration,
                _ => ErrorClass::Bootstrap,
            },
            Error::Config(_) => ErrorClass::Configuration,
            _ => ErrorClass::Runtime,
        }
    }

    /// Wrap an error raised while executing `step`.
    pub fn step_failed(step: BootstrapStep, source: Error) -> Self {
        Error::BootstrapStepFailed {
            step,
            source: Box::new(source),
        }
    }
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}
