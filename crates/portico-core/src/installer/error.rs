//! # Portico Installer Errors
//!
//! Defines [`InstallerError`], covering directive registration, component
//! adapter setup and plugin loading/installation.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallerError {
    #[error("Directive '{name}' is already registered")]
    DirectiveAlreadyRegistered { name: String },

    #[error("Component adapter for primitive '{primitive}' is already registered")]
    AdapterAlreadyRegistered { primitive: String },

    #[error("No component adapter registered for primitive '{primitive}'")]
    MissingAdapter { primitive: String },

    #[error("Failed to load plugin '{plugin}': {reason}")]
    LoadFailed { plugin: String, reason: String },

    #[error("Capability '{capability}' required by '{required_by}' is not available yet")]
    MissingCapability {
        capability: String,
        required_by: String,
    },
}
