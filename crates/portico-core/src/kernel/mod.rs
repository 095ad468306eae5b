//! # Portico Kernel
//!
//! Startup orchestration of the admin shell.
//!
//! - [`Bootstrapper`](bootstrap::Bootstrapper) runs the thirteen
//!   [`BootstrapStep`](steps::BootstrapStep)s in their fixed order against one
//!   [`AppInstance`](instance::AppInstance). Awaited steps suspend the sequence and abort it
//!   on failure; deferred steps are spawned and their failures stay isolated.
//! - [`Collaborators`](bootstrap::Collaborators) bundles the replaceable seams
//!   (adapter setups, locale source, store backend, loaders, title sink, mount target).
//! - [`ConstantsRegistry`](constants::ConstantsRegistry) holds the named external URLs
//!   route modules read at declaration time.
//! - [`Error`](error::Error) wraps every subsystem error and classifies it.
pub mod bootstrap;
pub mod constants;
pub mod error;
pub mod instance;
pub mod steps;

pub use bootstrap::{Bootstrapped, Bootstrapper, Collaborators};
pub use constants::ConstantsRegistry;
pub use error::{Error, ErrorClass, Result};
pub use instance::{AppInstance, LogMountTarget, MountTarget};
pub use steps::{BootstrapReport, BootstrapStep, DeferredOutcome, StepKind, StepOutcome};

// Test module declaration
#[cfg(test)]
pub(crate) mod tests;
