//! # Portico Installers
//!
//! Capability installers applied to the [`AppInstance`](crate::kernel::instance::AppInstance)
//! during bootstrap.
//!
//! - [`traits`]: the [`Plugin`](traits::Plugin) contract (synchronous install), the
//!   [`PluginLoader`](traits::PluginLoader) contract for deferred loads and the
//!   [`AdapterSetup`](traits::AdapterSetup) contract for the pre-instance adapter steps.
//! - [`adapter`]: the component adapter registry and its built-in setups.
//! - [`directive`]: the directive registry shared by all directive installers.
//! - [`loading`] / [`access`]: the loading-state and access-control directives.
//! - [`builtin`]: the widget library, tooltip and motion plugins and their loaders.
pub mod access;
pub mod adapter;
pub mod builtin;
pub mod directive;
pub mod error;
pub mod loading;
pub mod traits;

pub use access::register_access_directive;
pub use adapter::{AdapterRegistry, DefaultComponentAdapter, DefaultFormSetup};
pub use directive::{Directive, DirectiveBinding, DirectiveRegistry, ElementState};
pub use error::InstallerError;
pub use loading::{LoadingDirectiveOptions, register_loading_directive};
pub use traits::{AdapterSetup, Plugin, PluginLoader};

// Test module declaration
#[cfg(test)]
mod tests;
