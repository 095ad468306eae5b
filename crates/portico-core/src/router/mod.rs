//! # Portico Router
//!
//! The declarative navigation tree and the engine that walks it.
//!
//! ## Key Components:
//!
//! - [`RouteNode`](route::RouteNode) / [`RouteMeta`](meta::RouteMeta): one entry of the
//!   tree with its display metadata.
//! - [`RouteModule`](module::RouteModule): a named, statically declared group of top-level nodes.
//! - [`aggregate`](aggregator::aggregate): validates and concatenates modules into a
//!   [`RouteTable`](table::RouteTable).
//! - [`Router`](engine::Router): the navigation engine. It resolves paths, loads lazy views
//!   on first visit and publishes the current route as a [`Signal`](crate::signal::Signal).
//! - [`modules`]: the built-in route modules of the admin shell.
pub mod aggregator;
pub mod engine;
pub mod error;
pub mod meta;
pub mod module;
pub mod modules;
pub mod route;
pub mod table;

pub use aggregator::aggregate;
pub use engine::{CurrentRoute, Router};
pub use error::RouterError;
pub use meta::{BadgeType, RouteMeta};
pub use module::RouteModule;
pub use route::{LazyView, ResolvedView, RouteComponent, RouteNode, ViewHandle};
pub use table::{AffixTab, MenuItem, RouteTable};

/// Join a possibly relative `path` onto `base`. Absolute paths are returned as-is.
pub(crate) fn join_path(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        return normalize_path(path);
    }
    let base = base.trim_end_matches('/');
    normalize_path(&format!("{}/{}", base, path))
}

/// Strip trailing slashes (except for the root path).
pub(crate) fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

// Test module declaration
#[cfg(test)]
mod tests;
