//! # Portico Router Errors
//!
//! Defines [`RouterError`], raised while validating route modules during
//! aggregation and while resolving navigation targets.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("Route name '{name}' is declared twice (module '{first_module}' and module '{second_module}')")]
    DuplicateRouteName {
        name: String,
        first_module: String,
        second_module: String,
    },

    #[error("Path '{path}' is declared twice under '{parent}'")]
    DuplicateSiblingPath { parent: String, path: String },

    #[error("Route '{route}' redirects to '{redirect}', which is not a path in its subtree")]
    UnresolvedRedirect { route: String, redirect: String },

    #[error("Route '{route}' in module '{module}' is malformed: {reason}")]
    MalformedRoute {
        module: String,
        route: String,
        reason: String,
    },

    #[error("Constant '{name}' is not defined in the constants registry")]
    MissingConstant { name: String },

    #[error("No route matches path '{path}'")]
    RouteNotFound { path: String },

    #[error("Container route '{route}' has no redirect, no component and no affixed child to fall back to")]
    NoDefaultChild { route: String },

    #[error("Failed to load view '{view}' for route '{route}': {reason}")]
    ViewLoadFailed {
        route: String,
        view: String,
        reason: String,
    },
}

impl RouterError {
    /// Whether this error reports a broken route declaration rather than a bad navigation request.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            RouterError::RouteNotFound { .. } | RouterError::ViewLoadFailed { .. }
        )
    }
}
