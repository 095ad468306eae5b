use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use crate::installer::traits::Plugin;
use crate::kernel::error::Result;
use crate::kernel::instance::AppInstance;
use crate::router::error::RouterError;
use crate::router::join_path;
use crate::router::meta::RouteMeta;
use crate::router::route::{ResolvedView, RouteComponent, RouteNode, ViewHandle};
use crate::router::table::{RouteEntry, RouteTable};
use crate::signal::Signal;

/// The route the engine last navigated to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentRoute {
    pub name: String,
    pub path: String,
    pub meta: RouteMeta,
    pub view: ResolvedView,
    /// Path originally requested when redirects or container defaults were followed
    pub redirected_from: Option<String>,
    /// The view's state was kept alive from an earlier visit
    pub restored: bool,
}

/// Navigation engine over an aggregated [`RouteTable`].
///
/// Cloning is cheap; clones share the table, the current-route signal and the caches.
#[derive(Debug, Clone)]
pub struct Router {
    table: Arc<RouteTable>,
    current: Signal<Option<CurrentRoute>>,
    // route name -> view resolved on first visit
    loaded_views: Arc<tokio::sync::Mutex<HashMap<String, ViewHandle>>>,
    // routes whose rendered state is retained across navigation
    kept_alive: Arc<Mutex<BTreeSet<String>>>,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table: Arc::new(table),
            current: Signal::new(None),
            loaded_views: Arc::new(tokio::sync::Mutex::new(HashMap::new())),
            kept_alive: Arc::new(Mutex::new(BTreeSet::new())),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Signal carrying the current route; set only after a navigation completes.
    pub fn current(&self) -> Signal<Option<CurrentRoute>> {
        self.current.clone()
    }

    pub fn current_route(&self) -> Option<CurrentRoute> {
        self.current.get()
    }

    /// Names of routes whose view state is currently kept alive
    pub fn kept_alive(&self) -> Vec<String> {
        self.kept_alive
            .lock()
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether the view of `route` has been resolved already
    pub async fn is_view_loaded(&self, route: &str) -> bool {
        self.loaded_views.lock().await.contains_key(route)
    }

    /// Navigate to `path`.
    ///
    /// Redirects are followed and pure containers fall through to their first affixed
    /// child. The destination's lazy view is resolved on first visit only. The current
    /// route signal is updated last, once the destination is fully resolved.
    pub async fn navigate(&self, path: &str) -> Result<CurrentRoute> {
        let (entry, node, redirected_from) = self.resolve(path)?;

        let view = match &node.component {
            RouteComponent::Lazy(lazy) => {
                // The cache lock is never held across a load.
                let cached = self.loaded_views.lock().await.get(&node.name).cloned();
                let handle = match cached {
                    Some(handle) => handle,
                    None => {
                        log::debug!("Resolving view '{}' for route '{}'", lazy.id(), node.name);
                        let handle = lazy.load().await.map_err(|reason| RouterError::ViewLoadFailed {
                            route: node.name.clone(),
                            view: lazy.id().to_string(),
                            reason,
                        })?;
                        // A concurrent first visit may have finished first; keep its handle.
                        self.loaded_views
                            .lock()
                            .await
                            .entry(node.name.clone())
                            .or_insert(handle)
                            .clone()
                    }
                };
                ResolvedView::View(handle)
            }
            RouteComponent::Embedded => ResolvedView::Embedded {
                url: node.meta.link.clone().unwrap_or_default(),
            },
            RouteComponent::None => ResolvedView::None,
        };

        let restored = {
            let mut kept = self
                .kept_alive
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if node.meta.keep_alive {
                !kept.insert(node.name.clone())
            } else {
                false
            }
        };

        let current = CurrentRoute {
            name: node.name.clone(),
            path: entry.full_path.clone(),
            meta: node.meta.clone(),
            view,
            redirected_from,
            restored,
        };
        log::info!("Navigated to '{}' ({})", current.path, current.name);
        self.current.set(Some(current.clone()));
        Ok(current)
    }

    /// Drop a route's retained state, e.g. when its tab is closed.
    pub fn evict(&self, route: &str) -> bool {
        self.kept_alive
            .lock()
            .map(|mut set| set.remove(route))
            .unwrap_or(false)
    }

    fn resolve(&self, path: &str) -> Result<(&RouteEntry, &RouteNode, Option<String>)> {
        let mut target = super::normalize_path(path);
        let mut redirected_from = None;

        // Validated tables cannot loop: every hop moves strictly down the tree.
        for _ in 0..=self.table.node_count() {
            let entry = self
                .table
                .entry_by_path(&target)
                .ok_or_else(|| RouterError::RouteNotFound {
                    path: target.clone(),
                })?;
            let node = self.table.node(entry).ok_or_else(|| RouterError::RouteNotFound {
                path: entry.full_path.clone(),
            })?;

            let next = if let Some(redirect) = &node.redirect {
                join_path(&entry.full_path, redirect)
            } else if node.is_container() {
                let child = node
                    .children
                    .iter()
                    .find(|c| c.meta.affix_tab)
                    .ok_or_else(|| RouterError::NoDefaultChild {
                        route: node.name.clone(),
                    })?;
                join_path(&entry.full_path, &child.path)
            } else {
                return Ok((entry, node, redirected_from));
            };

            redirected_from.get_or_insert_with(|| super::normalize_path(path));
            target = next;
        }

        Err(RouterError::RouteNotFound {
            path: path.to_string(),
        }
        .into())
    }
}

impl Plugin for Router {
    fn name(&self) -> &'static str {
        "router"
    }

    fn install(&self, app: &mut AppInstance) -> Result<()> {
        app.attach_router(self.clone());
        Ok(())
    }
}
