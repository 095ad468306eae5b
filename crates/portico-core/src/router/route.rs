use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::router::meta::RouteMeta;

/// Future returned by a lazy view loader
pub type ViewFuture = Pin<Box<dyn Future<Output = std::result::Result<ViewHandle, String>> + Send>>;

/// Loader resolving a lazily imported view
pub type ViewLoader = Arc<dyn Fn() -> ViewFuture + Send + Sync>;

/// Opaque handle to a resolved, renderable page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewHandle {
    id: String,
}

impl ViewHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A view resolved only when its route is first navigated to
#[derive(Clone)]
pub struct LazyView {
    id: String,
    loader: ViewLoader,
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView").field("id", &self.id).finish_non_exhaustive()
    }
}

impl LazyView {
    /// A view whose loader resolves straight to a handle named `id`.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let handle_id = id.clone();
        Self {
            id,
            loader: Arc::new(move || {
                let handle = ViewHandle::new(handle_id.clone());
                Box::pin(async move { Ok(handle) })
            }),
        }
    }

    /// A view resolved by a custom async loader.
    pub fn with_loader<F, Fut>(id: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<ViewHandle, String>> + Send + 'static,
    {
        Self {
            id: id.into(),
            loader: Arc::new(move || Box::pin(loader())),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn load(&self) -> std::result::Result<ViewHandle, String> {
        (self.loader)().await
    }
}

/// What a route renders
#[derive(Debug, Clone, Default)]
pub enum RouteComponent {
    /// Page resolved lazily on first navigation
    Lazy(LazyView),
    /// Shared frame view rendering the external URL in `meta.link`
    Embedded,
    /// Pure container or redirect node
    #[default]
    None,
}

/// A route's view after navigation resolved it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedView {
    View(ViewHandle),
    Embedded { url: String },
    None,
}

/// One entry in the navigation tree
#[derive(Debug, Clone)]
pub struct RouteNode {
    pub name: String,
    pub path: String,
    pub redirect: Option<String>,
    pub component: RouteComponent,
    pub meta: RouteMeta,
    /// Ordered; order drives menu and tab placement
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            redirect: None,
            component: RouteComponent::None,
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    pub fn redirect(mut self, to: impl Into<String>) -> Self {
        self.redirect = Some(to.into());
        self
    }

    /// Render a lazily loaded view identified by `view_id`
    pub fn lazy(mut self, view_id: impl Into<String>) -> Self {
        self.component = RouteComponent::Lazy(LazyView::new(view_id));
        self
    }

    /// Render the embedded frame view pointing at `link`
    pub fn embedded(mut self, link: impl Into<String>) -> Self {
        self.component = RouteComponent::Embedded;
        self.meta.link = Some(link.into());
        self
    }

    pub fn component(mut self, component: RouteComponent) -> Self {
        self.component = component;
        self
    }

    pub fn meta(mut self, meta: RouteMeta) -> Self {
        // Keep a link set earlier through `embedded`
        let link = self.meta.link.take();
        self.meta = meta;
        if self.meta.link.is_none() {
            self.meta.link = link;
        }
        self
    }

    pub fn child(mut self, child: RouteNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = RouteNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// No component and no redirect: navigation must pick a child.
    pub fn is_container(&self) -> bool {
        matches!(self.component, RouteComponent::None) && self.redirect.is_none()
    }
}
