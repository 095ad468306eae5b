use crate::router::route::RouteNode;

/// A named, independently maintained group of top-level route nodes.
///
/// Modules are declared once at startup and read by the aggregator; they are never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct RouteModule {
    name: String,
    routes: Vec<RouteNode>,
}

impl RouteModule {
    pub fn new(name: impl Into<String>, routes: Vec<RouteNode>) -> Self {
        Self {
            name: name.into(),
            routes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn routes(&self) -> &[RouteNode] {
        &self.routes
    }

    pub(crate) fn into_routes(self) -> Vec<RouteNode> {
        self.routes
    }
}
