use crate::router::meta::{BadgeType, RouteMeta};
use crate::router::route::RouteNode;

/// Index record for one node of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub name: String,
    /// Absolute path after joining relative segments onto the parent
    pub full_path: String,
    /// Module the node was declared in
    pub module: String,
    pub depth: usize,
    location: Vec<usize>,
}

impl RouteEntry {
    pub(crate) fn new(name: &str, full_path: String, module: &str, location: Vec<usize>) -> Self {
        Self {
            name: name.to_string(),
            full_path,
            module: module.to_string(),
            depth: location.len() - 1,
            location,
        }
    }

    /// Whether this entry sits strictly inside `ancestor`'s subtree
    pub fn is_below(&self, ancestor: &RouteEntry) -> bool {
        self.location.len() > ancestor.location.len() && self.location.starts_with(&ancestor.location)
    }
}

/// One menu entry, children already sorted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub badge_type: Option<BadgeType>,
    pub order: Option<i32>,
    pub children: Vec<MenuItem>,
}

/// A route pinned as a permanent tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixTab {
    pub name: String,
    pub path: String,
    pub title: Option<String>,
    pub order: Option<i32>,
}

/// The validated, aggregated route sequence handed to the navigation engine.
///
/// Produced only by [`aggregate`](crate::router::aggregate); immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteNode>,
    // Depth-first, in table order
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub(crate) fn from_parts(routes: Vec<RouteNode>, entries: Vec<RouteEntry>) -> Self {
        Self { routes, entries }
    }

    /// Top-level nodes in registration order
    pub fn routes(&self) -> &[RouteNode] {
        &self.routes
    }

    /// Number of top-level nodes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Number of nodes at every depth
    pub fn node_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn entry_by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// First entry (in table order) whose full path matches, ignoring ASCII case
    pub fn entry_by_path(&self, path: &str) -> Option<&RouteEntry> {
        let path = super::normalize_path(path);
        self.entries
            .iter()
            .find(|e| e.full_path.eq_ignore_ascii_case(&path))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&RouteNode> {
        self.entry_by_name(name).and_then(|e| self.node(e))
    }

    pub fn find_by_path(&self, path: &str) -> Option<&RouteNode> {
        self.entry_by_path(path).and_then(|e| self.node(e))
    }

    /// Node an entry points at; `None` for an entry from another table.
    pub fn node(&self, entry: &RouteEntry) -> Option<&RouteNode> {
        let (first, rest) = entry.location.split_first()?;
        rest.iter()
            .try_fold(self.routes.get(*first)?, |node, idx| node.children.get(*idx))
    }

    /// Menu tree sorted by `meta.order` ascending.
    ///
    /// Nodes without an order come after ordered siblings; ties keep table order.
    /// Nodes flagged `hide_in_menu` are left out together with their children.
    pub fn menu(&self) -> Vec<MenuItem> {
        self.routes
            .iter()
            .enumerate()
            .filter_map(|(i, node)| self.menu_item(node, &[i]))
            .collect::<Vec<_>>()
            .sorted_by_order()
    }

    fn menu_item(&self, node: &RouteNode, location: &[usize]) -> Option<MenuItem> {
        if node.meta.hide_in_menu {
            return None;
        }
        let entry = self.entries.iter().find(|e| e.location == location)?;
        let children = node
            .children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| {
                let mut child_location = location.to_vec();
                child_location.push(i);
                self.menu_item(child, &child_location)
            })
            .collect::<Vec<_>>()
            .sorted_by_order();
        Some(MenuItem {
            name: node.name.clone(),
            path: entry.full_path.clone(),
            title: node.meta.title.clone(),
            icon: node.meta.icon.clone(),
            badge_type: node.meta.badge_type,
            order: node.meta.order,
            children,
        })
    }

    /// Every affixed node, sorted by `affix_tab_order` (unordered last, ties in table order)
    pub fn affix_tabs(&self) -> Vec<AffixTab> {
        let mut tabs: Vec<AffixTab> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let meta: &RouteMeta = &self.node(entry)?.meta;
                meta.affix_tab.then(|| AffixTab {
                    name: entry.name.clone(),
                    path: entry.full_path.clone(),
                    title: meta.title.clone(),
                    order: meta.affix_tab_order,
                })
            })
            .collect();
        tabs.sort_by_key(|t| order_key(t.order));
        tabs
    }
}

fn order_key(order: Option<i32>) -> (bool, i32) {
    (order.is_none(), order.unwrap_or_default())
}

trait SortedByOrder {
    fn sorted_by_order(self) -> Self;
}

impl SortedByOrder for Vec<MenuItem> {
    fn sorted_by_order(mut self) -> Self {
        // sort_by_key is stable, so equal orders keep table order
        self.sort_by_key(|item| order_key(item.order));
        self
    }
}
