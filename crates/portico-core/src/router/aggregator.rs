use std::collections::{HashMap, HashSet};

use crate::kernel::error::Result;
use crate::router::error::RouterError;
use crate::router::module::RouteModule;
use crate::router::route::{RouteComponent, RouteNode};
use crate::router::table::{RouteEntry, RouteTable};
use crate::router::{join_path, normalize_path};

const ROOT_LABEL: &str = "<root>";

/// Collect route modules into a single validated [`RouteTable`].
///
/// Modules are concatenated in registration order and each module keeps its own node
/// order. Aggregation fails on the first configuration error found:
///
/// - a route name declared twice anywhere in the table,
/// - two siblings sharing a path,
/// - an empty name or path,
/// - an embedded view without `meta.link`,
/// - a container (no component, no redirect) without children,
/// - a redirect that does not land on a path inside the declaring node's subtree.
pub fn aggregate<I>(modules: I) -> Result<RouteTable>
where
    I: IntoIterator<Item = RouteModule>,
{
    let mut routes = Vec::new();
    let mut entries = Vec::new();
    // route name -> module that declared it
    let mut seen_names: HashMap<String, String> = HashMap::new();
    let mut top_level_paths: HashSet<String> = HashSet::new();

    for module in modules {
        let module_name = module.name().to_string();
        log::debug!(
            "Aggregating route module '{}' ({} top-level routes)",
            module_name,
            module.routes().len()
        );
        for node in module.into_routes() {
            let location = vec![routes.len()];
            check_sibling_path(&node, ROOT_LABEL, &mut top_level_paths)?;
            index_node(
                &node,
                "/",
                &module_name,
                location,
                &mut seen_names,
                &mut entries,
            )?;
            routes.push(node);
        }
    }

    let table = RouteTable::from_parts(routes, entries);
    for entry in table.entries() {
        check_redirect(&table, entry)?;
    }

    log::info!(
        "Route table aggregated: {} top-level routes, {} nodes",
        table.len(),
        table.node_count()
    );
    Ok(table)
}

fn index_node(
    node: &RouteNode,
    parent_path: &str,
    module: &str,
    location: Vec<usize>,
    seen_names: &mut HashMap<String, String>,
    entries: &mut Vec<RouteEntry>,
) -> Result<()> {
    check_shape(node, module)?;

    if let Some(first_module) = seen_names.get(&node.name) {
        return Err(RouterError::DuplicateRouteName {
            name: node.name.clone(),
            first_module: first_module.clone(),
            second_module: module.to_string(),
        }
        .into());
    }
    seen_names.insert(node.name.clone(), module.to_string());

    let full_path = join_path(parent_path, &node.path);
    entries.push(RouteEntry::new(&node.name, full_path.clone(), module, location.clone()));

    let mut sibling_paths = HashSet::new();
    for (i, child) in node.children.iter().enumerate() {
        check_sibling_path(child, &node.name, &mut sibling_paths)?;
        let mut child_location = location.clone();
        child_location.push(i);
        index_node(child, &full_path, module, child_location, seen_names, entries)?;
    }
    Ok(())
}

fn check_shape(node: &RouteNode, module: &str) -> Result<()> {
    let malformed = |reason: &str| -> crate::kernel::error::Error {
        RouterError::MalformedRoute {
            module: module.to_string(),
            route: node.name.clone(),
            reason: reason.to_string(),
        }
        .into()
    };

    if node.name.trim().is_empty() {
        return Err(malformed("route name is empty"));
    }
    if node.path.trim().is_empty() {
        return Err(malformed("route path is empty"));
    }
    if matches!(node.component, RouteComponent::Embedded)
        && node.meta.link.as_deref().is_none_or(|l| l.trim().is_empty())
    {
        return Err(malformed("embedded view without meta.link"));
    }
    if node.is_container() && node.children.is_empty() {
        return Err(malformed("no component, no redirect and no children"));
    }
    Ok(())
}

fn check_sibling_path(node: &RouteNode, parent: &str, seen: &mut HashSet<String>) -> Result<()> {
    let path = normalize_path(&node.path);
    if !seen.insert(path.to_ascii_lowercase()) {
        return Err(RouterError::DuplicateSiblingPath {
            parent: parent.to_string(),
            path,
        }
        .into());
    }
    Ok(())
}

/// A redirect must land strictly below the declaring node.
fn check_redirect(table: &RouteTable, entry: &RouteEntry) -> Result<()> {
    let Some(redirect) = table.node(entry).and_then(|node| node.redirect.as_ref()) else {
        return Ok(());
    };
    let target = join_path(&entry.full_path, redirect);
    let resolves = table
        .entries()
        .iter()
        .any(|candidate| {
            candidate.is_below(entry) && candidate.full_path.eq_ignore_ascii_case(&target)
        });
    if !resolves {
        return Err(RouterError::UnresolvedRedirect {
            route: entry.name.clone(),
            redirect: redirect.clone(),
        }
        .into());
    }
    Ok(())
}
