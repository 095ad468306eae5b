use portico_core::AppInstance;
use portico_core::i18n::Translator;
use portico_core::kernel::error::Result;
use portico_core::kernel::instance::MountTarget;
use portico_core::kernel::steps::{BootstrapReport, BootstrapStep, DeferredOutcome, StepKind};
use portico_core::router::{CurrentRoute, MenuItem, ResolvedView, RouteTable};
use portico_core::ConstantsRegistry;

/// Mount target for the command line: reports the mount on stdout.
#[derive(Debug, Default)]
pub struct ConsoleMountTarget;

impl MountTarget for ConsoleMountTarget {
    fn mount(&self, anchor: &str, app: &AppInstance) -> Result<()> {
        println!("Mounted at {}", anchor);
        println!("  plugins: {}", app.installed_plugins().join(", "));
        println!(
            "  components: {} globally registered, {} adapters",
            app.components().len(),
            app.adapters().count()
        );
        println!("  directives: {}", app.directives().names().join(", "));
        Ok(())
    }
}

pub fn print_plan(plan: &[(BootstrapStep, StepKind)]) {
    println!("Bootstrap plan:");
    for (step, kind) in plan {
        let kind = match kind {
            StepKind::Awaited => "awaited",
            StepKind::Immediate => "immediate",
            StepKind::Deferred => "deferred",
        };
        println!(
            "  {:>2}. {:<28} [{}] {}",
            step.position(),
            step.id(),
            kind,
            step.description()
        );
    }
}

pub fn print_report(report: &BootstrapReport, deferred: &[DeferredOutcome]) {
    println!("Bootstrap report:");
    for (step, outcome) in report.records() {
        println!("  {:<28} {}", step.id(), outcome);
    }
    for outcome in deferred {
        match outcome {
            DeferredOutcome::Installed { step, plugin } => {
                println!("  {:<28} installed '{}'", step.id(), plugin)
            }
            DeferredOutcome::Failed {
                step,
                plugin,
                reason,
            } => println!("  {:<28} failed to install '{}': {}", step.id(), plugin, reason),
        }
    }
}

pub fn print_routes(table: &RouteTable) {
    for entry in table.entries() {
        println!(
            "{}{} {} [{}]",
            "  ".repeat(entry.depth),
            entry.name,
            entry.full_path,
            entry.module
        );
    }
}

pub fn print_menu(items: &[MenuItem], translator: &Translator) {
    print_menu_level(items, translator, 0);
}

fn print_menu_level(items: &[MenuItem], translator: &Translator, depth: usize) {
    for item in items {
        let title = item
            .title
            .as_deref()
            .map(|t| translator.t(t))
            .unwrap_or_else(|| item.name.clone());
        let badge = item
            .badge_type
            .map(|b| format!(" ({})", b))
            .unwrap_or_default();
        println!("{}{} -> {}{}", "  ".repeat(depth), title, item.path, badge);
        print_menu_level(&item.children, translator, depth + 1);
    }
}

pub fn print_tabs(table: &RouteTable, translator: &Translator) {
    for tab in table.affix_tabs() {
        let title = tab
            .title
            .as_deref()
            .map(|t| translator.t(t))
            .unwrap_or_else(|| tab.name.clone());
        println!("{} -> {}", title, tab.path);
    }
}

pub fn print_constants(constants: &ConstantsRegistry) {
    for (name, value) in constants.iter() {
        println!("{} = {}", name, value);
    }
}

pub fn print_route(route: &CurrentRoute) {
    println!("Route: {} ({})", route.name, route.path);
    if let Some(from) = &route.redirected_from {
        println!("  redirected from {}", from);
    }
    match &route.view {
        ResolvedView::View(handle) => println!("  view: {}", handle.id()),
        ResolvedView::Embedded { url } => println!("  embedded: {}", url),
        ResolvedView::None => println!("  view: none"),
    }
    if route.restored {
        println!("  state restored (keep-alive)");
    }
}
