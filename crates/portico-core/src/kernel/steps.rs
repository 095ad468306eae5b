use std::fmt;

/// How a bootstrap step relates to the rest of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Suspends the sequence until done; failure aborts bootstrap.
    Awaited,
    /// Runs to completion synchronously.
    Immediate,
    /// Spawned and not awaited; failure stays isolated to the subsystem.
    Deferred,
}

/// The bootstrap steps, in the only order they may run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BootstrapStep {
    ComponentAdapters,
    FormSetup,
    CreateInstance,
    WidgetLibrary,
    LoadingDirective,
    I18n,
    Stores,
    AccessDirective,
    Tooltip,
    Router,
    Motion,
    TitleReactor,
    Mount,
}

impl BootstrapStep {
    pub const ALL: [BootstrapStep; 13] = [
        BootstrapStep::ComponentAdapters,
        BootstrapStep::FormSetup,
        BootstrapStep::CreateInstance,
        BootstrapStep::WidgetLibrary,
        BootstrapStep::LoadingDirective,
        BootstrapStep::I18n,
        BootstrapStep::Stores,
        BootstrapStep::AccessDirective,
        BootstrapStep::Tooltip,
        BootstrapStep::Router,
        BootstrapStep::Motion,
        BootstrapStep::TitleReactor,
        BootstrapStep::Mount,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            BootstrapStep::ComponentAdapters => "bootstrap::component_adapters",
            BootstrapStep::FormSetup => "bootstrap::form_setup",
            BootstrapStep::CreateInstance => "bootstrap::create_instance",
            BootstrapStep::WidgetLibrary => "bootstrap::widget_library",
            BootstrapStep::LoadingDirective => "bootstrap::loading_directive",
            BootstrapStep::I18n => "bootstrap::i18n",
            BootstrapStep::Stores => "bootstrap::stores",
            BootstrapStep::AccessDirective => "bootstrap::access_directive",
            BootstrapStep::Tooltip => "bootstrap::tooltip",
            BootstrapStep::Router => "bootstrap::router",
            BootstrapStep::Motion => "bootstrap::motion",
            BootstrapStep::TitleReactor => "bootstrap::title_reactor",
            BootstrapStep::Mount => "bootstrap::mount",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BootstrapStep::ComponentAdapters => "Resolve view-component adapters",
            BootstrapStep::FormSetup => "Bind form components to their adapters",
            BootstrapStep::CreateInstance => "Create the application instance",
            BootstrapStep::WidgetLibrary => "Install the UI widget library",
            BootstrapStep::LoadingDirective => "Register the loading-state directives",
            BootstrapStep::I18n => "Load translations for the configured locale",
            BootstrapStep::Stores => "Initialize the namespace-scoped state stores",
            BootstrapStep::AccessDirective => "Register the access-control directive",
            BootstrapStep::Tooltip => "Load and install the tooltip subsystem (deferred)",
            BootstrapStep::Router => "Aggregate route modules and attach the navigation engine",
            BootstrapStep::Motion => "Load and install the animation plugin (deferred)",
            BootstrapStep::TitleReactor => "Subscribe the document title reactor",
            BootstrapStep::Mount => "Mount the application into its DOM anchor",
        }
    }

    pub fn kind(&self) -> StepKind {
        match self {
            BootstrapStep::ComponentAdapters
            | BootstrapStep::FormSetup
            | BootstrapStep::I18n
            | BootstrapStep::Stores => StepKind::Awaited,
            BootstrapStep::Tooltip | BootstrapStep::Motion => StepKind::Deferred,
            _ => StepKind::Immediate,
        }
    }

    /// 1-based position in the sequence
    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .map_or(0, |i| i + 1)
    }
}

impl fmt::Display for BootstrapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// What happened to one step
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Step ran to completion
    Completed,
    /// Step was spawned; see the deferred outcomes for its result
    Deferred,
    /// Step failed with error
    Failed(String),
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Completed => write!(f, "Completed"),
            StepOutcome::Deferred => write!(f, "Deferred"),
            StepOutcome::Failed(msg) => write!(f, "Failed: {}", msg),
        }
    }
}

/// Ordered record of the steps a bootstrap run executed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    records: Vec<(BootstrapStep, StepOutcome)>,
}

impl BootstrapReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: BootstrapStep, outcome: StepOutcome) {
        self.records.push((step, outcome));
    }

    pub fn records(&self) -> &[(BootstrapStep, StepOutcome)] {
        &self.records
    }

    pub fn steps(&self) -> Vec<BootstrapStep> {
        self.records.iter().map(|(s, _)| *s).collect()
    }

    pub fn outcome(&self, step: BootstrapStep) -> Option<&StepOutcome> {
        self.records.iter().find(|(s, _)| *s == step).map(|(_, o)| o)
    }
}

/// Result of a deferred load-then-install task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredOutcome {
    Installed { step: BootstrapStep, plugin: String },
    Failed { step: BootstrapStep, plugin: String, reason: String },
}

impl DeferredOutcome {
    pub fn step(&self) -> BootstrapStep {
        match self {
            DeferredOutcome::Installed { step, .. } | DeferredOutcome::Failed { step, .. } => *step,
        }
    }

    pub fn is_installed(&self) -> bool {
        matches!(self, DeferredOutcome::Installed { .. })
    }
}
