use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::config::{AppConfig, Preferences};
use crate::i18n::source::{DirLocaleSource, EmbeddedLocales, LocaleSource};
use crate::i18n::{Translator, setup_i18n};
use crate::installer::adapter::{AdapterRegistry, DefaultComponentAdapter, DefaultFormSetup};
use crate::installer::builtin::{MotionPlugin, StaticLoader, TooltipPlugin, WidgetLibrary};
use crate::installer::traits::{AdapterSetup, Plugin, PluginLoader};
use crate::installer::{register_access_directive, register_loading_directive};
use crate::kernel::constants::{self, ConstantsRegistry};
use crate::kernel::error::{Error, Result};
use crate::kernel::instance::{AppInstance, LogMountTarget, MountTarget};
use crate::kernel::steps::{BootstrapReport, BootstrapStep, DeferredOutcome, StepKind, StepOutcome};
use crate::router::{RouteModule, Router, aggregate};
use crate::store::backend::{FileBackend, MemoryBackend, StoreBackend};
use crate::store::{StoreManager, init_stores};
use crate::title::{LogTitleSink, TitleReactor, TitleSink};

/// External collaborators the bootstrap sequence drives.
///
/// Every field is a seam: tests and embedders swap individual entries and keep
/// the rest from [`Collaborators::defaults`].
#[derive(Clone)]
pub struct Collaborators {
    pub component_adapter: Arc<dyn AdapterSetup>,
    pub form_setup: Arc<dyn AdapterSetup>,
    pub widget_library: Arc<dyn Plugin>,
    pub locale_source: Arc<dyn LocaleSource>,
    pub store_backend: Arc<dyn StoreBackend>,
    pub tooltip_loader: Arc<dyn PluginLoader>,
    pub motion_loader: Arc<dyn PluginLoader>,
    pub title_sink: Arc<dyn TitleSink>,
    pub mount_target: Arc<dyn MountTarget>,
}

impl Collaborators {
    /// Built-in collaborators; locale and store locations come from `config`.
    pub fn defaults(config: &AppConfig) -> Self {
        let locale_source: Arc<dyn LocaleSource> = match &config.i18n.locales_dir {
            Some(dir) => Arc::new(DirLocaleSource::new(dir.clone())),
            None => Arc::new(EmbeddedLocales),
        };
        let store_backend: Arc<dyn StoreBackend> = match &config.store.persist_dir {
            Some(dir) => Arc::new(FileBackend::new(dir.clone())),
            None => Arc::new(MemoryBackend::new()),
        };
        Self {
            component_adapter: Arc::new(DefaultComponentAdapter),
            form_setup: Arc::new(DefaultFormSetup),
            widget_library: Arc::new(WidgetLibrary),
            locale_source,
            store_backend,
            tooltip_loader: Arc::new(StaticLoader::new(Arc::new(TooltipPlugin))),
            motion_loader: Arc::new(StaticLoader::new(Arc::new(MotionPlugin))),
            title_sink: Arc::new(LogTitleSink::new()),
            mount_target: Arc::new(LogMountTarget),
        }
    }
}

/// Drives the fixed startup sequence of the admin shell.
pub struct Bootstrapper {
    config: AppConfig,
    constants: ConstantsRegistry,
    preferences: Preferences,
    collaborators: Collaborators,
    // built-in modules are used when none were supplied
    modules: Option<Vec<RouteModule>>,
}

impl Bootstrapper {
    pub fn new(config: AppConfig, collaborators: Collaborators) -> Self {
        let constants = config.constants();
        let preferences = Preferences::from_config(&config);
        Self {
            config,
            constants,
            preferences,
            collaborators,
            modules: None,
        }
    }

    /// Replace the built-in route modules
    pub fn with_modules(mut self, modules: Vec<RouteModule>) -> Self {
        self.modules = Some(modules);
        self
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn constants(&self) -> &ConstantsRegistry {
        &self.constants
    }

    /// The steps a bootstrap run executes, in order
    pub fn plan() -> Vec<(BootstrapStep, StepKind)> {
        BootstrapStep::ALL.iter().map(|s| (*s, s.kind())).collect()
    }

    /// Run every step in order.
    ///
    /// A failing awaited or immediate step aborts the run with
    /// [`Error::BootstrapStepFailed`] and later steps never start. Deferred steps are
    /// spawned and their failures only surface through [`Bootstrapped::settle`].
    pub async fn bootstrap(self, namespace: &str) -> Result<Bootstrapped> {
        log::info!(
            "Bootstrapping {} v{} (namespace '{}')",
            constants::APP_NAME,
            constants::APP_VERSION,
            namespace
        );
        let Bootstrapper {
            config,
            constants,
            preferences,
            collaborators,
            modules,
        } = self;
        let mut report = BootstrapReport::new();
        let mut deferred = Vec::new();

        begin(BootstrapStep::ComponentAdapters);
        let mut adapters = AdapterRegistry::new();
        let result = collaborators.component_adapter.setup(&mut adapters).await;
        finish(&mut report, BootstrapStep::ComponentAdapters, result)?;

        begin(BootstrapStep::FormSetup);
        let result = collaborators.form_setup.setup(&mut adapters).await;
        finish(&mut report, BootstrapStep::FormSetup, result)?;

        begin(BootstrapStep::CreateInstance);
        let app = Arc::new(Mutex::new(AppInstance::new(adapters)));
        finish(&mut report, BootstrapStep::CreateInstance, Ok(()))?;

        begin(BootstrapStep::WidgetLibrary);
        let result = app
            .lock()
            .await
            .use_plugin(collaborators.widget_library.as_ref());
        finish(&mut report, BootstrapStep::WidgetLibrary, result)?;

        begin(BootstrapStep::LoadingDirective);
        let result = register_loading_directive(&mut *app.lock().await, &config.loading);
        finish(&mut report, BootstrapStep::LoadingDirective, result)?;

        begin(BootstrapStep::I18n);
        let locale = preferences.app.locale.get();
        let result = {
            let mut guard = app.lock().await;
            setup_i18n(&mut guard, collaborators.locale_source.as_ref(), &locale).await
        };
        let translator: Arc<Translator> = finish(&mut report, BootstrapStep::I18n, result)?;

        begin(BootstrapStep::Stores);
        let result = {
            let mut guard = app.lock().await;
            init_stores(&mut guard, namespace, Arc::clone(&collaborators.store_backend)).await
        };
        let stores: Arc<StoreManager> = finish(&mut report, BootstrapStep::Stores, result)?;

        begin(BootstrapStep::AccessDirective);
        let result = register_access_directive(&mut *app.lock().await);
        finish(&mut report, BootstrapStep::AccessDirective, result)?;

        begin(BootstrapStep::Tooltip);
        deferred.push(spawn_deferred(
            BootstrapStep::Tooltip,
            Arc::clone(&collaborators.tooltip_loader),
            Arc::clone(&app),
        ));
        report.record(BootstrapStep::Tooltip, StepOutcome::Deferred);

        begin(BootstrapStep::Router);
        let result = match build_router(modules, &constants) {
            Ok(router) => app.lock().await.use_plugin(&router).map(|_| router),
            Err(e) => Err(e),
        };
        let router = finish(&mut report, BootstrapStep::Router, result)?;

        begin(BootstrapStep::Motion);
        deferred.push(spawn_deferred(
            BootstrapStep::Motion,
            Arc::clone(&collaborators.motion_loader),
            Arc::clone(&app),
        ));
        report.record(BootstrapStep::Motion, StepOutcome::Deferred);

        begin(BootstrapStep::TitleReactor);
        let title_reactor = TitleReactor::subscribe(
            &router,
            &preferences,
            Arc::clone(&translator),
            Arc::clone(&collaborators.title_sink),
        );
        finish(&mut report, BootstrapStep::TitleReactor, Ok(()))?;

        begin(BootstrapStep::Mount);
        let result = app
            .lock()
            .await
            .mount(&config.app.mount_anchor, collaborators.mount_target.as_ref());
        finish(&mut report, BootstrapStep::Mount, result)?;

        log::info!("Bootstrap complete; {} deferred step(s) pending", deferred.len());
        Ok(Bootstrapped {
            app,
            router,
            preferences,
            translator,
            stores,
            report,
            title_reactor,
            deferred,
        })
    }
}

fn progress(step: BootstrapStep) -> String {
    format!(
        "[{}/{}] {}",
        step.position(),
        BootstrapStep::ALL.len(),
        step.description()
    )
}

fn begin(step: BootstrapStep) {
    log::info!("{}", progress(step));
}

fn finish<T>(report: &mut BootstrapReport, step: BootstrapStep, result: Result<T>) -> Result<T> {
    match result {
        Ok(value) => {
            log::info!("{} done", progress(step));
            report.record(step, StepOutcome::Completed);
            Ok(value)
        }
        Err(e) => {
            log::error!("Bootstrap step '{}' failed: {}", step, e);
            report.record(step, StepOutcome::Failed(e.to_string()));
            Err(Error::step_failed(step, e))
        }
    }
}

fn build_router(
    modules: Option<Vec<RouteModule>>,
    constants: &ConstantsRegistry,
) -> Result<Router> {
    let modules = match modules {
        Some(modules) => modules,
        None => crate::router::modules::all(constants)?,
    };
    Ok(Router::new(aggregate(modules)?))
}

struct DeferredTask {
    step: BootstrapStep,
    plugin: &'static str,
    handle: JoinHandle<DeferredOutcome>,
}

fn spawn_deferred(
    step: BootstrapStep,
    loader: Arc<dyn PluginLoader>,
    app: Arc<Mutex<AppInstance>>,
) -> DeferredTask {
    let plugin = loader.name();
    log::debug!("Spawning deferred load of '{}'", plugin);
    let handle = tokio::spawn(async move {
        let installed = match loader.load().await {
            Ok(loaded) => app.lock().await.use_plugin(loaded.as_ref()).map(|_| ()),
            Err(e) => Err(e),
        };
        match installed {
            Ok(()) => {
                log::info!("{} done (deferred)", progress(step));
                DeferredOutcome::Installed {
                    step,
                    plugin: plugin.to_string(),
                }
            }
            Err(e) => {
                log::warn!(
                    "Deferred step '{}' failed ({}); continuing without '{}': {}",
                    step,
                    e.class(),
                    plugin,
                    e
                );
                DeferredOutcome::Failed {
                    step,
                    plugin: plugin.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    });
    DeferredTask {
        step,
        plugin,
        handle,
    }
}

/// A mounted application and the handles that keep it live
pub struct Bootstrapped {
    app: Arc<Mutex<AppInstance>>,
    router: Router,
    preferences: Preferences,
    translator: Arc<Translator>,
    stores: Arc<StoreManager>,
    report: BootstrapReport,
    title_reactor: TitleReactor,
    deferred: Vec<DeferredTask>,
}

impl std::fmt::Debug for Bootstrapped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bootstrapped")
            .field("report", &self.report)
            .field("pending", &self.deferred.len())
            .finish()
    }
}

impl Bootstrapped {
    pub fn app(&self) -> Arc<Mutex<AppInstance>> {
        Arc::clone(&self.app)
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn translator(&self) -> &Arc<Translator> {
        &self.translator
    }

    pub fn stores(&self) -> &Arc<StoreManager> {
        &self.stores
    }

    pub fn report(&self) -> &BootstrapReport {
        &self.report
    }

    pub fn title_reactor(&self) -> &TitleReactor {
        &self.title_reactor
    }

    pub fn title_reactor_mut(&mut self) -> &mut TitleReactor {
        &mut self.title_reactor
    }

    /// Number of deferred steps not yet settled
    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    /// Wait for every deferred step and report how each one ended.
    pub async fn settle(&mut self) -> Vec<DeferredOutcome> {
        let mut outcomes = Vec::with_capacity(self.deferred.len());
        for task in self.deferred.drain(..) {
            let outcome = match task.handle.await {
                Ok(outcome) => outcome,
                Err(join_error) => {
                    log::error!("Deferred step '{}' did not complete: {}", task.step, join_error);
                    DeferredOutcome::Failed {
                        step: task.step,
                        plugin: task.plugin.to_string(),
                        reason: join_error.to_string(),
                    }
                }
            };
            outcomes.push(outcome);
        }
        outcomes
    }
}
