use std::fmt;
use std::sync::Arc;

use crate::installer::adapter::AdapterRegistry;
use crate::installer::directive::{Directive, DirectiveRegistry};
use crate::installer::traits::Plugin;
use crate::i18n::Translator;
use crate::kernel::error::{Error, Result};
use crate::router::Router;
use crate::store::StoreManager;

/// Renders a mounted instance into its DOM anchor
pub trait MountTarget: Send + Sync {
    fn mount(&self, anchor: &str, app: &AppInstance) -> Result<()>;
}

/// Mount target that only logs; used when no renderer is attached.
#[derive(Debug, Default)]
pub struct LogMountTarget;

impl MountTarget for LogMountTarget {
    fn mount(&self, anchor: &str, app: &AppInstance) -> Result<()> {
        log::info!(
            "Mounted at '{}' with {} plugins and {} directives",
            anchor,
            app.installed_plugins().len(),
            app.directives().len()
        );
        Ok(())
    }
}

/// The application instance every bootstrap step installs into
#[derive(Default)]
pub struct AppInstance {
    adapters: AdapterRegistry,
    // globally registered component names, in registration order
    components: Vec<String>,
    // installed plugin names, in install order
    plugins: Vec<String>,
    directives: DirectiveRegistry,
    translator: Option<Arc<Translator>>,
    stores: Option<Arc<StoreManager>>,
    router: Option<Router>,
    mounted_at: Option<String>,
}

impl fmt::Debug for AppInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppInstance")
            .field("adapters", &self.adapters.count())
            .field("components", &self.components.len())
            .field("plugins", &self.plugins)
            .field("directives", &self.directives.names())
            .field("i18n", &self.translator.as_ref().map(|t| t.locale().to_string()))
            .field("stores", &self.stores.as_ref().map(|s| s.namespace().to_string()))
            .field("router", &self.router.is_some())
            .field("mounted_at", &self.mounted_at)
            .finish()
    }
}

impl AppInstance {
    /// Create the instance around the adapters resolved before it existed
    pub fn new(adapters: AdapterRegistry) -> Self {
        Self {
            adapters,
            ..Self::default()
        }
    }

    /// Install a plugin. Returns `false` (and changes nothing) if a plugin with the
    /// same name is already installed.
    pub fn use_plugin(&mut self, plugin: &dyn Plugin) -> Result<bool> {
        let name = plugin.name();
        if self.is_installed(name) {
            log::warn!("Plugin '{}' is already installed; skipping", name);
            return Ok(false);
        }
        plugin.install(self)?;
        self.plugins.push(name.to_string());
        log::info!("Installed plugin '{}'", name);
        Ok(true)
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p == name)
    }

    pub fn installed_plugins(&self) -> &[String] {
        &self.plugins
    }

    pub fn adapters(&self) -> &AdapterRegistry {
        &self.adapters
    }

    pub fn register_component(&mut self, name: &str) {
        if !self.has_component(name) {
            self.components.push(name.to_string());
        }
    }

    pub fn has_component(&self, name: &str) -> bool {
        self.components.iter().any(|c| c == name)
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn register_directive(&mut self, name: &str, directive: Arc<dyn Directive>) -> Result<()> {
        self.directives.register(name, directive)
    }

    pub fn directives(&self) -> &DirectiveRegistry {
        &self.directives
    }

    pub fn set_translator(&mut self, translator: Arc<Translator>) {
        self.translator = Some(translator);
    }

    pub fn translator(&self) -> Option<Arc<Translator>> {
        self.translator.clone()
    }

    pub fn set_stores(&mut self, stores: Arc<StoreManager>) {
        self.stores = Some(stores);
    }

    pub fn stores(&self) -> Option<&Arc<StoreManager>> {
        self.stores.as_ref()
    }

    pub(crate) fn attach_router(&mut self, router: Router) {
        self.router = Some(router);
    }

    pub fn router(&self) -> Option<&Router> {
        self.router.as_ref()
    }

    /// Mount into `anchor` through `target`. Only one mount per instance.
    pub fn mount(&mut self, anchor: &str, target: &dyn MountTarget) -> Result<()> {
        if let Some(existing) = &self.mounted_at {
            return Err(Error::AlreadyMounted {
                anchor: existing.clone(),
            });
        }
        target.mount(anchor, self)?;
        self.mounted_at = Some(anchor.to_string());
        Ok(())
    }

    pub fn mounted_at(&self) -> Option<&str> {
        self.mounted_at.as_deref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted_at.is_some()
    }
}
