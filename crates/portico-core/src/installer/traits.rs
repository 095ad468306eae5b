use std::sync::Arc;

use async_trait::async_trait;

use crate::installer::adapter::AdapterRegistry;
use crate::kernel::error::Result;
use crate::kernel::instance::AppInstance;

/// A capability installed into the application instance.
///
/// Installation goes through [`AppInstance::use_plugin`], which makes repeated
/// installs of the same plugin name a no-op.
pub trait Plugin: Send + Sync {
    /// Unique plugin name
    fn name(&self) -> &'static str;

    /// Attach the capability to `app`
    fn install(&self, app: &mut AppInstance) -> Result<()>;
}

/// Asynchronously resolves a plugin that is installed after loading.
#[async_trait]
pub trait PluginLoader: Send + Sync {
    /// Name of the plugin this loader produces
    fn name(&self) -> &'static str;

    async fn load(&self) -> Result<Arc<dyn Plugin>>;
}

/// Setup that fills the adapter registry before the instance exists.
#[async_trait]
pub trait AdapterSetup: Send + Sync {
    fn name(&self) -> &'static str;

    async fn setup(&self, adapters: &mut AdapterRegistry) -> Result<()>;
}
