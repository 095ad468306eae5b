use std::sync::Arc;

use async_trait::async_trait;

use crate::installer::directive::{Directive, DirectiveBinding, ElementState};
use crate::installer::error::InstallerError;
use crate::installer::traits::{Plugin, PluginLoader};
use crate::kernel::error::Result;
use crate::kernel::instance::AppInstance;

const WIDGET_COMPONENTS: &[&str] = &[
    "a-button",
    "a-card",
    "a-checkbox",
    "a-col",
    "a-date-picker",
    "a-divider",
    "a-form",
    "a-form-item",
    "a-input",
    "a-input-number",
    "a-modal",
    "a-radio",
    "a-row",
    "a-select",
    "a-space",
    "a-spin",
    "a-switch",
    "a-table",
    "a-tabs",
    "a-textarea",
    "a-tooltip",
    "a-upload",
];

/// Registers the third-party widget library's components globally.
#[derive(Debug, Default)]
pub struct WidgetLibrary;

impl Plugin for WidgetLibrary {
    fn name(&self) -> &'static str {
        "widget-library"
    }

    fn install(&self, app: &mut AppInstance) -> Result<()> {
        for component in WIDGET_COMPONENTS {
            app.register_component(component);
        }
        Ok(())
    }
}

/// Directives that only decorate their element
#[derive(Debug)]
struct DecorativeDirective;

impl Directive for DecorativeDirective {
    fn evaluate(&self, _binding: &DirectiveBinding) -> ElementState {
        ElementState::default()
    }
}

/// Tooltip subsystem: provides `v-tooltip`.
#[derive(Debug, Default)]
pub struct TooltipPlugin;

impl Plugin for TooltipPlugin {
    fn name(&self) -> &'static str {
        "tooltip"
    }

    fn install(&self, app: &mut AppInstance) -> Result<()> {
        app.register_directive("tooltip", Arc::new(DecorativeDirective))
    }
}

/// Motion presets registered as directives next to the generic `v-motion`
pub const MOTION_PRESETS: &[&str] = &["motion-fade", "motion-pop", "motion-slide-bottom"];

/// Animation plugin: provides `v-motion` and its presets.
#[derive(Debug, Default)]
pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn name(&self) -> &'static str {
        "motion"
    }

    fn install(&self, app: &mut AppInstance) -> Result<()> {
        app.register_directive("motion", Arc::new(DecorativeDirective))?;
        for preset in MOTION_PRESETS {
            app.register_directive(preset, Arc::new(DecorativeDirective))?;
        }
        Ok(())
    }
}

/// Loader resolving to an already constructed plugin
pub struct StaticLoader {
    plugin: Arc<dyn Plugin>,
}

impl StaticLoader {
    pub fn new(plugin: Arc<dyn Plugin>) -> Self {
        Self { plugin }
    }
}

#[async_trait]
impl PluginLoader for StaticLoader {
    fn name(&self) -> &'static str {
        self.plugin.name()
    }

    async fn load(&self) -> Result<Arc<dyn Plugin>> {
        // Give earlier steps a chance to run before the plugin lands.
        tokio::task::yield_now().await;
        Ok(Arc::clone(&self.plugin))
    }
}

/// Loader that always rejects; stands in for an unavailable subsystem.
#[derive(Debug)]
pub struct FailingLoader {
    name: &'static str,
    reason: String,
}

impl FailingLoader {
    pub fn new(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl PluginLoader for FailingLoader {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn load(&self) -> Result<Arc<dyn Plugin>> {
        Err(InstallerError::LoadFailed {
            plugin: self.name.to_string(),
            reason: self.reason.clone(),
        }
        .into())
    }
}
