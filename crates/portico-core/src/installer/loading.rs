use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::installer::directive::{Directive, DirectiveBinding, ElementState};
use crate::kernel::error::Result;
use crate::kernel::instance::AppInstance;

/// Attribute names the loading directives are registered under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingDirectiveOptions {
    /// Toggles the busy overlay
    pub loading_attr: String,
    /// Toggles the inline spin indicator
    pub spinning_attr: String,
}

impl Default for LoadingDirectiveOptions {
    fn default() -> Self {
        Self {
            loading_attr: "loading".to_string(),
            spinning_attr: "spinning".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Indicator {
    Overlay,
    Spinner,
}

#[derive(Debug)]
struct LoadingDirective {
    indicator: Indicator,
}

impl Directive for LoadingDirective {
    fn evaluate(&self, binding: &DirectiveBinding) -> ElementState {
        let on = is_truthy(&binding.value);
        match self.indicator {
            // An overlaid element cannot be interacted with while busy
            Indicator::Overlay => ElementState {
                busy: on,
                enabled: !on,
                ..ElementState::default()
            },
            Indicator::Spinner => ElementState {
                spinning: on,
                ..ElementState::default()
            },
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Register the loading-state directives under the configured attribute names.
pub fn register_loading_directive(
    app: &mut AppInstance,
    options: &LoadingDirectiveOptions,
) -> Result<()> {
    app.register_directive(
        &options.loading_attr,
        Arc::new(LoadingDirective {
            indicator: Indicator::Overlay,
        }),
    )?;
    app.register_directive(
        &options.spinning_attr,
        Arc::new(LoadingDirective {
            indicator: Indicator::Spinner,
        }),
    )?;
    log::info!(
        "Loading directives registered as 'v-{}' and 'v-{}'",
        options.loading_attr,
        options.spinning_attr
    );
    Ok(())
}
