use std::sync::Arc;

use serde_json::Value;

use crate::installer::directive::{Directive, DirectiveBinding, ElementState};
use crate::installer::error::InstallerError;
use crate::kernel::error::Result;
use crate::kernel::instance::AppInstance;
use crate::store::access::AccessStore;

/// Name the access-control directive is registered under
pub const ACCESS_DIRECTIVE: &str = "access";

/// Shows and enables an element only when the user holds one of the bound codes
/// (or roles, with the `role` argument).
#[derive(Debug)]
struct AccessDirective {
    access: AccessStore,
}

impl Directive for AccessDirective {
    fn evaluate(&self, binding: &DirectiveBinding) -> ElementState {
        let required = required_values(&binding.value);
        let allowed = match binding.arg.as_deref() {
            Some("role") => self.access.has_any_role(&required),
            _ => self.access.has_any_code(&required),
        };
        ElementState {
            visible: allowed,
            enabled: allowed,
            ..ElementState::default()
        }
    }
}

fn required_values(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Register the access-control directive. The state stores must be initialized first.
pub fn register_access_directive(app: &mut AppInstance) -> Result<()> {
    let access = app
        .stores()
        .ok_or_else(|| InstallerError::MissingCapability {
            capability: "stores".to_string(),
            required_by: "access directive".to_string(),
        })?
        .access()
        .clone();
    app.register_directive(ACCESS_DIRECTIVE, Arc::new(AccessDirective { access }))?;
    log::info!("Access directive registered as 'v-{}'", ACCESS_DIRECTIVE);
    Ok(())
}
