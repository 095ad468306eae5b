use std::fmt;
use std::sync::Arc;

use crate::installer::error::InstallerError;
use crate::kernel::error::Result;

/// Value and argument a view binds to a directive, e.g. `v-access:role="['admin']"`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectiveBinding {
    pub value: serde_json::Value,
    pub arg: Option<String>,
}

impl DirectiveBinding {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value, arg: None }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }
}

/// Presentation state a directive applies to its element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementState {
    pub visible: bool,
    pub enabled: bool,
    pub busy: bool,
    pub spinning: bool,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            visible: true,
            enabled: true,
            busy: false,
            spinning: false,
        }
    }
}

/// Behavior of a registered directive
pub trait Directive: Send + Sync {
    fn evaluate(&self, binding: &DirectiveBinding) -> ElementState;
}

/// Named directives registered on the application instance, in registration order
#[derive(Default)]
pub struct DirectiveRegistry {
    directives: Vec<(String, Arc<dyn Directive>)>,
}

impl fmt::Debug for DirectiveRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectiveRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl DirectiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, directive: Arc<dyn Directive>) -> Result<()> {
        if self.contains(name) {
            return Err(InstallerError::DirectiveAlreadyRegistered {
                name: name.to_string(),
            }
            .into());
        }
        log::debug!("Registered directive 'v-{}'", name);
        self.directives.push((name.to_string(), directive));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Directive>> {
        self.directives
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| Arc::clone(d))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.directives.iter().any(|(n, _)| n == name)
    }

    /// Evaluate the named directive, if registered
    pub fn apply(&self, name: &str, binding: &DirectiveBinding) -> Option<ElementState> {
        self.get(name).map(|d| d.evaluate(binding))
    }

    pub fn names(&self) -> Vec<&str> {
        self.directives.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}
