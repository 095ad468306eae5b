use std::collections::HashMap;

use async_trait::async_trait;

use crate::installer::error::InstallerError;
use crate::installer::traits::AdapterSetup;
use crate::kernel::error::Result;

/// Model property a form field binds its value through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBinding {
    pub primitive: String,
    pub component: String,
    pub model_prop: String,
}

/// Maps the abstract UI primitives used by page definitions to concrete library components
#[derive(Debug, Clone, Default)]
pub struct AdapterRegistry {
    components: HashMap<String, String>,
    // registration order, for stable listings
    names: Vec<String>,
    form_bindings: HashMap<String, FormBinding>,
}

impl AdapterRegistry {
    /// Create a new adapter registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the concrete component for a primitive
    pub fn register(&mut self, primitive: &str, component: &str) -> Result<()> {
        if self.components.contains_key(primitive) {
            return Err(InstallerError::AdapterAlreadyRegistered {
                primitive: primitive.to_string(),
            }
            .into());
        }
        self.components
            .insert(primitive.to_string(), component.to_string());
        self.names.push(primitive.to_string());
        Ok(())
    }

    /// Concrete component for a primitive
    pub fn resolve(&self, primitive: &str) -> Option<&str> {
        self.components.get(primitive).map(String::as_str)
    }

    pub fn has(&self, primitive: &str) -> bool {
        self.components.contains_key(primitive)
    }

    /// Bind a primitive as a form field. The primitive must already have an adapter.
    pub fn bind_form_field(&mut self, primitive: &str, model_prop: &str) -> Result<()> {
        let component = self
            .resolve(primitive)
            .ok_or_else(|| InstallerError::MissingAdapter {
                primitive: primitive.to_string(),
            })?
            .to_string();
        self.form_bindings.insert(
            primitive.to_string(),
            FormBinding {
                primitive: primitive.to_string(),
                component,
                model_prop: model_prop.to_string(),
            },
        );
        Ok(())
    }

    pub fn form_binding(&self, primitive: &str) -> Option<&FormBinding> {
        self.form_bindings.get(primitive)
    }

    pub fn form_field_count(&self) -> usize {
        self.form_bindings.len()
    }

    /// Get the number of registered adapters
    pub fn count(&self) -> usize {
        self.components.len()
    }

    /// Primitive names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }
}

const COMPONENT_ADAPTERS: &[(&str, &str)] = &[
    ("AutoComplete", "a-auto-complete"),
    ("Checkbox", "a-checkbox"),
    ("CheckboxGroup", "a-checkbox-group"),
    ("DatePicker", "a-date-picker"),
    ("DefaultButton", "a-button"),
    ("Divider", "a-divider"),
    ("Input", "a-input"),
    ("InputNumber", "a-input-number"),
    ("InputPassword", "a-input-password"),
    ("Mentions", "a-mentions"),
    ("PrimaryButton", "a-button"),
    ("Radio", "a-radio"),
    ("RadioGroup", "a-radio-group"),
    ("RangePicker", "a-range-picker"),
    ("Rate", "a-rate"),
    ("Select", "a-select"),
    ("Space", "a-space"),
    ("Switch", "a-switch"),
    ("Textarea", "a-textarea"),
    ("TimePicker", "a-time-picker"),
    ("TreeSelect", "a-tree-select"),
    ("Upload", "a-upload"),
];

// Fields whose value is not bound through `value`
const MODEL_PROP_OVERRIDES: &[(&str, &str)] = &[
    ("Checkbox", "checked"),
    ("Radio", "checked"),
    ("Switch", "checked"),
    ("Upload", "fileList"),
];

const FORM_FIELDS: &[&str] = &[
    "AutoComplete",
    "Checkbox",
    "CheckboxGroup",
    "DatePicker",
    "Input",
    "InputNumber",
    "InputPassword",
    "Mentions",
    "Radio",
    "RadioGroup",
    "RangePicker",
    "Rate",
    "Select",
    "Switch",
    "Textarea",
    "TimePicker",
    "TreeSelect",
    "Upload",
];

/// Registers the widget-library component for every built-in primitive.
#[derive(Debug, Default)]
pub struct DefaultComponentAdapter;

#[async_trait]
impl AdapterSetup for DefaultComponentAdapter {
    fn name(&self) -> &'static str {
        "component-adapter"
    }

    async fn setup(&self, adapters: &mut AdapterRegistry) -> Result<()> {
        for (primitive, component) in COMPONENT_ADAPTERS {
            adapters.register(primitive, component)?;
        }
        log::debug!("Registered {} component adapters", adapters.count());
        Ok(())
    }
}

/// Binds the built-in form fields. Needs the component adapters in place.
#[derive(Debug, Default)]
pub struct DefaultFormSetup;

#[async_trait]
impl AdapterSetup for DefaultFormSetup {
    fn name(&self) -> &'static str {
        "form-setup"
    }

    async fn setup(&self, adapters: &mut AdapterRegistry) -> Result<()> {
        for primitive in FORM_FIELDS {
            let model_prop = MODEL_PROP_OVERRIDES
                .iter()
                .find(|(p, _)| p == primitive)
                .map(|(_, prop)| *prop)
                .unwrap_or("value");
            adapters.bind_form_field(primitive, model_prop)?;
        }
        log::debug!("Bound {} form fields", adapters.form_field_count());
        Ok(())
    }
}
