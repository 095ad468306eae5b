use crate::installer::adapter::{AdapterRegistry, DefaultComponentAdapter, DefaultFormSetup};
use crate::installer::error::InstallerError;
use crate::installer::traits::AdapterSetup;
use crate::kernel::error::Error;

#[test]
fn test_register_and_resolve() {
    let mut registry = AdapterRegistry::new();
    registry.register("Input", "a-input").unwrap();
    registry.register("Select", "a-select").unwrap();

    assert_eq!(registry.resolve("Input"), Some("a-input"));
    assert!(registry.has("Select"));
    assert!(!registry.has("Upload"));
    assert_eq!(registry.names(), vec!["Input", "Select"]);
    assert_eq!(registry.count(), 2);
}

#[test]
fn test_duplicate_adapter_is_rejected() {
    let mut registry = AdapterRegistry::new();
    registry.register("Input", "a-input").unwrap();
    let err = registry.register("Input", "other-input").unwrap_err();
    assert!(matches!(
        err,
        Error::Installer(InstallerError::AdapterAlreadyRegistered { ref primitive }) if primitive == "Input"
    ));
    assert_eq!(registry.resolve("Input"), Some("a-input"));
}

#[test]
fn test_form_binding_requires_adapter() {
    let mut registry = AdapterRegistry::new();
    let err = registry.bind_form_field("Input", "value").unwrap_err();
    assert!(matches!(err, Error::Installer(InstallerError::MissingAdapter { .. })));
    assert_eq!(registry.form_field_count(), 0);
}

#[tokio::test]
async fn test_default_setups() {
    let mut registry = AdapterRegistry::new();
    DefaultComponentAdapter.setup(&mut registry).await.unwrap();
    assert_eq!(registry.count(), 22);
    assert_eq!(registry.resolve("PrimaryButton"), Some("a-button"));

    DefaultFormSetup.setup(&mut registry).await.unwrap();
    let checkbox = registry.form_binding("Checkbox").unwrap();
    assert_eq!(checkbox.model_prop, "checked");
    assert_eq!(checkbox.component, "a-checkbox");
    assert_eq!(registry.form_binding("Upload").unwrap().model_prop, "fileList");
    assert_eq!(registry.form_binding("Input").unwrap().model_prop, "value");
    assert!(registry.form_binding("Divider").is_none(), "layout primitives are not form fields");
}

#[tokio::test]
async fn test_form_setup_before_adapters_fails() {
    let mut registry = AdapterRegistry::new();
    let err = DefaultFormSetup.setup(&mut registry).await.unwrap_err();
    assert!(matches!(err, Error::Installer(InstallerError::MissingAdapter { .. })));
}
