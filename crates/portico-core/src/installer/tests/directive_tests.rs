use std::sync::Arc;

use serde_json::json;

use crate::installer::access::{ACCESS_DIRECTIVE, register_access_directive};
use crate::installer::directive::DirectiveBinding;
use crate::installer::error::InstallerError;
use crate::installer::loading::{LoadingDirectiveOptions, register_loading_directive};
use crate::kernel::error::Error;
use crate::kernel::instance::AppInstance;
use crate::store::{MemoryBackend, init_stores};

#[test]
fn test_loading_directives_toggle_state() {
    let mut app = AppInstance::default();
    register_loading_directive(&mut app, &LoadingDirectiveOptions::default()).unwrap();

    let busy = app
        .directives()
        .apply("loading", &DirectiveBinding::new(json!(true)))
        .unwrap();
    assert!(busy.busy);
    assert!(!busy.enabled);

    let idle = app
        .directives()
        .apply("loading", &DirectiveBinding::new(json!(false)))
        .unwrap();
    assert!(!idle.busy);
    assert!(idle.enabled);

    let spinning = app
        .directives()
        .apply("spinning", &DirectiveBinding::new(json!(1)))
        .unwrap();
    assert!(spinning.spinning);
    assert!(spinning.enabled);
}

#[test]
fn test_loading_directive_names_are_configurable() {
    let mut app = AppInstance::default();
    let options = LoadingDirectiveOptions {
        loading_attr: "busy".to_string(),
        spinning_attr: "spin".to_string(),
    };
    register_loading_directive(&mut app, &options).unwrap();
    assert_eq!(app.directives().names(), vec!["busy", "spin"]);

    // registering the same names again collides
    let err = register_loading_directive(&mut app, &options).unwrap_err();
    assert!(matches!(err, Error::Installer(InstallerError::DirectiveAlreadyRegistered { .. })));
}

#[test]
fn test_access_directive_needs_stores() {
    let mut app = AppInstance::default();
    let err = register_access_directive(&mut app).unwrap_err();
    assert!(matches!(
        err,
        Error::Installer(InstallerError::MissingCapability { ref capability, .. }) if capability == "stores"
    ));
    assert!(!app.directives().contains(ACCESS_DIRECTIVE));
}

#[tokio::test]
async fn test_access_directive_checks_codes_and_roles() {
    let mut app = AppInstance::default();
    let stores = init_stores(&mut app, "access-test", Arc::new(MemoryBackend::new()))
        .await
        .unwrap();
    register_access_directive(&mut app).unwrap();
    stores.access().set_codes(["AC_100100"]);
    stores.access().set_roles(["admin"]);

    let directives = app.directives();
    let granted = directives
        .apply(ACCESS_DIRECTIVE, &DirectiveBinding::new(json!(["AC_100100", "AC_1"])))
        .unwrap();
    assert!(granted.visible && granted.enabled);

    let denied = directives
        .apply(ACCESS_DIRECTIVE, &DirectiveBinding::new(json!("AC_999")))
        .unwrap();
    assert!(!denied.visible && !denied.enabled);

    let by_role = directives
        .apply(
            ACCESS_DIRECTIVE,
            &DirectiveBinding::new(json!("admin")).with_arg("role"),
        )
        .unwrap();
    assert!(by_role.visible);

    let empty = directives
        .apply(ACCESS_DIRECTIVE, &DirectiveBinding::new(json!([])))
        .unwrap();
    assert!(!empty.visible, "an empty requirement grants nothing");
}

#[tokio::test]
async fn test_access_directive_sees_later_grants() {
    let mut app = AppInstance::default();
    let stores = init_stores(&mut app, "access-test", Arc::new(MemoryBackend::new()))
        .await
        .unwrap();
    register_access_directive(&mut app).unwrap();
    let binding = DirectiveBinding::new(json!("AC_1"));

    assert!(!app.directives().apply(ACCESS_DIRECTIVE, &binding).unwrap().visible);
    stores.access().set_codes(["AC_1"]);
    assert!(app.directives().apply(ACCESS_DIRECTIVE, &binding).unwrap().visible);
}
