use crate::config::error::ConfigError;
use crate::installer::error::InstallerError;
use crate::kernel::error::{Error, ErrorClass};
use crate::kernel::steps::BootstrapStep;
use crate::router::error::RouterError;
use crate::store::error::StoreError;

#[test]
fn test_route_configuration_errors_are_classified() {
    let err: Error = RouterError::DuplicateRouteName {
        name: "Home".to_string(),
        first_module: "a".to_string(),
        second_module: "b".to_string(),
    }
    .into();
    assert_eq!(err.class(), ErrorClass::Configuration);

    let err: Error = RouterError::RouteNotFound {
        path: "/missing".to_string(),
    }
    .into();
    assert_eq!(err.class(), ErrorClass::Runtime);
}

#[test]
fn test_load_failures_are_deferred_subsystem_errors() {
    let err: Error = InstallerError::LoadFailed {
        plugin: "tooltip".to_string(),
        reason: "offline".to_string(),
    }
    .into();
    assert_eq!(err.class(), ErrorClass::DeferredSubsystem);
}

#[test]
fn test_step_failure_keeps_configuration_class() {
    let source: Error = RouterError::UnresolvedRedirect {
        route: "Home".to_string(),
        redirect: "/nowhere".to_string(),
    }
    .into();
    let err = Error::step_failed(BootstrapStep::Router, source);
    assert_eq!(err.class(), ErrorClass::Configuration);
    assert!(err.to_string().contains("bootstrap::router"));

    let source: Error = StoreError::InvalidNamespace {
        namespace: String::new(),
        reason: "empty".to_string(),
    }
    .into();
    let err = Error::step_failed(BootstrapStep::Stores, source);
    assert_eq!(err.class(), ErrorClass::Bootstrap);
}

#[test]
fn test_config_errors_are_configuration() {
    let err: Error = ConfigError::UnsupportedFormat("portico.ini".into()).into();
    assert_eq!(err.class(), ErrorClass::Configuration);
    assert_eq!(Error::from("boom").class(), ErrorClass::Runtime);
}
