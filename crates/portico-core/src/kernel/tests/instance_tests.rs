use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use serde_json::json;

use crate::installer::adapter::AdapterRegistry;
use crate::installer::directive::{Directive, DirectiveBinding, ElementState};
use crate::installer::traits::Plugin;
use crate::kernel::error::{Error, Result};
use crate::kernel::instance::{AppInstance, LogMountTarget};

struct CountingPlugin {
    installs: Arc<AtomicU32>,
}

impl Plugin for CountingPlugin {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn install(&self, app: &mut AppInstance) -> Result<()> {
        self.installs.fetch_add(1, Ordering::SeqCst);
        app.register_component("counting-widget");
        Ok(())
    }
}

struct Hidden;

impl Directive for Hidden {
    fn evaluate(&self, _binding: &DirectiveBinding) -> ElementState {
        ElementState {
            visible: false,
            ..ElementState::default()
        }
    }
}

#[test]
fn test_use_plugin_is_idempotent() {
    let installs = Arc::new(AtomicU32::new(0));
    let plugin = CountingPlugin {
        installs: Arc::clone(&installs),
    };
    let mut app = AppInstance::new(AdapterRegistry::new());

    assert!(app.use_plugin(&plugin).unwrap());
    assert!(!app.use_plugin(&plugin).unwrap(), "second install is a no-op");

    assert_eq!(installs.load(Ordering::SeqCst), 1);
    assert_eq!(app.installed_plugins(), ["counting".to_string()]);
    assert!(app.has_component("counting-widget"));
    assert_eq!(app.components().len(), 1);
}

#[test]
fn test_register_directive_rejects_duplicates() {
    let mut app = AppInstance::default();
    app.register_directive("hidden", Arc::new(Hidden)).unwrap();
    assert!(app.register_directive("hidden", Arc::new(Hidden)).is_err());

    let state = app
        .directives()
        .apply("hidden", &DirectiveBinding::new(json!(true)))
        .expect("directive should be registered");
    assert!(!state.visible);
}

#[test]
fn test_mount_only_once() {
    let mut app = AppInstance::default();
    assert!(!app.is_mounted());

    app.mount("#app", &LogMountTarget).unwrap();
    assert_eq!(app.mounted_at(), Some("#app"));

    match app.mount("#other", &LogMountTarget) {
        Err(Error::AlreadyMounted { anchor }) => assert_eq!(anchor, "#app"),
        other => panic!("expected AlreadyMounted, got {other:?}"),
    }
}
