use crate::kernel::constants::{ConstantsRegistry, GITHUB_URL, SUBJECT_MANAGEMENT_URL};
use crate::kernel::error::Error;
use crate::router::error::RouterError;
use crate::router::modules::{self, report_generator, vben, word_generator};
use crate::router::{RouteComponent, aggregate};

#[test]
fn test_builtin_modules_are_registered_in_order() {
    let constants = ConstantsRegistry::with_defaults();
    let names: Vec<_> = modules::all(&constants)
        .unwrap()
        .iter()
        .map(|m| m.name().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            word_generator::MODULE_NAME,
            report_generator::MODULE_NAME,
            vben::MODULE_NAME
        ]
    );
}

#[test]
fn test_generator_modules_redirect_to_their_index() {
    for module in [word_generator::module(), report_generator::module()] {
        let root = &module.routes()[0];
        let child = &root.children[0];
        assert_eq!(root.redirect.as_deref(), Some(child.path.as_str()));
        assert!(root.meta.keep_alive);
        assert!(child.meta.affix_tab);
        assert!(matches!(child.component, RouteComponent::Lazy(_)));
    }
}

#[test]
fn test_embedded_links_follow_constants() {
    let constants = ConstantsRegistry::builder()
        .defaults()
        .insert(SUBJECT_MANAGEMENT_URL, "http://localhost:9000/")
        .build();
    let table = aggregate(vec![vben::module(&constants).unwrap()]).unwrap();

    let ele = table.find_by_name("VbenElementPlus").unwrap();
    assert!(matches!(ele.component, RouteComponent::Embedded));
    assert_eq!(ele.meta.link.as_deref(), Some("http://localhost:9000/"));
}

#[test]
fn test_missing_constant_fails_module_declaration() {
    let constants = ConstantsRegistry::builder().build();
    match vben::module(&constants) {
        Err(Error::Router(RouterError::MissingConstant { name })) => assert_eq!(name, GITHUB_URL),
        other => panic!("expected MissingConstant, got {other:?}"),
    }
}
