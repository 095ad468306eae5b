use serde_json::json;
use tempfile::tempdir;

use crate::i18n::error::I18nError;
use crate::i18n::source::{DirLocaleSource, EmbeddedLocales, LocaleSource};
use crate::i18n::{Translator, setup_i18n};
use crate::installer::adapter::AdapterRegistry;
use crate::kernel::error::Error;
use crate::kernel::instance::AppInstance;

#[test]
fn test_nested_keys_are_flattened() {
    let translator = Translator::from_json(
        "en-US",
        &json!({ "demos": { "vben": { "title": "Project" } }, "count": 3, "skip": null }),
    )
    .unwrap();

    assert_eq!(translator.t("demos.vben.title"), "Project");
    assert_eq!(translator.t("count"), "3");
    assert!(!translator.has("skip"));
    assert_eq!(translator.len(), 2);
}

#[test]
fn test_missing_key_falls_back_to_key() {
    let translator = Translator::from_json("zh-CN", &json!({})).unwrap();
    assert!(translator.is_empty());
    assert_eq!(translator.t("项目方案生成"), "项目方案生成");
}

#[test]
fn test_non_object_catalogue_is_rejected() {
    let err = Translator::from_json("zh-CN", &json!(["a"])).unwrap_err();
    assert!(matches!(err, Error::I18n(I18nError::InvalidMessages { .. })));
}

#[tokio::test]
async fn test_embedded_locales() {
    assert_eq!(EmbeddedLocales::locales(), vec!["zh-CN", "en-US"]);

    let messages = EmbeddedLocales.load("zh-CN").await.unwrap();
    let translator = Translator::from_json("zh-CN", &messages).unwrap();
    assert_eq!(translator.t("demos.vben.title"), "项目");

    let err = EmbeddedLocales.load("fr-FR").await.unwrap_err();
    assert!(matches!(err, Error::I18n(I18nError::LocaleNotFound { ref locale }) if locale == "fr-FR"));
}

#[tokio::test]
async fn test_dir_source_reads_locale_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("de-DE.json"), r#"{"demos": {"title": "Demos"}}"#).unwrap();
    std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    let source = DirLocaleSource::new(dir.path());

    let messages = source.load("de-DE").await.unwrap();
    assert_eq!(messages, json!({"demos": {"title": "Demos"}}));

    let missing = source.load("it-IT").await.unwrap_err();
    assert!(matches!(missing, Error::I18n(I18nError::LocaleNotFound { .. })));

    let broken = source.load("broken").await.unwrap_err();
    assert!(matches!(broken, Error::I18n(I18nError::InvalidMessages { .. })));
}

#[tokio::test]
async fn test_setup_attaches_translator() {
    let mut app = AppInstance::new(AdapterRegistry::new());
    let translator = setup_i18n(&mut app, &EmbeddedLocales, "en-US").await.unwrap();

    assert_eq!(translator.locale(), "en-US");
    let attached = app.translator().expect("translator attached");
    assert_eq!(attached.t("demos.vben.about"), "About");
}
