use std::path::{Path, PathBuf};

use tempfile::tempdir;

use crate::config::{AppConfig, ConfigError, ConfigFormat, Preferences, default_namespace};
use crate::kernel::constants::{APP_VERSION, SUBJECT_MANAGEMENT_URL};
use crate::kernel::error::Error;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.app.name, "Vben Admin");
    assert!(config.app.dynamic_title);
    assert_eq!(config.app.locale, "zh-CN");
    assert_eq!(config.app.mount_anchor, "#app");
    assert_eq!(config.loading.loading_attr, "loading");
    assert_eq!(config.logging.level, "info");
    assert!(config.i18n.locales_dir.is_none());
    assert!(config.store.persist_dir.is_none());
}

#[test]
fn test_format_from_path() {
    assert_eq!(ConfigFormat::from_path(Path::new("a.json")), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::from_path(Path::new("a.YML")), Some(ConfigFormat::Yaml));
    assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), Some(ConfigFormat::Toml));
    assert_eq!(ConfigFormat::from_path(Path::new("a.ini")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("noext")), None);
}

#[test]
fn test_parse_json_with_partial_sections() {
    let config = AppConfig::parse(
        r#"{ "app": { "name": "Portico", "dynamic_title": false }, "constants": { "GITHUB_URL": "https://example.com" } }"#,
        ConfigFormat::Json,
        Path::new("portico.json"),
    )
    .unwrap();

    assert_eq!(config.app.name, "Portico");
    assert!(!config.app.dynamic_title);
    assert_eq!(config.app.locale, "zh-CN", "unset fields keep their defaults");
    assert_eq!(config.constants().get("GITHUB_URL"), Some("https://example.com"));
    assert!(config.constants().get(SUBJECT_MANAGEMENT_URL).is_some());
}

#[test]
fn test_parse_toml() {
    let content = r#"
[app]
locale = "en-US"
namespace = "portico-staging"

[loading]
loading_attr = "busy"

[logging]
level = "debug"
json = true

[store]
persist_dir = "/var/lib/portico"
"#;
    let config = AppConfig::parse(content, ConfigFormat::Toml, Path::new("portico.toml")).unwrap();
    assert_eq!(config.app.locale, "en-US");
    assert_eq!(config.loading.loading_attr, "busy");
    assert_eq!(config.loading.spinning_attr, "spinning");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
    assert_eq!(config.store.persist_dir, Some(PathBuf::from("/var/lib/portico")));
    assert_eq!(config.namespace("prod"), "portico-staging");
}

#[test]
fn test_parse_yaml_and_empty_yaml() {
    let config = AppConfig::parse(
        "app:\n  mount_anchor: '#root'\ni18n:\n  locales_dir: ./locales\n",
        ConfigFormat::Yaml,
        Path::new("portico.yaml"),
    )
    .unwrap();
    assert_eq!(config.app.mount_anchor, "#root");
    assert_eq!(config.i18n.locales_dir, Some(PathBuf::from("./locales")));

    let empty = AppConfig::parse("  \n", ConfigFormat::Yaml, Path::new("empty.yaml")).unwrap();
    assert_eq!(empty, AppConfig::default());
}

#[test]
fn test_parse_error_names_the_file() {
    let err = AppConfig::parse("{ broken", ConfigFormat::Json, Path::new("bad.json")).unwrap_err();
    match err {
        Error::Config(ConfigError::Parse { path, format, .. }) => {
            assert_eq!(path, PathBuf::from("bad.json"));
            assert_eq!(format, "json");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_default_namespace() {
    let expected = format!("portico-web-antd-{}-dev", APP_VERSION);
    assert_eq!(default_namespace("dev"), expected);
    assert_eq!(AppConfig::default().namespace("dev"), expected);
}

#[tokio::test]
async fn test_load_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("portico.json");
    std::fs::write(&path, r#"{"app": {"name": "From File"}}"#).unwrap();

    let config = AppConfig::load(&path).await.unwrap();
    assert_eq!(config.app.name, "From File");

    let missing = AppConfig::load(&dir.path().join("missing.toml")).await.unwrap_err();
    assert!(matches!(missing, Error::Config(ConfigError::Io { .. })));

    let unsupported = AppConfig::load(&dir.path().join("portico.ini")).await.unwrap_err();
    assert!(matches!(unsupported, Error::Config(ConfigError::UnsupportedFormat(_))));
}

#[test]
fn test_preferences_follow_config() {
    let mut config = AppConfig::default();
    config.app.name = "Portico".to_string();
    config.app.locale = "en-US".to_string();
    let prefs = Preferences::from_config(&config);

    assert_eq!(prefs.app.name.get(), "Portico");
    assert_eq!(prefs.app.locale.get(), "en-US");

    // clones share signals
    let shared = prefs.clone();
    shared.app.dynamic_title.set(false);
    assert!(!prefs.app.dynamic_title.get());
}
