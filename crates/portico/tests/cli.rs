use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn portico() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("portico")?;
    // keep the configured level authoritative
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn test_ping_command() -> Result<(), Box<dyn std::error::Error>> {
    portico()?
        .arg("--ping")
        .assert()
        .success()
        .stdout(predicate::str::contains("pong"));
    Ok(())
}

#[test]
fn test_dry_run_prints_plan_without_mounting() -> Result<(), Box<dyn std::error::Error>> {
    portico()?
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrap::component_adapters"))
        .stdout(predicate::str::contains("bootstrap::tooltip"))
        .stdout(predicate::str::contains("[deferred]"))
        .stdout(predicate::str::contains("Mounted at").not());
    Ok(())
}

#[test]
fn test_no_args_bootstraps_and_mounts() -> Result<(), Box<dyn std::error::Error>> {
    portico()?
        .assert()
        .success()
        .stdout(predicate::str::contains("Mounted at #app"))
        .stdout(predicate::str::contains("bootstrap::mount"))
        .stdout(predicate::str::contains("installed 'motion'"))
        .stdout(predicate::str::contains("Title: Vben Admin"))
        .stdout(predicate::str::contains("pong").not());
    Ok(())
}

#[test]
fn test_routes_command_lists_table() -> Result<(), Box<dyn std::error::Error>> {
    portico()?
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("WordGeneratorIndex /word-generator/index"))
        .stdout(predicate::str::contains("VbenGithub /vben-admin/github [vben]"));
    Ok(())
}

#[test]
fn test_tabs_command() -> Result<(), Box<dyn std::error::Error>> {
    portico()?
        .arg("tabs")
        .assert()
        .success()
        .stdout(predicate::str::contains("项目方案生成 -> /word-generator/index"))
        .stdout(predicate::str::contains("项目报告生成 -> /Report-generator/index"));
    Ok(())
}

#[test]
fn test_menu_command_translates_titles() -> Result<(), Box<dyn std::error::Error>> {
    portico()?
        .arg("menu")
        .assert()
        .success()
        .stdout(predicate::str::contains("项目 -> /vben-admin (dot)"))
        .stdout(predicate::str::contains("关于 -> /vben-admin/about"));
    Ok(())
}

#[test]
fn test_navigate_follows_redirect_and_sets_title() -> Result<(), Box<dyn std::error::Error>> {
    portico()?
        .args(["navigate", "/word-generator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: WordGeneratorIndex (/word-generator/index)"))
        .stdout(predicate::str::contains("redirected from /word-generator"))
        .stdout(predicate::str::contains("Title: 项目方案生成 - Vben Admin"));
    Ok(())
}

#[test]
fn test_navigate_unknown_path_fails() -> Result<(), Box<dyn std::error::Error>> {
    portico()?
        .args(["navigate", "/missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No route matches path '/missing'"));
    Ok(())
}

#[test]
fn test_config_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("portico.toml");
    std::fs::write(
        &config,
        r##"
[app]
name = "Portico Admin"
locale = "en-US"
mount_anchor = "#root"

[constants]
GITHUB_URL = "https://git.example.com"
"##,
    )?;

    portico()?
        .arg("--config")
        .arg(&config)
        .args(["navigate", "/vben-admin/github"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mounted at #root"))
        .stdout(predicate::str::contains("embedded: https://git.example.com"))
        .stdout(predicate::str::contains("Title: Github - Portico Admin"));
    Ok(())
}

#[test]
fn test_stores_persist_under_namespace() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let stores = dir.path().join("stores");
    let config = dir.path().join("portico.json");
    std::fs::write(
        &config,
        format!(r#"{{"store": {{"persist_dir": {:?}}}}}"#, stores.display().to_string()),
    )?;

    portico()?
        .arg("--config")
        .arg(&config)
        .args(["--namespace", "portico-cli-test"])
        .assert()
        .success();
    assert!(stores.join("portico-cli-test.json").exists());
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("portico.json");
    std::fs::write(&config, "{ not json")?;

    portico()?
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
    Ok(())
}
