// tests/config_env.rs
//
// Env-driven config loading. Serialized because the tests mutate process env.

use std::{fs, path::PathBuf};

use diabetes_care::config::app::{ENV_CONFIG_PATH, ENV_LOG_FILTER};
use diabetes_care::config::AppConfig;
use serial_test::serial;

/// Write `contents` to a unique file in std::env::temp_dir().
fn tmp_config(contents: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("assessor_cfg_{nanos}.toml"));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
#[serial]
fn reads_file_named_by_env() {
    let path = tmp_config(
        r#"
        [server]
        cors_permissive = false

        [logging]
        filter = "debug"
        "#,
    );
    std::env::set_var(ENV_CONFIG_PATH, &path);
    std::env::remove_var(ENV_LOG_FILTER);

    let cfg = AppConfig::from_env().unwrap();
    assert!(!cfg.server.cors_permissive);
    assert!(cfg.metrics.enabled);
    assert_eq!(cfg.logging.filter, "debug");

    std::env::remove_var(ENV_CONFIG_PATH);
    let _ = fs::remove_file(path);
}

#[test]
#[serial]
fn log_filter_env_overrides_file() {
    let path = tmp_config("[logging]\nfilter = \"warn\"\n");
    std::env::set_var(ENV_CONFIG_PATH, &path);
    std::env::set_var(ENV_LOG_FILTER, "assess=debug");

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.logging.filter, "assess=debug");

    std::env::remove_var(ENV_CONFIG_PATH);
    std::env::remove_var(ENV_LOG_FILTER);
    let _ = fs::remove_file(path);
}

#[test]
#[serial]
fn malformed_file_is_an_error() {
    let path = tmp_config("[metrics]\nenabled = 3\n");
    std::env::set_var(ENV_CONFIG_PATH, &path);

    assert!(AppConfig::from_env().is_err());

    std::env::remove_var(ENV_CONFIG_PATH);
    let _ = fs::remove_file(path);
}
