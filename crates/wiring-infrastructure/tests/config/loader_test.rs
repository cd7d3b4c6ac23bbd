//! Configuration loader tests

use std::io::Write;
use wiring_domain::error::Error;
use wiring_infrastructure::config::{AppConfig, ConfigLoader, loader::validate_app_config};
use wiring_infrastructure::constants::{DEFAULT_MAX_RESOLUTION_DEPTH, DOCUMENT_DEFAULT_LATENCY_MS};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.resolver.max_depth, DEFAULT_MAX_RESOLUTION_DEPTH);
    assert_eq!(config.documents.latency_ms, DOCUMENT_DEFAULT_LATENCY_MS);
    assert!(config.cache.enabled);
    assert!(!config.documents.audit);
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_toml_file_overrides_defaults() {
    let file = write_config(
        r#"
[resolver]
max_depth = 12

[documents]
latency_ms = 5
audit = true

[cache]
enabled = false
"#,
    );

    let config = ConfigLoader::new()
        .with_env_prefix("WIRING_TOML_TEST")
        .with_config_path(file.path())
        .load()
        .expect("Should load config");

    assert_eq!(config.resolver.max_depth, 12);
    assert_eq!(config.documents.latency_ms, 5);
    assert!(config.documents.audit);
    assert!(!config.cache.enabled);
    // Untouched sections keep their defaults
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");

    let config = ConfigLoader::new()
        .with_env_prefix("WIRING_MISSING_TEST")
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .expect("Should load defaults");

    assert_eq!(config.resolver.max_depth, DEFAULT_MAX_RESOLUTION_DEPTH);
}

#[test]
fn test_zero_depth_is_rejected() {
    let file = write_config("[resolver]\nmax_depth = 0\n");

    let err = ConfigLoader::new()
        .with_env_prefix("WIRING_ZERO_TEST")
        .with_config_path(file.path())
        .load()
        .expect_err("max_depth = 0 is invalid");

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let mut config = AppConfig::default();
    config.logging.level = "loud".to_string();

    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_zero_ttl_is_rejected_only_when_cache_enabled() {
    let mut config = AppConfig::default();
    config.cache.ttl_secs = 0;
    assert!(validate_app_config(&config).is_err());

    config.cache.enabled = false;
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("saved.toml");
    let mut config = AppConfig::default();
    config.resolver.max_depth = 7;

    let loader = ConfigLoader::new().with_env_prefix("WIRING_SAVE_TEST");
    loader.save_to_file(&config, &path).expect("Should save");

    let reloaded = loader
        .with_config_path(&path)
        .load()
        .expect("Should reload");
    assert_eq!(reloaded.resolver.max_depth, 7);
}

/// Run with: `cargo test -p wiring-infrastructure --test integration -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let file = write_config("[resolver]\nmax_depth = 12\n");

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        std::env::set_var("WIRING__RESOLVER__MAX_DEPTH", "9");
    }

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("Should load config");

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        std::env::remove_var("WIRING__RESOLVER__MAX_DEPTH");
    }

    assert_eq!(config.resolver.max_depth, 9);
}
