use farm_advisor::config::Config;
use farm_advisor::error::AppError;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
defaults:
  location: Eldoret
  forecast_period: 14-day
  ph: 5.8
advice:
  demo_ph: 7.0
pest:
  seed: 1234
images:
  patterns: ["*.jpg", "*.webp"]
"#,
    );

    let config = Config::load(file.path()).expect("Failed to load config");
    assert_eq!(config.defaults.location, "Eldoret");
    assert_eq!(config.defaults.forecast_period, "14-day");
    assert_eq!(config.defaults.ph, 5.8);
    assert_eq!(config.advice.demo_ph, 7.0);
    assert_eq!(config.pest.seed, Some(1234));
    assert!(config.images.matches_file("leaf.webp"));
    assert!(!config.images.matches_file("leaf.png"));
}

/// The bundled config/config.yaml is what the binary reads by default
#[test]
fn test_bundled_config_matches_defaults() {
    let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config/config.yaml"))
        .expect("Bundled config failed to load");
    let defaults = Config::default();

    assert_eq!(config.defaults.location, "Nairobi");
    assert_eq!(config.defaults.location, defaults.defaults.location);
    assert_eq!(config.defaults.forecast_period, "7-day");
    assert_eq!(config.defaults.ph, 6.5);
    assert_eq!(config.advice.demo_ph, 6.5);
    assert_eq!(config.pest.seed, None);
    assert_eq!(config.images.patterns, defaults.images.patterns);
    assert_eq!(config.images.patterns.len(), 3);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config =
        Config::load_or_default(dir.path().join("config.yaml")).expect("Defaults failed");
    assert_eq!(config.defaults.location, "Nairobi");
}

#[test]
fn test_load_reports_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    match Config::load(dir.path().join("config.yaml")) {
        Err(AppError::Config(msg)) => assert!(msg.contains("Failed to read config file")),
        other => panic!("Expected Config error, got: {:?}", other),
    }
}

#[test]
fn test_env_var_expansion() {
    std::env::set_var("FARM_ADVISOR_IT_LOCATION", "Kitale");
    std::env::set_var("FARM_ADVISOR_IT_SEED", "55");
    let file = write_config(
        "defaults:\n  location: ${FARM_ADVISOR_IT_LOCATION}\npest:\n  seed: \"${FARM_ADVISOR_IT_SEED}\"\n",
    );

    let config = Config::load_or_default(file.path()).expect("Failed to load config");
    assert_eq!(config.defaults.location, "Kitale");
    assert_eq!(config.pest.seed, Some(55));
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let file = write_config("defaults: [unclosed");
    match Config::load(file.path()) {
        Err(AppError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected Config error, got: {:?}", other),
    }
}

#[test]
fn test_empty_pattern_list_rejected() {
    let file = write_config("images:\n  patterns: []\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_invalid_glob_rejected() {
    let file = write_config("images:\n  patterns: [\"[*.jpg\"]\n");
    match Config::load(file.path()) {
        Err(AppError::Config(msg)) => assert!(msg.contains("Invalid image pattern")),
        other => panic!("Expected Config error, got: {:?}", other),
    }
}
