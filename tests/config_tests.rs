//! Tests for the JSON config file

use numpuzzle::{OutputFormat, PuzzleConfig, PuzzleError, Validation};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let config = PuzzleConfig::load(Some(&path)).unwrap();
    assert_eq!(config, PuzzleConfig::default());
    assert!(!path.exists(), "load must not create the file");
}

#[test]
fn test_save_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/deeper/config.json");

    let config = PuzzleConfig {
        validation: Validation::Strict,
        format: OutputFormat::Json,
    };
    let written = config.save(Some(&path)).unwrap();

    assert_eq!(written, path);
    assert_eq!(PuzzleConfig::load(Some(&path)).unwrap(), config);
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ validation: ").unwrap();

    let err = PuzzleConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, PuzzleError::JsonError(_)));
}

#[test]
fn test_unknown_validation_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"validation": "paranoid"}"#).unwrap();

    assert!(PuzzleConfig::load(Some(&path)).is_err());
}

#[test]
fn test_finder_uses_configured_validation() {
    let config = PuzzleConfig {
        validation: Validation::Strict,
        ..Default::default()
    };
    let err = config.finder().find(&[1, 3, 3]).unwrap_err();
    assert!(matches!(err, PuzzleError::DuplicateValue(3)));
}

#[test]
fn test_explicit_path_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.json");
    assert_eq!(PuzzleConfig::resolve_path(Some(&path)).unwrap(), path);
}
