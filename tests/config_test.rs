//! Tests for loading the client configuration file.

use std::fs;
use tempfile::TempDir;

use gobblet_client::{ClientConfig, DEFAULT_BASE_URL};

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("gobblet.toml");
    fs::write(
        &path,
        "base_url = \"http://localhost:8000/api/\"\nsecret = \"s3cret\"\n",
    )
    .expect("Failed to write TOML");

    let config = ClientConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.base_url(), "http://localhost:8000/api/");
    assert_eq!(config.secret().as_deref(), Some("s3cret"));
}

#[test]
fn test_partial_config_uses_default_url() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("gobblet.toml");
    fs::write(&path, "secret = \"s3cret\"\n").expect("Failed to write TOML");

    let config = ClientConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn test_invalid_toml_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("gobblet.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Failed to write TOML");

    let err = ClientConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = ClientConfig::from_file_or_default(dir.path().join("absent.toml"))
        .expect("Defaults expected");
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert!(config.secret().is_none());
}

#[test]
fn test_missing_file_is_error_when_required() {
    let result = ClientConfig::from_file("/this/path/does/not/exist/gobblet.toml");
    assert!(result.is_err());
}

#[test]
fn test_overrides() {
    let config = ClientConfig::default()
        .with_base_url("http://example.test/")
        .with_secret("abc");
    let creds = config.credentials("bob").expect("Credentials expected");
    assert_eq!(config.base_url(), "http://example.test/");
    assert_eq!(creds.idul(), "bob");
    assert_eq!(creds.secret(), "abc");
}
