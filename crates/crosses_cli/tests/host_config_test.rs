//! Tests for loading the host configuration.

use crosses_cli::HostConfig;
use std::io::Write;

#[test]
fn test_defaults_without_file() {
    let config = HostConfig::load(None).unwrap();
    assert_eq!(config, HostConfig::default());
    assert_eq!(config.turn_suffix(), "'s turn");
    assert!(*config.show_hints());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "winner_suffix = \" takes it!\"").unwrap();
    writeln!(file, "show_hints = false").unwrap();

    let config = HostConfig::from_file(file.path()).unwrap();
    assert_eq!(config.winner_suffix(), " takes it!");
    assert!(!*config.show_hints());
    assert_eq!(config.draw_message(), "Draw");
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let result = HostConfig::load(Some(path.as_path()));
    let err = result.unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let result = HostConfig::from_toml("show_hints = \"yes\"");
    assert!(result.is_err());
}
