//! Tests for configuration loading.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tictactoe::{DEFAULT_PROFILE_URL, GameConfig};

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.ai_delay_ms(), 300);
    assert_eq!(config.ai_delay(), Duration::from_millis(300));
    assert_eq!(*config.seed(), None);
    assert_eq!(config.profile_url(), DEFAULT_PROFILE_URL);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ai_delay_ms = 50").unwrap();
    writeln!(file, "seed = 7").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.ai_delay_ms(), 50);
    assert_eq!(*config.seed(), Some(7));
    assert_eq!(config.profile_url(), DEFAULT_PROFILE_URL);
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
}

#[test]
fn test_cli_overrides_win() {
    let config = GameConfig::default().with_overrides(
        Some(10),
        Some(99),
        Some(PathBuf::from("/tmp/ttt.log")),
    );
    assert_eq!(*config.ai_delay_ms(), 10);
    assert_eq!(*config.seed(), Some(99));
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
}

#[test]
fn test_absent_overrides_keep_file_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 3").unwrap();

    let config = GameConfig::from_file(file.path())
        .unwrap()
        .with_overrides(None, None, None);
    assert_eq!(*config.seed(), Some(3));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ai_delay_ms = \"soon\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
