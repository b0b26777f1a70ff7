//! Tests for loading match configs from TOML files.

use std::fs;
use tempfile::TempDir;

use strictly_rounds::{ControlMode, RoundPolicy, Sign};
use strictly_rounds_cli::MatchConfig;

/// Writes a config file into the temp dir and returns its path.
fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("strictly_rounds.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_full_config_loads() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"rounds = 5
computer_move_delay_ms = 250
round_policy = "play_all_rounds"
seed = 42

[player_one]
name = "Alice"
sign = "X"
control = "human"

[player_two]
name = "Computer"
sign = "0"
control = "computer"
"#,
    );

    let config = MatchConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.rounds(), 5);
    assert_eq!(*config.computer_move_delay_ms(), 250);
    assert_eq!(*config.round_policy(), RoundPolicy::PlayAllRounds);
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(config.player_one().name(), "Alice");
    assert_eq!(*config.player_two().sign(), Sign::Zero);
    assert_eq!(*config.player_two().control(), ControlMode::Computer);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_fields_use_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "rounds = 7\n");

    let config = MatchConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.rounds(), 7);
    assert_eq!(*config.computer_move_delay_ms(), 1000);
    assert_eq!(*config.round_policy(), RoundPolicy::FinishWhenDecided);
    assert_eq!(*config.player_one().sign(), Sign::Cross);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_player_control_defaults_to_human() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"[player_two]
name = "Bob"
sign = "o"
"#,
    );

    let config = MatchConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.player_two().control(), ControlMode::Human);
    assert_eq!(*config.player_two().sign(), Sign::Zero);
}

#[test]
fn test_out_of_range_rounds_fail_validation() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "rounds = 4\n");

    let config = MatchConfig::from_file(&path).expect("Load failed");
    assert!(config.validate().is_err());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "rounds = \"many\"\n");

    let err = MatchConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_absent_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = MatchConfig::load_or_default(dir.path().join("missing.toml"))
        .expect("Fallback failed");
    assert_eq!(config, MatchConfig::default());
}
