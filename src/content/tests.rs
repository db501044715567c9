//! Content domain: tests for tuning parsing and validation.

use std::path::Path;

use super::{load_player_tuning, parse_player_tuning};
use crate::player::PlayerTuning;

#[test]
fn test_shipped_tuning_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/player_tuning.ron");
    let tuning = load_player_tuning(&path).unwrap();
    assert_eq!(tuning, PlayerTuning::default());
}

#[test]
fn test_partial_tuning_falls_back_per_field() {
    let tuning = parse_player_tuning(
        "inline",
        "(schema_version: 1, tuning: (move_speed: 3.0, dash_cooldown: 1.0))",
    )
    .unwrap();

    assert_eq!(tuning.move_speed, 3.0);
    assert_eq!(tuning.dash_cooldown, 1.0);
    assert_eq!(tuning.jump_force, PlayerTuning::default().jump_force);
}

#[test]
fn test_missing_tuning_block_uses_defaults() {
    let tuning = parse_player_tuning("inline", "(schema_version: 1)").unwrap();
    assert_eq!(tuning, PlayerTuning::default());
}

#[test]
fn test_unknown_schema_version_is_rejected() {
    let err = parse_player_tuning("inline", "(schema_version: 9)").unwrap_err();
    assert_eq!(err.file, "inline");
    assert!(err.message.contains("schema_version"));
}

#[test]
fn test_negative_values_are_rejected() {
    let err = parse_player_tuning("inline", "(schema_version: 1, tuning: (dash_speed: -4.0))")
        .unwrap_err();
    assert!(err.message.contains("dash_speed"));
}

#[test]
fn test_zero_wall_stamina_is_rejected() {
    let err = parse_player_tuning("inline", "(schema_version: 1, tuning: (wall_stamina: 0.0))")
        .unwrap_err();
    assert!(err.message.contains("wall_stamina"));
}

#[test]
fn test_malformed_ron_reports_parse_error() {
    let err = parse_player_tuning("inline", "(schema_version: ").unwrap_err();
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load inline"));
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = load_player_tuning(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}
