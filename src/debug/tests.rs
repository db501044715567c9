//! Debug domain: tests for overlay helpers.

use bevy::prelude::*;

use super::ui::format_controller_info;
use super::{DebugState, stamina_color};
use crate::player::{PlayerController, PlayerTuning};

#[test]
fn test_debug_state_defaults() {
    let state = DebugState::default();
    assert!(!state.show_info);
    assert!(state.show_stamina);
}

#[test]
fn test_stamina_color_runs_green_to_red() {
    assert_eq!(stamina_color(1.0), Color::srgb(0.0, 1.0, 0.1));
    assert_eq!(stamina_color(0.0), Color::srgb(1.0, 0.0, 0.1));
    assert_eq!(stamina_color(3.0), stamina_color(1.0));
}

#[test]
fn test_info_overlay_lists_state() {
    let controller = PlayerController::new(PlayerTuning::default());
    let info = format_controller_info(&controller);

    assert!(info.starts_with("State: Spawn"));
    assert!(info.contains("Dash: ready=true"));
}
