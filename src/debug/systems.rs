//! Debug domain: debug systems for hotkeys, logging, and gizmos.

use std::collections::HashMap;
use std::path::Path;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::{TUNING_PATH, load_player_tuning};
use crate::debug::state::{DebugState, stamina_color};
use crate::debug::ui::{DebugInfoOverlay, format_controller_info, spawn_debug_info_overlay};
use crate::player::{KillRequested, Player, PlayerController, PlayerState, PlayerTuning};

const STAMINA_BAR_WIDTH: f32 = 40.0;
const STAMINA_BAR_OFFSET: f32 = 48.0;

/// F1 or backtick toggles the overlay, F2 the stamina bar. Ctrl+K kills the
/// player, Ctrl+T reloads tuning from disk.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut tuning: ResMut<PlayerTuning>,
    players: Query<Entity, With<Player>>,
    mut kills: MessageWriter<KillRequested>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
    }

    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_stamina = !debug_state.show_stamina;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Ctrl+K: Kill player
    if keyboard.just_pressed(KeyCode::KeyK) {
        for player in &players {
            kills.write(KillRequested { player });
        }
        info!("[DEBUG] Killed player");
    }

    // Ctrl+T: Reload tuning
    if keyboard.just_pressed(KeyCode::KeyT) {
        match load_player_tuning(Path::new(TUNING_PATH)) {
            Ok(loaded) => {
                *tuning = loaded;
                info!("[DEBUG] Reloaded tuning from {}", TUNING_PATH);
            }
            Err(e) => warn!("[DEBUG] {}", e),
        }
    }
}

pub(crate) fn log_state_changes(
    mut last_states: Local<HashMap<Entity, PlayerState>>,
    players: Query<(Entity, &PlayerController), With<Player>>,
) {
    for (entity, controller) in &players {
        let state = controller.state();
        let previous = last_states.insert(entity, state);
        if previous != Some(state) {
            info!("[DEBUG] {:?}: {:?} -> {:?}", entity, previous, state);
        }
    }
}

pub(crate) fn draw_stamina_bar(
    mut gizmos: Gizmos,
    debug_state: Res<DebugState>,
    players: Query<(&Transform, &PlayerController), With<Player>>,
) {
    if !debug_state.show_stamina {
        return;
    }

    for (transform, controller) in &players {
        let timer = controller.wall_timer();
        if timer <= 0.0 || timer > controller.tuning().wall_stamina {
            continue;
        }

        let ratio = controller.wall_stamina_ratio();
        let left = transform.translation.truncate()
            + Vec2::new(-STAMINA_BAR_WIDTH * 0.5, STAMINA_BAR_OFFSET);
        let full = left + Vec2::X * STAMINA_BAR_WIDTH;
        let filled = left + Vec2::X * STAMINA_BAR_WIDTH * ratio;

        gizmos.line_2d(left, full, Color::srgba(0.1, 0.1, 0.1, 0.8));
        gizmos.line_2d(left, filled, stamina_color(ratio));
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    players: Query<&PlayerController, With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some(controller), Ok(mut text)) = (players.iter().next(), overlay_query.single_mut())
    {
        **text = format_controller_info(controller);
    }
}
