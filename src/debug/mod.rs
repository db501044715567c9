//! Debug tooling for tuning the controller by feel.
//!
//! Features:
//! - Controller info overlay (F1 or `)
//! - Wall stamina bar above the player (F2)
//! - State-change log
//! - Kill the player (Ctrl+K), reload tuning from disk (Ctrl+T)

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use state::{DebugState, stamina_color};
pub use ui::DebugInfoOverlay;

use bevy::prelude::*;

use crate::debug::systems::{
    draw_stamina_bar, handle_debug_hotkeys, log_state_changes, update_debug_info_overlay,
};
use crate::player::PlayerSet;

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, handle_debug_hotkeys.before(PlayerSet::Input))
            .add_systems(
                Update,
                (log_state_changes, draw_stamina_bar, update_debug_info_overlay)
                    .after(PlayerSet::Step),
            );
    }
}
