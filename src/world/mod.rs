//! World domain: test level, level glue, and plugin wiring.

mod components;
mod layout;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{ClearBanner, GoalFlag, Level, RESPAWN_DELAY, Signpost, SignpostBubble};
pub use layout::{LayoutError, LevelLayout, TEST_LEVEL, TILE_SIZE, Tile, parse_layout};
pub use systems::below_kill_plane;

use bevy::prelude::*;

use crate::player::PlayerSet;
use crate::world::spawn::{spawn_camera, spawn_test_level};
use crate::world::systems::{
    check_kill_plane, despawn_destroyed_crates, log_player_effects, request_respawn,
    toggle_signpost_bubbles, update_clear_banner,
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Level>()
            .add_systems(Startup, (spawn_camera, spawn_test_level))
            .add_systems(
                Update,
                (
                    despawn_destroyed_crates,
                    toggle_signpost_bubbles,
                    log_player_effects,
                    check_kill_plane,
                    request_respawn,
                    update_clear_banner,
                )
                    .after(PlayerSet::Step),
            );
    }
}
