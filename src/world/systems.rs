//! World domain: systems answering controller requests and player lifecycle.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::player::avian::pixels_to_meters;
use crate::player::{
    ContactTag, DestroyRequested, EffectRequested, KillRequested, Player, PlayerController,
    PlayerState, RespawnRequested, SignpostToggled,
};
use crate::world::components::{ClearBanner, Level, RESPAWN_DELAY, Signpost, SignpostBubble};

pub(crate) fn despawn_destroyed_crates(
    mut commands: Commands,
    mut requests: MessageReader<DestroyRequested>,
    tags: Query<&ContactTag>,
) {
    for request in requests.read() {
        let Ok(ContactTag::Terrain(kind)) = tags.get(request.target) else {
            continue;
        };

        if kind.is_breakable() {
            debug!("Destroying {:?} {:?}", kind, request.target);
            commands.entity(request.target).try_despawn();
        }
    }
}

pub(crate) fn toggle_signpost_bubbles(
    mut toggles: MessageReader<SignpostToggled>,
    signposts: Query<&Signpost>,
    mut bubbles: Query<&mut Visibility, With<SignpostBubble>>,
) {
    for toggle in toggles.read() {
        let Ok(signpost) = signposts.get(toggle.signpost) else {
            continue;
        };
        let Ok(mut visibility) = bubbles.get_mut(signpost.bubble) else {
            continue;
        };

        *visibility = if toggle.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

pub(crate) fn log_player_effects(mut effects: MessageReader<EffectRequested>) {
    for EffectRequested { effect } in effects.read() {
        debug!(
            "Effect {:?} at ({:.2}, {:.2}) for {:.2}s facing {:?}",
            effect.kind, effect.position.x, effect.position.y, effect.duration, effect.facing
        );
    }
}

pub(crate) fn check_kill_plane(
    level: Res<Level>,
    players: Query<(Entity, &Transform, &PlayerController), With<Player>>,
    mut kills: MessageWriter<KillRequested>,
) {
    for (entity, transform, controller) in &players {
        let height = pixels_to_meters(transform.translation.truncate()).y;
        if below_kill_plane(height, level.kill_height, controller.state()) {
            info!("Player fell below {:.2}m", level.kill_height);
            kills.write(KillRequested { player: entity });
        }
    }
}

pub(crate) fn request_respawn(
    keyboard: Res<ButtonInput<KeyCode>>,
    level: Res<Level>,
    mut players: Query<(Entity, &mut PlayerController), With<Player>>,
    mut respawns: MessageWriter<RespawnRequested>,
) {
    let restart = keyboard.just_pressed(KeyCode::KeyR);

    for (entity, mut controller) in &mut players {
        let draw = controller.draw_state();
        let timed_out = draw.state == PlayerState::Dead && draw.state_time > RESPAWN_DELAY;
        if !(restart || timed_out) {
            continue;
        }

        if restart {
            controller.set_is_cleared(false);
        }
        respawns.write(RespawnRequested {
            player: entity,
            position: level.spawn_point,
        });
    }
}

pub(crate) fn update_clear_banner(
    players: Query<&PlayerController, With<Player>>,
    mut banners: Query<&mut Visibility, With<ClearBanner>>,
) {
    let cleared = players
        .iter()
        .any(|controller| controller.state() == PlayerState::Cleared);

    for mut visibility in &mut banners {
        let wanted = if cleared {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        if *visibility != wanted {
            *visibility = wanted;
        }
    }
}

/// Spawning, dead, and cleared players are left alone.
pub fn below_kill_plane(height: f32, kill_height: f32, state: PlayerState) -> bool {
    height < kill_height && !state.blocks_input()
}
