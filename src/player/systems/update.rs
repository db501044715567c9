//! Player domain: per-frame controller step and lifecycle requests.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::player::avian::{AvianBody, PlayerSensors};
use crate::player::systems::PlayerHooks;
use crate::player::{
    Facing, KillRequested, Player, PlayerController, PlayerInput, PlayerTuning,
    RespawnRequested,
};

type PlayerBodyQuery = (
    Entity,
    &'static mut PlayerController,
    &'static mut Transform,
    &'static mut LinearVelocity,
    &'static mut GravityScale,
    &'static mut PlayerSensors,
);

pub(crate) fn sync_player_tuning(
    tuning: Res<PlayerTuning>,
    mut controllers: Query<&mut PlayerController>,
) {
    if !tuning.is_changed() {
        return;
    }

    for mut controller in &mut controllers {
        controller.set_tuning(tuning.clone());
    }
}

pub(crate) fn handle_player_lifecycle(
    mut commands: Commands,
    mut kills: MessageReader<KillRequested>,
    mut respawns: MessageReader<RespawnRequested>,
    mut players: Query<PlayerBodyQuery, With<Player>>,
) {
    for request in kills.read() {
        let Ok((entity, mut controller, transform, mut velocity, mut gravity, mut sensors)) =
            players.get_mut(request.player)
        else {
            warn!("Kill requested for unknown player {:?}", request.player);
            continue;
        };

        let mut body = AvianBody::new(
            entity,
            &transform,
            &mut velocity,
            &mut gravity,
            &mut sensors,
            &mut commands,
        );
        controller.kill(&mut body);
    }

    for request in respawns.read() {
        let Ok((entity, mut controller, mut transform, mut velocity, mut gravity, mut sensors)) =
            players.get_mut(request.player)
        else {
            warn!("Respawn requested for unknown player {:?}", request.player);
            continue;
        };

        let mut body = AvianBody::new(
            entity,
            &transform,
            &mut velocity,
            &mut gravity,
            &mut sensors,
            &mut commands,
        );
        controller.respawn(request.position, &mut body);

        if let Some(target) = body.into_teleport() {
            transform.translation.x = target.x;
            transform.translation.y = target.y;
        }
    }
}

pub(crate) fn update_player_controller(
    time: Res<Time>,
    input: Res<PlayerInput>,
    mut commands: Commands,
    mut hooks: PlayerHooks,
    mut players: Query<PlayerBodyQuery, With<Player>>,
) {
    let dt = time.delta_secs();

    for (entity, mut controller, mut transform, mut velocity, mut gravity, mut sensors) in
        &mut players
    {
        let mut body = AvianBody::new(
            entity,
            &transform,
            &mut velocity,
            &mut gravity,
            &mut sensors,
            &mut commands,
        );
        controller.update(dt, &input, &mut body, &mut hooks);

        if let Some(target) = body.into_teleport() {
            transform.translation.x = target.x;
            transform.translation.y = target.y;
        }
    }
}

pub(crate) fn face_player_sprite(
    mut players: Query<(&PlayerController, &mut Sprite), With<Player>>,
) {
    for (controller, mut sprite) in &mut players {
        let flip = controller.facing() == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
