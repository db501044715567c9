//! Player domain: controller plugin wiring and public exports.

pub mod avian;
mod body;
mod components;
mod contacts;
mod controller;
mod events;
mod input;
mod resources;
mod state;
pub mod systems;


pub use body::{
    EffectKind, EffectRequest, FixtureKind, PlayerBody, PlayerFixture, SensorShape, WorldHooks,
};
pub use components::{DrawState, Facing, Player};
pub use contacts::{ContactCounter, ContactRef, ContactTag, ContactTracker, TerrainKind, WallSide};
pub use controller::PlayerController;
pub use events::{
    DestroyRequested, EffectRequested, KillRequested, RespawnRequested, SignpostToggled,
};
pub use input::{PlayerInput, TimedBuffer};
pub use resources::PlayerTuning;
pub use state::{Locomotion, LocomotionFacts, PlayerState, evaluate_locomotion};

use bevy::prelude::*;

use crate::player::systems::{
    dispatch_player_contacts, face_player_sprite, handle_player_lifecycle, read_player_input,
    sync_player_tuning, update_player_controller,
};

/// System ordering for the player step, so the level can hook in around it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayerSet {
    Input,
    Contacts,
    Step,
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<PlayerInput>()
            .add_message::<EffectRequested>()
            .add_message::<DestroyRequested>()
            .add_message::<SignpostToggled>()
            .add_message::<RespawnRequested>()
            .add_message::<KillRequested>()
            .configure_sets(
                Update,
                (PlayerSet::Input, PlayerSet::Contacts, PlayerSet::Step).chain(),
            )
            .add_systems(
                Update,
                (read_player_input, sync_player_tuning).in_set(PlayerSet::Input),
            )
            .add_systems(Update, dispatch_player_contacts.in_set(PlayerSet::Contacts))
            .add_systems(
                Update,
                (
                    handle_player_lifecycle,
                    update_player_controller,
                    face_player_sprite,
                )
                    .chain()
                    .in_set(PlayerSet::Step),
            );
    }
}
