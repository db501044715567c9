//! Player domain: messages between the controller and the level.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::player::EffectRequest;

/// A visual effect the controller asked the level to play.
#[derive(Debug, Clone, Copy)]
pub struct EffectRequested {
    pub effect: EffectRequest,
}

impl Message for EffectRequested {}

/// A breakable body hit by an attack. The level decides how to remove it.
#[derive(Debug, Clone, Copy)]
pub struct DestroyRequested {
    pub target: Entity,
}

impl Message for DestroyRequested {}

#[derive(Debug, Clone, Copy)]
pub struct SignpostToggled {
    pub signpost: Entity,
    pub visible: bool,
}

impl Message for SignpostToggled {}

/// Rebuild the player at `position`, in meters.
#[derive(Debug, Clone, Copy)]
pub struct RespawnRequested {
    pub player: Entity,
    pub position: Vec2,
}

impl Message for RespawnRequested {}

#[derive(Debug, Clone, Copy)]
pub struct KillRequested {
    pub player: Entity,
}

impl Message for KillRequested {}
