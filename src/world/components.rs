//! World domain: level resource and marker components.

use bevy::prelude::*;

/// Where the player (re)spawns and how far it may fall, in meters.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Level {
    pub spawn_point: Vec2,
    pub kill_height: f32,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            spawn_point: Vec2::new(0.0, 1.0),
            kill_height: -6.0,
        }
    }
}

/// Seconds a dead player waits before respawning on its own.
pub const RESPAWN_DELAY: f32 = 1.5;

/// A signpost and the text bubble it reveals.
#[derive(Component, Debug)]
pub struct Signpost {
    pub bubble: Entity,
}

#[derive(Component, Debug)]
pub struct SignpostBubble;

#[derive(Component, Debug)]
pub struct GoalFlag;

/// Banner shown while the level is cleared.
#[derive(Component, Debug)]
pub struct ClearBanner;
