//! Player domain: the seams between the controller and its collaborators.
//!
//! The controller never owns a physics world. It drives one rigid body through
//! [`PlayerBody`] and reports outward through [`WorldHooks`], so the same logic
//! runs against avian2d in the game and against plain structs in tests.

use bevy::prelude::*;

use crate::player::Facing;

/// The player's rigid body as seen by the controller. Units are meters.
pub trait PlayerBody {
    fn position(&self) -> Vec2;

    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    fn set_gravity_scale(&mut self, scale: f32);

    /// Attach a transient sensor fixture and return its handle.
    fn create_sensor(&mut self, shape: SensorShape) -> Entity;

    /// Remove a sensor created by [`PlayerBody::create_sensor`].
    fn destroy_sensor(&mut self, sensor: Entity);

    /// Reconstruct the body at `position`: fresh contact sensors, rotation
    /// locked, continuous collision on, velocity cleared.
    fn rebuild(&mut self, position: Vec2);
}

/// Calls the controller makes outward. It requests, the world decides.
pub trait WorldHooks {
    fn add_effect(&mut self, effect: EffectRequest);

    fn add_destroy_box(&mut self, target: Entity);

    fn set_message_visible(&mut self, signpost: Entity, visible: bool);
}

/// Axis-aligned box relative to the body center, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorShape {
    pub half_extents: Vec2,
    pub offset: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Dash,
    Attack,
}

/// Visual cue the controller asks the world to play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectRequest {
    pub kind: EffectKind,
    pub position: Vec2,
    pub duration: f32,
    pub facing: Facing,
}

/// Names of the fixtures that make up the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    Body,
    Foot,
    LeftWall,
    RightWall,
    Attack,
}

impl FixtureKind {
    pub fn sensor_name(self) -> &'static str {
        match self {
            FixtureKind::Body => "playerBody",
            FixtureKind::Foot => "footSensor",
            FixtureKind::LeftWall => "leftSensor",
            FixtureKind::RightWall => "rightSensor",
            FixtureKind::Attack => "attackSensor",
        }
    }
}

/// Tag on every collider belonging to a player.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerFixture {
    pub owner: Entity,
    pub kind: FixtureKind,
}
