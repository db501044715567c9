//! Player domain: tuning resource for movement, combat, and timing.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// All controller constants, in meters and seconds.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub move_speed: f32,
    pub jump_force: f32,
    /// How long a held jump keeps reasserting upward velocity.
    pub max_jump_time: f32,
    pub jump_buffer_time: f32,
    pub wall_jump_buffer_time: f32,
    /// Wall-cling stamina budget.
    pub wall_stamina: f32,
    pub wall_jump_cost: f32,
    /// Climb speed as a fraction of move speed.
    pub climb_factor: f32,
    pub attack_duration: f32,
    pub hitbox_half_width: f32,
    pub hitbox_half_height: f32,
    pub hitbox_offset_x: f32,
    pub hitbox_offset_y: f32,
    pub dash_speed: f32,
    pub dash_anim_duration: f32,
    pub dash_cooldown: f32,
    pub dash_effect_duration: f32,
    pub spawn_duration: f32,
    /// Speeds at or below this count as standing still.
    pub motion_epsilon: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            jump_force: 4.5,
            max_jump_time: 0.35,
            jump_buffer_time: 0.15,
            wall_jump_buffer_time: 0.1,
            wall_stamina: 2.0,
            wall_jump_cost: 0.7,
            climb_factor: 0.5,
            attack_duration: 0.25,
            hitbox_half_width: 0.3,
            hitbox_half_height: 0.3,
            hitbox_offset_x: 0.5,
            hitbox_offset_y: -0.1,
            dash_speed: 10.0,
            dash_anim_duration: 0.25,
            dash_cooldown: 2.0,
            dash_effect_duration: 0.3,
            spawn_duration: 0.7,
            motion_epsilon: 0.01,
        }
    }
}

impl PlayerTuning {
    pub fn climb_speed(&self) -> f32 {
        self.move_speed * self.climb_factor
    }

    /// Initial sideways drift applied when the body is rebuilt on respawn.
    pub fn spawn_drift(&self) -> f32 {
        self.move_speed / 1.5
    }
}
