//! Player domain: per-frame intents and timed input buffers.

use bevy::prelude::*;

use crate::player::Facing;

/// Debounced intents sampled once per simulated frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub interact_held: bool,
    pub attack_just_pressed: bool,
    pub dash_held: bool,
}

impl PlayerInput {
    /// Horizontal intent; opposing directions cancel out.
    pub fn horizontal(&self) -> Option<Facing> {
        match (self.left, self.right) {
            (true, false) => Some(Facing::Left),
            (false, true) => Some(Facing::Right),
            _ => None,
        }
    }

    /// Vertical intent as -1, 0 or 1.
    pub fn vertical(&self) -> f32 {
        match (self.up, self.down) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

/// Countdown in seconds. Armed to a fixed duration, ticked every frame and
/// consumed the instant it is acted on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimedBuffer {
    remaining: f32,
}

impl TimedBuffer {
    pub fn arm(&mut self, duration: f32) {
        self.remaining = duration;
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Clears the buffer, returning whether it was still active.
    pub fn consume(&mut self) -> bool {
        let was_active = self.is_active();
        self.remaining = 0.0;
        was_active
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
