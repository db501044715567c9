//! Player domain: marker and presentation components.

use bevy::prelude::*;

use crate::player::PlayerState;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Everything a renderer needs to pick and mirror an animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub state: PlayerState,
    /// Seconds since the current state was entered.
    pub state_time: f32,
    pub facing: Facing,
    pub animation_key: &'static str,
}
