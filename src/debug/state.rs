//! Debug domain: toggles for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the controller info overlay is visible
    pub show_info: bool,
    /// Whether the wall stamina bar is drawn
    pub show_stamina: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_info: false,
            show_stamina: true,
        }
    }
}

/// Stamina bar colour: green when full, red when empty.
pub fn stamina_color(ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    Color::srgb(1.0 - ratio, ratio, 0.1)
}
