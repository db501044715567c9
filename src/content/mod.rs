//! Content domain: data-driven player tuning loaded from RON.

mod loader;

#[cfg(test)]
mod tests;

pub use loader::{
    ContentLoadError, TUNING_SCHEMA_VERSION, TuningFile, load_player_tuning, parse_player_tuning,
};

use bevy::prelude::*;
use std::path::Path;

use crate::player::PlayerTuning;

pub const TUNING_PATH: &str = "assets/data/player_tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_tuning);
    }
}

fn load_tuning(mut commands: Commands) {
    match load_player_tuning(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!("Loaded player tuning from {}", TUNING_PATH);
            commands.insert_resource(tuning);
        }
        Err(e) => {
            warn!("{}; falling back to default player tuning", e);
            commands.insert_resource(PlayerTuning::default());
        }
    }
}
