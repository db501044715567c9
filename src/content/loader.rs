//! Loader for the player tuning RON file at startup.

use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::player::PlayerTuning;

pub const TUNING_SCHEMA_VERSION: u32 = 1;

/// On-disk wrapper around [`PlayerTuning`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    #[serde(default)]
    pub tuning: PlayerTuning,
}

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. `file` only labels errors.
pub fn parse_player_tuning(file: &str, contents: &str) -> Result<PlayerTuning, ContentLoadError> {
    let data: TuningFile = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    if data.schema_version != TUNING_SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: file.to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                data.schema_version, TUNING_SCHEMA_VERSION
            ),
        });
    }

    validate_tuning(&data.tuning).map_err(|message| ContentLoadError {
        file: file.to_string(),
        message,
    })?;

    Ok(data.tuning)
}

pub fn load_player_tuning(path: &Path) -> Result<PlayerTuning, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_player_tuning(&file_name, &contents)
}

/// Every constant must be finite and non-negative; stamina must be positive
/// since the stamina ratio divides by it.
fn validate_tuning(tuning: &PlayerTuning) -> Result<(), String> {
    let fields = [
        ("move_speed", tuning.move_speed),
        ("jump_force", tuning.jump_force),
        ("max_jump_time", tuning.max_jump_time),
        ("jump_buffer_time", tuning.jump_buffer_time),
        ("wall_jump_buffer_time", tuning.wall_jump_buffer_time),
        ("wall_stamina", tuning.wall_stamina),
        ("wall_jump_cost", tuning.wall_jump_cost),
        ("climb_factor", tuning.climb_factor),
        ("attack_duration", tuning.attack_duration),
        ("hitbox_half_width", tuning.hitbox_half_width),
        ("hitbox_half_height", tuning.hitbox_half_height),
        ("hitbox_offset_x", tuning.hitbox_offset_x),
        ("dash_speed", tuning.dash_speed),
        ("dash_anim_duration", tuning.dash_anim_duration),
        ("dash_cooldown", tuning.dash_cooldown),
        ("dash_effect_duration", tuning.dash_effect_duration),
        ("spawn_duration", tuning.spawn_duration),
        ("motion_epsilon", tuning.motion_epsilon),
    ];

    for (name, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("{} must be a non-negative number, got {}", name, value));
        }
    }

    if !tuning.hitbox_offset_y.is_finite() {
        return Err(format!(
            "hitbox_offset_y must be finite, got {}",
            tuning.hitbox_offset_y
        ));
    }

    if tuning.wall_stamina == 0.0 {
        return Err("wall_stamina must be greater than zero".to_string());
    }

    Ok(())
}
