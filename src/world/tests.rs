//! World domain: tests for level layouts and the kill plane.

use bevy::prelude::*;

use super::{TEST_LEVEL, TILE_SIZE, Tile, below_kill_plane, parse_layout};
use crate::player::{PlayerState, TerrainKind};

// -----------------------------------------------------------------------------
// Layout tests
// -----------------------------------------------------------------------------

#[test]
fn test_built_in_level_parses() {
    let layout = parse_layout(&TEST_LEVEL).unwrap();

    assert_eq!(layout.width, 24);
    assert_eq!(layout.height, 8);
    assert_eq!(
        layout
            .tiles
            .iter()
            .filter(|(_, tile)| *tile == Tile::Goal)
            .count(),
        1
    );
    assert_eq!(
        layout
            .tiles
            .iter()
            .filter(|(_, tile)| *tile == Tile::Signpost)
            .count(),
        1
    );
    assert!(
        layout
            .tiles
            .iter()
            .any(|(_, tile)| *tile == Tile::Terrain(TerrainKind::Crate))
    );
}

#[test]
fn test_rows_map_bottom_up() {
    let layout = parse_layout(&["C @", "S#S"]).unwrap();

    assert_eq!(layout.spawn, UVec2::new(2, 1));
    assert!(
        layout
            .tiles
            .contains(&(UVec2::new(0, 1), Tile::Terrain(TerrainKind::Crate)))
    );
    assert!(
        layout
            .tiles
            .contains(&(UVec2::new(1, 0), Tile::Terrain(TerrainKind::Sand)))
    );
    assert_eq!(layout.tiles.len(), 4);
}

#[test]
fn test_cell_centers_are_centered_on_origin() {
    let layout = parse_layout(&["@.", ".."]).unwrap();

    assert_eq!(
        layout.cell_center(UVec2::new(0, 0)),
        Vec2::splat(-TILE_SIZE * 0.5)
    );
    assert_eq!(
        layout.cell_center(UVec2::new(1, 1)),
        Vec2::splat(TILE_SIZE * 0.5)
    );
    assert_eq!(layout.bottom(), -TILE_SIZE);
}

#[test]
fn test_layout_errors() {
    let ragged = parse_layout(&["@#", "#"]).unwrap_err();
    assert_eq!(ragged.row, 1);

    let unknown = parse_layout(&["@x"]).unwrap_err();
    assert!(unknown.message.contains("'x'"));

    let no_spawn = parse_layout(&["##"]).unwrap_err();
    assert!(no_spawn.message.contains("no spawn"));

    let two_spawns = parse_layout(&["@@"]).unwrap_err();
    assert!(two_spawns.to_string().contains("more than one spawn"));
}

// -----------------------------------------------------------------------------
// Kill plane tests
// -----------------------------------------------------------------------------

#[test]
fn test_kill_plane_only_catches_live_players() {
    assert!(below_kill_plane(-7.0, -6.0, PlayerState::Fall));
    assert!(!below_kill_plane(-5.0, -6.0, PlayerState::Fall));
    assert!(!below_kill_plane(-7.0, -6.0, PlayerState::Dead));
    assert!(!below_kill_plane(-7.0, -6.0, PlayerState::Spawn));
}
