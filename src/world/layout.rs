//! World domain: ASCII level layouts.
//!
//! One character per 64 px cell, top row first:
//! `#` sand, `S` stone, `C` crate, `G` goal, `P` signpost, `@` spawn,
//! space or `.` empty.

use bevy::prelude::*;

use crate::player::TerrainKind;

pub const TILE_SIZE: f32 = 64.0;

/// The built-in test level.
pub const TEST_LEVEL: [&str; 8] = [
    "S                      S",
    "S                      S",
    "S        SSS           S",
    "S        S        CC   S",
    "S        S       ####  S",
    "S @  P   S  C          S",
    "S####### S CCC  ##### GS",
    "SSSSSSSSSSSSSSSSSSSSSSSS",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Terrain(TerrainKind),
    Goal,
    Signpost,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub width: usize,
    pub height: usize,
    /// Cell coordinates with y pointing up and (0, 0) at the bottom left.
    pub tiles: Vec<(UVec2, Tile)>,
    pub spawn: UVec2,
}

impl LevelLayout {
    /// Pixel center of a cell, with the whole level centered on the origin.
    pub fn cell_center(&self, cell: UVec2) -> Vec2 {
        let origin = Vec2::new(self.width as f32, self.height as f32) * TILE_SIZE * 0.5;
        cell.as_vec2() * TILE_SIZE + Vec2::splat(TILE_SIZE * 0.5) - origin
    }

    /// Pixel y of the bottom edge of the level.
    pub fn bottom(&self) -> f32 {
        -(self.height as f32) * TILE_SIZE * 0.5
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutError {
    pub row: usize,
    pub message: String,
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level row {}: {}", self.row, self.message)
    }
}

impl std::error::Error for LayoutError {}

pub fn parse_layout(rows: &[&str]) -> Result<LevelLayout, LayoutError> {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.chars().count());
    let mut tiles = Vec::new();
    let mut spawn = None;

    for (row_index, row) in rows.iter().enumerate() {
        if row.chars().count() != width {
            return Err(LayoutError {
                row: row_index,
                message: format!("expected {} cells, found {}", width, row.chars().count()),
            });
        }

        let y = (height - 1 - row_index) as u32;
        for (x, cell) in row.chars().enumerate() {
            let position = UVec2::new(x as u32, y);
            let tile = match cell {
                ' ' | '.' => continue,
                '#' => Tile::Terrain(TerrainKind::Sand),
                'S' => Tile::Terrain(TerrainKind::Stone),
                'C' => Tile::Terrain(TerrainKind::Crate),
                'G' => Tile::Goal,
                'P' => Tile::Signpost,
                '@' => {
                    if spawn.replace(position).is_some() {
                        return Err(LayoutError {
                            row: row_index,
                            message: "more than one spawn point".to_string(),
                        });
                    }
                    continue;
                }
                other => {
                    return Err(LayoutError {
                        row: row_index,
                        message: format!("unknown cell '{}'", other),
                    });
                }
            };
            tiles.push((position, tile));
        }
    }

    let spawn = spawn.ok_or_else(|| LayoutError {
        row: height,
        message: "no spawn point".to_string(),
    })?;

    Ok(LevelLayout {
        width,
        height,
        tiles,
        spawn,
    })
}
