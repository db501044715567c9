//! World domain: camera and test level spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::avian::{GameLayer, PIXELS_PER_METER, pixels_to_meters, spawn_player};
use crate::player::{ContactTag, PlayerTuning, TerrainKind};
use crate::world::components::{ClearBanner, GoalFlag, Level, Signpost, SignpostBubble};
use crate::world::layout::{TEST_LEVEL, TILE_SIZE, Tile, parse_layout};

const SIGNPOST_TEXT: &str = "Z breaks crates.\nHold toward stone to climb.";

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn spawn_test_level(mut commands: Commands, tuning: Res<PlayerTuning>) {
    let layout = match parse_layout(&TEST_LEVEL) {
        Ok(layout) => layout,
        Err(e) => {
            error!("Test level is malformed: {}", e);
            return;
        }
    };

    let terrain_layers = CollisionLayers::new(
        GameLayer::Terrain,
        [
            GameLayer::Player,
            GameLayer::PlayerSensor,
            GameLayer::PlayerHitbox,
        ],
    );
    let trigger_layers = CollisionLayers::new(GameLayer::Trigger, [GameLayer::Player]);

    for &(cell, tile) in &layout.tiles {
        let center = layout.cell_center(cell);
        match tile {
            Tile::Terrain(kind) => spawn_block(&mut commands, center, kind, terrain_layers),
            Tile::Goal => {
                commands.spawn((
                    GoalFlag,
                    ContactTag::Goal,
                    Sprite {
                        color: Color::srgb(0.95, 0.8, 0.2),
                        custom_size: Some(Vec2::new(TILE_SIZE * 0.4, TILE_SIZE)),
                        ..default()
                    },
                    Transform::from_xyz(center.x, center.y, 0.0),
                    Collider::rectangle(TILE_SIZE, TILE_SIZE),
                    Sensor,
                    CollisionEventsEnabled,
                    trigger_layers,
                ));
            }
            Tile::Signpost => spawn_signpost(&mut commands, center, trigger_layers),
        }
    }

    let top = -layout.bottom();
    commands.spawn((
        ClearBanner,
        Text2d::new("Level cleared! Press R to restart"),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.9, 0.5)),
        Transform::from_xyz(0.0, top - TILE_SIZE, 10.0),
        Visibility::Hidden,
    ));

    let level = Level {
        spawn_point: pixels_to_meters(layout.cell_center(layout.spawn)),
        kill_height: (layout.bottom() - TILE_SIZE * 2.0) / PIXELS_PER_METER,
    };
    spawn_player(&mut commands, level.spawn_point, tuning.clone());

    info!(
        "Spawned test level: {}x{} cells, {} tiles, kill height {:.2}m",
        layout.width,
        layout.height,
        layout.tiles.len(),
        level.kill_height
    );
    commands.insert_resource(level);
}

fn block_color(kind: TerrainKind) -> Color {
    match kind {
        TerrainKind::Crate => Color::srgb(0.6, 0.42, 0.22),
        TerrainKind::Stone => Color::srgb(0.45, 0.45, 0.5),
        TerrainKind::Sand => Color::srgb(0.85, 0.75, 0.5),
    }
}

fn spawn_block(commands: &mut Commands, center: Vec2, kind: TerrainKind, layers: CollisionLayers) {
    commands.spawn((
        ContactTag::Terrain(kind),
        Sprite {
            color: block_color(kind),
            custom_size: Some(Vec2::splat(TILE_SIZE)),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(TILE_SIZE, TILE_SIZE),
        layers,
    ));
}

fn spawn_signpost(commands: &mut Commands, center: Vec2, layers: CollisionLayers) {
    let bubble = commands
        .spawn((
            SignpostBubble,
            Text2d::new(SIGNPOST_TEXT),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb(0.95, 0.95, 0.95)),
            Transform::from_xyz(center.x, center.y + TILE_SIZE * 1.2, 10.0),
            Visibility::Hidden,
        ))
        .id();

    commands.spawn((
        Signpost { bubble },
        ContactTag::Signpost,
        Sprite {
            color: Color::srgb(0.5, 0.35, 0.2),
            custom_size: Some(Vec2::new(TILE_SIZE * 0.6, TILE_SIZE * 0.7)),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0),
        Collider::rectangle(TILE_SIZE, TILE_SIZE),
        Sensor,
        CollisionEventsEnabled,
        layers,
    ));
}
