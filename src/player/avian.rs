//! Player domain: avian2d rigid body, fixtures, and the body adapter.
//!
//! Controller math is in meters; avian runs in pixels. Every value crossing
//! [`AvianBody`] is scaled by [`PIXELS_PER_METER`].

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{
    FixtureKind, Player, PlayerBody, PlayerController, PlayerFixture, PlayerTuning, SensorShape,
};

pub const PIXELS_PER_METER: f32 = 100.0;

/// Capsule radius and straight-segment length of the main body, in meters.
const BODY_RADIUS: f32 = 0.192;
const BODY_LENGTH: f32 = 0.24;

const FOOT_SENSOR: SensorShape = SensorShape {
    half_extents: Vec2::new(0.16, 0.04),
    offset: Vec2::new(0.0, -0.343),
};

const WALL_SENSOR_HALF_EXTENTS: Vec2 = Vec2::new(0.02, 0.192);
const WALL_SENSOR_OFFSET: Vec2 = Vec2::new(0.202, -0.096);

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Crates, stone, sand
    Terrain,
    /// The player's main body
    Player,
    /// Foot and wall sensors
    PlayerSensor,
    /// Goal and signpost zones
    Trigger,
    /// Transient attack sensor
    PlayerHitbox,
}

/// The contact fixtures currently attached to a player body.
#[derive(Component, Debug, Default)]
pub struct PlayerSensors {
    pub fixtures: Vec<Entity>,
}

pub fn meters_to_pixels(meters: Vec2) -> Vec2 {
    meters * PIXELS_PER_METER
}

pub fn pixels_to_meters(pixels: Vec2) -> Vec2 {
    pixels / PIXELS_PER_METER
}

/// Spawn a player at `position` (meters) in the `Spawn` state.
pub fn spawn_player(commands: &mut Commands, position: Vec2, tuning: PlayerTuning) -> Entity {
    let player = commands
        .spawn((
            Player,
            PlayerController::new(tuning),
            Sprite {
                color: Color::srgb(0.9, 0.85, 0.7),
                custom_size: Some(meters_to_pixels(Vec2::new(
                    BODY_RADIUS * 2.0,
                    BODY_LENGTH + BODY_RADIUS * 2.0,
                ))),
                ..default()
            },
            Transform::from_translation(meters_to_pixels(position).extend(1.0)),
            (
                RigidBody::Dynamic,
                Collider::capsule(BODY_RADIUS * PIXELS_PER_METER, BODY_LENGTH * PIXELS_PER_METER),
                LockedAxes::ROTATION_LOCKED,
                SweptCcd::default(),
                LinearVelocity::default(),
                GravityScale(1.0),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Terrain, GameLayer::Trigger]),
            ),
        ))
        .id();

    let fixtures = spawn_player_sensors(commands, player);
    commands.entity(player).insert((
        PlayerFixture {
            owner: player,
            kind: FixtureKind::Body,
        },
        PlayerSensors { fixtures },
    ));

    info!(
        "Spawned player {:?} at ({:.2}, {:.2})",
        player, position.x, position.y
    );
    player
}

/// Attach the foot and wall sensors to `player` and return their entities.
pub fn spawn_player_sensors(commands: &mut Commands, player: Entity) -> Vec<Entity> {
    let left = SensorShape {
        half_extents: WALL_SENSOR_HALF_EXTENTS,
        offset: Vec2::new(-WALL_SENSOR_OFFSET.x, WALL_SENSOR_OFFSET.y),
    };
    let right = SensorShape {
        half_extents: WALL_SENSOR_HALF_EXTENTS,
        offset: WALL_SENSOR_OFFSET,
    };

    [
        (FixtureKind::Foot, FOOT_SENSOR),
        (FixtureKind::LeftWall, left),
        (FixtureKind::RightWall, right),
    ]
    .into_iter()
    .map(|(kind, shape)| spawn_fixture(commands, player, kind, shape, GameLayer::PlayerSensor))
    .collect()
}

fn spawn_fixture(
    commands: &mut Commands,
    owner: Entity,
    kind: FixtureKind,
    shape: SensorShape,
    layer: GameLayer,
) -> Entity {
    let size = meters_to_pixels(shape.half_extents * 2.0);
    commands
        .spawn((
            Name::new(kind.sensor_name()),
            PlayerFixture { owner, kind },
            Transform::from_translation(meters_to_pixels(shape.offset).extend(0.0)),
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(layer, [GameLayer::Terrain]),
            ChildOf(owner),
        ))
        .id()
}

/// [`PlayerBody`] over one avian2d player entity for the length of a system
/// run. Teleports are deferred so `Transform` is only touched on rebuild.
pub struct AvianBody<'a, 'w, 's> {
    entity: Entity,
    position: Vec2,
    velocity: &'a mut LinearVelocity,
    gravity_scale: &'a mut GravityScale,
    sensors: &'a mut PlayerSensors,
    commands: &'a mut Commands<'w, 's>,
    teleport: Option<Vec2>,
}

impl<'a, 'w, 's> AvianBody<'a, 'w, 's> {
    pub fn new(
        entity: Entity,
        transform: &Transform,
        velocity: &'a mut LinearVelocity,
        gravity_scale: &'a mut GravityScale,
        sensors: &'a mut PlayerSensors,
        commands: &'a mut Commands<'w, 's>,
    ) -> Self {
        Self {
            entity,
            position: pixels_to_meters(transform.translation.truncate()),
            velocity,
            gravity_scale,
            sensors,
            commands,
            teleport: None,
        }
    }

    /// Pixel position requested by [`PlayerBody::rebuild`], if any.
    pub fn into_teleport(self) -> Option<Vec2> {
        self.teleport.map(meters_to_pixels)
    }
}

impl PlayerBody for AvianBody<'_, '_, '_> {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        pixels_to_meters(self.velocity.0)
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = meters_to_pixels(velocity);
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }

    fn create_sensor(&mut self, shape: SensorShape) -> Entity {
        let hitbox = spawn_fixture(
            self.commands,
            self.entity,
            FixtureKind::Attack,
            shape,
            GameLayer::PlayerHitbox,
        );
        self.commands.entity(hitbox).insert(Sprite {
            color: Color::srgba(1.0, 0.4, 0.3, 0.35),
            custom_size: Some(meters_to_pixels(shape.half_extents * 2.0)),
            ..default()
        });
        hitbox
    }

    fn destroy_sensor(&mut self, sensor: Entity) {
        self.commands.entity(sensor).try_despawn();
    }

    fn rebuild(&mut self, position: Vec2) {
        for fixture in self.sensors.fixtures.drain(..) {
            self.commands.entity(fixture).try_despawn();
        }
        self.sensors.fixtures = spawn_player_sensors(self.commands, self.entity);

        self.commands
            .entity(self.entity)
            .insert((LockedAxes::ROTATION_LOCKED, SweptCcd::default()));

        self.velocity.0 = Vec2::ZERO;
        self.position = position;
        self.teleport = Some(position);
    }
}
