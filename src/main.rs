mod content;
#[cfg(feature = "dev-tools")]
mod debug;
mod player;
mod world;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::avian::PIXELS_PER_METER;

/// Earth gravity in meters per second squared.
const GRAVITY: f32 = 9.8;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Ledge Runner".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default().with_length_unit(PIXELS_PER_METER))
    .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY * PIXELS_PER_METER))
    .insert_resource(ClearColor(Color::srgb(0.12, 0.14, 0.2)))
    .add_plugins((
        content::ContentPlugin,
        player::PlayerPlugin,
        world::WorldPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
