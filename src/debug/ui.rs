//! Debug domain: controller info overlay.

use bevy::prelude::*;

use crate::player::PlayerController;

/// Marker for debug info overlay (state, contacts, timers)
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub(crate) fn format_controller_info(controller: &PlayerController) -> String {
    let contacts = controller.contacts();
    let velocity = controller.velocity();

    format!(
        "State: {:?} ({:.2}s)\nVel: ({:.2}, {:.2})\nGrounded: {} [{}]\nWalls: L{} R{} clinging={}\nWall timer: {:.2}\nDash: ready={} cooldown={:.2}\nJump buffer: {:.2}\nCleared: {}",
        controller.state(),
        controller.draw_state().state_time,
        velocity.x,
        velocity.y,
        controller.is_grounded(),
        contacts.ground.count(),
        contacts.left_wall.count(),
        contacts.right_wall.count(),
        controller.is_on_wall(),
        controller.wall_timer(),
        controller.can_dash(),
        controller.dash_cooldown_timer(),
        controller.jump_buffer().remaining(),
        controller.is_cleared(),
    )
}
