//! Player domain: keyboard and mouse sampling.

use bevy::prelude::*;

use crate::player::PlayerInput;

pub(crate) fn read_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    mut input: ResMut<PlayerInput>,
) {
    input.left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    input.up = keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp);
    input.down = keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown);

    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
    input.jump_held = keyboard.pressed(KeyCode::Space);
    input.interact_held = keyboard.pressed(KeyCode::KeyE) || keyboard.pressed(KeyCode::KeyC);
    input.dash_held = keyboard.pressed(KeyCode::ShiftLeft);

    let clicked = mouse.is_some_and(|mouse| mouse.just_pressed(MouseButton::Left));
    input.attack_just_pressed = keyboard.just_pressed(KeyCode::KeyZ) || clicked;
}
