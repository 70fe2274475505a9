//! Player domain: input sampling for locomotion and look.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::player::PlayerInput;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut input: ResMut<PlayerInput>,
) {
    // Strafe axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Forward axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.run_held = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
    input.crouch_just_pressed = keyboard.just_pressed(KeyCode::ControlLeft);
    input.crouch_just_released = keyboard.just_released(KeyCode::ControlLeft);
    input.look_delta = mouse_motion.delta;
}
