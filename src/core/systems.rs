//! Core domain: session flow systems and cursor handling.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use crate::core::state::GameState;

/// Leave Boot once startup loading has run. Content loading happens in
/// Startup systems, so the first Update tick is late enough.
pub(crate) fn advance_from_boot(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Playing);
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    match state.get() {
        GameState::Playing => next_state.set(GameState::Paused),
        GameState::Paused => next_state.set(GameState::Playing),
        // Esc is ignored while a dialogue owns the input
        _ => {}
    }
}

/// Freeze virtual time so gameplay systems see zero delta while paused.
pub(crate) fn pause_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

pub(crate) fn resume_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}

pub(crate) fn grab_cursor(mut cursor: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    let Ok(mut cursor) = cursor.single_mut() else {
        return;
    };
    cursor.grab_mode = CursorGrabMode::Locked;
    cursor.visible = false;
}

pub(crate) fn release_cursor(mut cursor: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    let Ok(mut cursor) = cursor.single_mut() else {
        return;
    };
    cursor.grab_mode = CursorGrabMode::None;
    cursor.visible = true;
}
