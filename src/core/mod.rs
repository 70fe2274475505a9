//! Core domain: session flow plugin wiring and public exports.

mod resources;
mod state;
mod systems;

pub use resources::WorldSeed;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{
    advance_from_boot, grab_cursor, pause_time, release_cursor, resume_time, toggle_pause,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<WorldSeed>()
            .add_systems(Update, advance_from_boot.run_if(in_state(GameState::Boot)))
            .add_systems(
                Update,
                toggle_pause.run_if(in_state(GameState::Playing).or(in_state(GameState::Paused))),
            )
            .add_systems(OnEnter(GameState::Playing), grab_cursor)
            .add_systems(OnExit(GameState::Playing), release_cursor)
            .add_systems(OnEnter(GameState::Paused), pause_time)
            .add_systems(OnExit(GameState::Paused), resume_time);
    }
}
