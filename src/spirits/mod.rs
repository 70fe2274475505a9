//! Spirits domain: plugin wiring and public exports.

mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{SpawnRing, SpiritSpawner, SpiritWander};
pub use resources::SpiritRng;

use bevy::prelude::*;

use crate::core::GameState;
use crate::spirits::systems::{move_wanderers, retarget_wanderers, run_spawners, setup_spirit_rng};

pub struct SpiritsPlugin;

impl Plugin for SpiritsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_spirit_rng).add_systems(
            Update,
            (run_spawners, retarget_wanderers, move_wanderers)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}
