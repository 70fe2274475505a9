//! Effects domain: plugin wiring and public exports.

mod color_cycle;
mod wind;

#[cfg(test)]
mod tests;

pub use color_cycle::{ColorCycle, ColorMode};
pub use wind::{WindSettings, WindSway};

use bevy::prelude::*;

use crate::core::GameState;
use crate::effects::color_cycle::animate_color_cycles;
use crate::effects::wind::{apply_wind_sway, setup_wind};

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), setup_wind)
            .add_systems(
                Update,
                (animate_color_cycles, apply_wind_sway).run_if(in_state(GameState::Playing)),
            );
    }
}
