//! Audio domain: plugin wiring and public exports.

mod footsteps;
mod settings;
mod ui;

#[cfg(test)]
mod tests;

pub use footsteps::{FootstepClips, FootstepEvent, FootstepState};
pub use settings::{AudioSettings, VOLUME_STEP};
pub use ui::UiClips;

use bevy::prelude::*;

use crate::core::GameState;
use crate::audio::footsteps::{emit_footsteps, load_footstep_clips, play_footsteps};
use crate::audio::settings::apply_master_volume;
use crate::audio::ui::{load_ui_clips, play_inventory_sounds};

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AudioSettings>()
            .init_resource::<FootstepState>()
            .add_message::<FootstepEvent>()
            .add_systems(Startup, (load_footstep_clips, load_ui_clips))
            .add_systems(Update, (apply_master_volume, play_inventory_sounds))
            .add_systems(
                Update,
                (emit_footsteps, play_footsteps)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
