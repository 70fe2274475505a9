//! Dialogue domain: plugin wiring and public exports.

mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use events::DialogueStartEvent;
pub use resources::ActiveDialogue;

use bevy::prelude::*;

use crate::core::GameState;
use crate::dialogue::systems::{advance_dialogue, begin_dialogue};

pub struct DialoguePlugin;

impl Plugin for DialoguePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveDialogue>()
            .add_message::<DialogueStartEvent>()
            .add_systems(
                Update,
                begin_dialogue.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                advance_dialogue.run_if(in_state(GameState::Dialogue)),
            );
    }
}
