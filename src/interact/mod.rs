//! Interact domain: plugin wiring and public exports.

mod components;
mod resources;
mod systems;

pub use components::{NpcTalk, Pickup};
pub use resources::InteractTarget;

use bevy::prelude::*;

use crate::core::GameState;
use crate::interact::systems::{dispatch_interaction, find_interact_target};

pub struct InteractPlugin;

impl Plugin for InteractPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractTarget>().add_systems(
            Update,
            (find_interact_target, dispatch_interaction)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}
