//! World domain: plugin wiring for scene assembly.

mod spawn;

pub use spawn::WorldRoot;

use bevy::prelude::*;

use crate::core::GameState;
use crate::world::spawn::spawn_garden;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_garden);
    }
}
