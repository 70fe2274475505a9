//! Player domain: first-person controller plugin wiring and public exports.
//!
//! The per-tick data flow is one-way: input -> ground sensor -> movement
//! state machine -> crouch negotiation -> kinematics -> camera blending.
//! The systems are chained in that order; reordering them lags landing
//! detection and state-dependent presentation by a frame.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    CameraBlend, CrouchState, GameLayer, GroundSensor, Locomotion, MovementState, Player,
    PlayerCamera,
};
pub use resources::{PlayerInput, PlayerTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::bootstrap::spawn_player;
use crate::player::systems::{
    apply_camera, apply_movement, halt_player, handle_fov, handle_head_bob, handle_tilt,
    mouse_look, negotiate_crouch, read_input, update_ground_sensor, update_movement_state,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<PlayerInput>()
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(OnExit(GameState::Playing), halt_player)
            .add_systems(
                Update,
                (
                    read_input,
                    update_ground_sensor,
                    update_movement_state,
                    negotiate_crouch,
                    apply_movement,
                    mouse_look,
                    handle_tilt,
                    handle_fov,
                    handle_head_bob,
                    apply_camera,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
