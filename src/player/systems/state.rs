//! Player domain: the per-tick movement state machine.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::player::{
    CrouchState, GroundSensor, Locomotion, MovementState, Player, PlayerInput, PlayerTuning,
};

/// Derive the next movement state and speed for one tick.
///
/// Evaluated in strict priority order: airborne wins over crouch, crouch
/// over run, run over walk. While airborne the speed is carried unchanged
/// from the pre-jump state.
pub(crate) fn transition(
    prev_speed: f32,
    effectively_grounded: bool,
    crouching: bool,
    run_held: bool,
    forward_intent: f32,
    tuning: &PlayerTuning,
) -> (MovementState, f32) {
    if !effectively_grounded {
        return (MovementState::Jumping, prev_speed);
    }

    if crouching {
        return (
            MovementState::Crouching,
            tuning.base_speed * tuning.crouch_speed_mult,
        );
    }

    if run_held && forward_intent > 0.1 {
        (MovementState::Running, tuning.run_speed)
    } else {
        (MovementState::Walking, tuning.base_speed)
    }
}

pub(crate) fn update_movement_state(
    time: Res<Time>,
    tuning: Res<PlayerTuning>,
    input: Res<PlayerInput>,
    mut query: Query<
        (
            &GroundSensor,
            &CrouchState,
            &LinearVelocity,
            &mut MovementState,
            &mut Locomotion,
        ),
        With<Player>,
    >,
) {
    let now = time.elapsed_secs();

    for (sensor, crouch, velocity, mut state, mut locomotion) in &mut query {
        // Landing clears the launch flag before the grounded transition runs
        if sensor.just_landed {
            locomotion.was_running_at_launch = false;
        }

        let effectively_grounded =
            sensor.effectively_grounded(now, tuning.coyote_window, velocity.y);

        let (next, speed) = transition(
            locomotion.speed,
            effectively_grounded,
            crouch.is_crouching,
            input.run_held,
            input.axis.y,
            &tuning,
        );

        if next != *state {
            debug!("Movement state {:?} -> {:?}", *state, next);
        }

        *state = next;
        locomotion.speed = speed;
    }
}
