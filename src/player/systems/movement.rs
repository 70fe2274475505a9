//! Player domain: horizontal movement, jumping, and manual gravity.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::player::{
    CrouchState, GroundSensor, Locomotion, MovementState, Player, PlayerInput, PlayerTuning,
};

/// Small downward bias while grounded so the body stays seated on the
/// surface instead of accumulating fall speed.
const GROUND_STICK_VELOCITY: f32 = -2.0;

pub(crate) fn apply_movement(
    time: Res<Time>,
    tuning: Res<PlayerTuning>,
    input: Res<PlayerInput>,
    mut query: Query<
        (
            &Transform,
            &GroundSensor,
            &CrouchState,
            &MovementState,
            &mut Locomotion,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    for (transform, sensor, crouch, state, mut locomotion, mut velocity) in &mut query {
        // Intent in body space -> world space; forward is -Z
        let mut wish = transform.rotation * Vec3::new(input.axis.x, 0.0, -input.axis.y);
        wish.y = 0.0;
        if wish.length_squared() > 1.0 {
            wish = wish.normalize();
        }

        velocity.x = wish.x * locomotion.speed;
        velocity.z = wish.z * locomotion.speed;

        // Keep the body seated before considering a jump this tick
        if sensor.grounded && velocity.y < 0.0 {
            velocity.y = GROUND_STICK_VELOCITY;
        }

        let effectively_grounded =
            sensor.effectively_grounded(now, tuning.coyote_window, velocity.y);

        if input.jump_just_pressed && effectively_grounded && !crouch.is_crouching {
            locomotion.was_running_at_launch = *state == MovementState::Running;
            velocity.y = tuning.jump_velocity();
            debug!(
                "Jump at t={:.2}, was_running={}",
                now, locomotion.was_running_at_launch
            );
        }

        velocity.y += tuning.gravity * dt;
    }
}

/// Kill horizontal drift when control is taken away (dialogue, pause);
/// vertical velocity is kept so an in-flight fall still lands.
pub(crate) fn halt_player(mut query: Query<&mut LinearVelocity, With<Player>>) {
    for mut velocity in &mut query {
        velocity.x = 0.0;
        velocity.z = 0.0;
    }
}
