//! Player domain: camera presentation blending (look, tilt, fov, head bob).
//!
//! Everything here is derived from the movement state, ground sensor, and
//! input intent each tick; the only persisted values are smoothed history.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::player::{
    CameraBlend, CrouchState, GroundSensor, Locomotion, MovementState, Player, PlayerCamera,
    PlayerInput, PlayerTuning,
};

/// Exponential decay toward a target: ~63% convergence per 1/rate seconds.
/// Idempotent once current == target.
pub(crate) fn expo_smooth(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-rate * dt).exp())
}

/// Instantaneous tilt target in degrees. Zero when airborne or when the
/// lateral intent is negligible.
pub(crate) fn tilt_target(
    axis: Vec2,
    state: MovementState,
    crouching: bool,
    effectively_grounded: bool,
    tuning: &PlayerTuning,
) -> f32 {
    if !effectively_grounded || axis.x.abs() < 0.1 {
        return 0.0;
    }

    let mut target = -axis.x * tuning.tilt_amount;
    if state == MovementState::Running {
        target *= tuning.run_tilt_mult;
    }
    if crouching {
        target *= tuning.crouch_tilt_mult;
    }
    target
}

/// Instantaneous field-of-view target in degrees. While airborne the
/// ran-at-launch flag stands in for the (unsampled) run intent.
pub(crate) fn fov_target(
    effectively_grounded: bool,
    state: MovementState,
    was_running_at_launch: bool,
    tuning: &PlayerTuning,
) -> f32 {
    let running_fov = if effectively_grounded {
        state == MovementState::Running
    } else {
        was_running_at_launch
    };

    if running_fov {
        tuning.run_fov
    } else {
        tuning.normal_fov
    }
}

/// Bob phase rate (rad/s) and amplitude for the current state.
pub(crate) fn bob_params(
    state: MovementState,
    crouching: bool,
    tuning: &PlayerTuning,
) -> (f32, f32) {
    let running = state == MovementState::Running;
    let rate_mult = if crouching {
        tuning.crouch_bob_rate_mult
    } else {
        1.0
    };
    let amount_mult = if crouching {
        tuning.crouch_bob_amount_mult
    } else {
        1.0
    };

    let rate = if running {
        tuning.run_bob_rate
    } else {
        tuning.walk_bob_rate
    };
    let amount = if running {
        tuning.run_bob_amount
    } else {
        tuning.walk_bob_amount
    };

    (rate * rate_mult, amount * amount_mult)
}

pub(crate) fn mouse_look(
    tuning: Res<PlayerTuning>,
    input: Res<PlayerInput>,
    mut query: Query<(&mut Transform, &mut CameraBlend), With<Player>>,
) {
    for (mut transform, mut blend) in &mut query {
        // Yaw on the body, pitch on the camera
        transform.rotate_y((-input.look_delta.x * tuning.mouse_sensitivity).to_radians());

        blend.pitch = (blend.pitch - input.look_delta.y * tuning.mouse_sensitivity)
            .clamp(tuning.max_look_down, tuning.max_look_up);
    }
}

pub(crate) fn handle_tilt(
    time: Res<Time>,
    tuning: Res<PlayerTuning>,
    input: Res<PlayerInput>,
    mut query: Query<
        (
            &GroundSensor,
            &CrouchState,
            &LinearVelocity,
            &MovementState,
            &mut CameraBlend,
        ),
        With<Player>,
    >,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    for (sensor, crouch, velocity, state, mut blend) in &mut query {
        let effectively_grounded =
            sensor.effectively_grounded(now, tuning.coyote_window, velocity.y);
        let target = tilt_target(
            input.axis,
            *state,
            crouch.is_crouching,
            effectively_grounded,
            &tuning,
        );
        blend.tilt = expo_smooth(blend.tilt, target, tuning.tilt_rate, dt);
    }
}

pub(crate) fn handle_fov(
    time: Res<Time>,
    tuning: Res<PlayerTuning>,
    mut query: Query<
        (
            &GroundSensor,
            &LinearVelocity,
            &MovementState,
            &Locomotion,
            &mut CameraBlend,
        ),
        With<Player>,
    >,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    for (sensor, velocity, state, locomotion, mut blend) in &mut query {
        let effectively_grounded =
            sensor.effectively_grounded(now, tuning.coyote_window, velocity.y);
        let target = fov_target(
            effectively_grounded,
            *state,
            locomotion.was_running_at_launch,
            &tuning,
        );

        // Slower convergence in the air
        let rate = if effectively_grounded {
            tuning.fov_rate
        } else {
            tuning.fov_rate * 0.5
        };
        blend.fov = expo_smooth(blend.fov, target, rate, dt);
    }
}

pub(crate) fn handle_head_bob(
    time: Res<Time>,
    tuning: Res<PlayerTuning>,
    input: Res<PlayerInput>,
    mut query: Query<
        (
            &GroundSensor,
            &CrouchState,
            &LinearVelocity,
            &MovementState,
            &mut CameraBlend,
        ),
        With<Player>,
    >,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    for (sensor, crouch, velocity, state, mut blend) in &mut query {
        let effectively_grounded =
            sensor.effectively_grounded(now, tuning.coyote_window, velocity.y);
        let neutral = tuning.camera_neutral_height(crouch.current_height);
        let moving = input.axis.length() > 0.15;

        if effectively_grounded && moving {
            let (rate, amount) = bob_params(*state, crouch.is_crouching, &tuning);
            blend.bob_phase += dt * rate;
            blend.cam_height = neutral + blend.bob_phase.sin() * amount;
        } else {
            blend.bob_phase = 0.0;
            let return_rate = if effectively_grounded {
                tuning.bob_idle_return_rate
            } else {
                tuning.bob_air_return_rate
            };
            blend.cam_height = expo_smooth(blend.cam_height, neutral, return_rate, dt);
        }
    }
}

/// Write the blended presentation to the camera transform and projection.
/// Skips quietly when no camera child exists.
pub(crate) fn apply_camera(
    player_query: Query<&CameraBlend, With<Player>>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<PlayerCamera>>,
) {
    let Ok(blend) = player_query.single() else {
        return;
    };
    let Ok((mut transform, mut projection)) = camera_query.single_mut() else {
        return;
    };

    transform.translation.y = blend.cam_height;
    transform.rotation = Quat::from_euler(
        EulerRot::YXZ,
        0.0,
        blend.pitch.to_radians(),
        blend.tilt.to_radians(),
    );

    if let Projection::Perspective(perspective) = &mut *projection {
        perspective.fov = blend.fov.to_radians();
    }
}
