//! Player domain: tests for the sensor, state machine, crouch negotiation,
//! and camera blending logic.

use bevy::prelude::Vec2;

use super::components::{CrouchState, GroundSensor, MovementState};
use super::resources::PlayerTuning;
use super::systems::camera::{bob_params, expo_smooth, fov_target, tilt_target};
use super::systems::crouch::stand_blocked;
use super::systems::state::transition;

fn tuning() -> PlayerTuning {
    PlayerTuning::default()
}

// -----------------------------------------------------------------------------
// Ground sensor tests
// -----------------------------------------------------------------------------

#[test]
fn test_raw_grounded_is_effectively_grounded_immediately() {
    let mut sensor = GroundSensor::default();
    sensor.update(true, 10.0);

    assert!(sensor.effectively_grounded(10.0, 0.2, 0.0));
    assert!(sensor.effectively_grounded(10.0, 0.2, 5.0));
}

#[test]
fn test_coyote_window_extends_grounding_after_leaving() {
    let mut sensor = GroundSensor::default();
    sensor.update(true, 10.0);
    sensor.update(false, 10.05);

    // Inside the window with non-positive vertical velocity
    assert!(sensor.effectively_grounded(10.15, 0.2, -1.0));
    assert!(sensor.effectively_grounded(10.2, 0.2, 0.0));
    // Upward velocity disqualifies the grace window
    assert!(!sensor.effectively_grounded(10.15, 0.2, 3.0));
    // Past the window
    assert!(!sensor.effectively_grounded(10.25, 0.2, -1.0));
}

#[test]
fn test_last_grounded_timestamp_is_monotonic() {
    let mut sensor = GroundSensor::default();
    sensor.update(true, 5.0);
    sensor.update(false, 6.0);
    assert_eq!(sensor.last_grounded_at, 5.0);
    sensor.update(true, 7.0);
    assert_eq!(sensor.last_grounded_at, 7.0);
}

#[test]
fn test_just_landed_fires_only_on_the_landing_edge() {
    let mut sensor = GroundSensor::default();
    sensor.update(false, 1.0);
    assert!(!sensor.just_landed);
    sensor.update(true, 2.0);
    assert!(sensor.just_landed);
    sensor.update(true, 3.0);
    assert!(!sensor.just_landed);
}

// -----------------------------------------------------------------------------
// Movement state machine tests
// -----------------------------------------------------------------------------

#[test]
fn test_airborne_always_wins_regardless_of_intent() {
    let tuning = tuning();
    for (crouching, run_held, forward) in [
        (false, false, 0.0),
        (true, false, 0.0),
        (false, true, 1.0),
        (true, true, 1.0),
    ] {
        let (state, speed) = transition(7.5, false, crouching, run_held, forward, &tuning);
        assert_eq!(state, MovementState::Jumping);
        // Speed is carried unchanged from the pre-jump state
        assert_eq!(speed, 7.5);
    }
}

#[test]
fn test_crouch_takes_priority_over_run() {
    let tuning = tuning();
    let (state, speed) = transition(6.0, true, true, true, 1.0, &tuning);
    assert_eq!(state, MovementState::Crouching);
    assert_eq!(speed, tuning.base_speed * 0.5);
}

#[test]
fn test_running_requires_forward_intent_above_threshold() {
    let tuning = tuning();

    let (state, speed) = transition(6.0, true, false, true, 0.5, &tuning);
    assert_eq!(state, MovementState::Running);
    assert_eq!(speed, tuning.run_speed);

    // Forward intent right at the threshold does not run
    let (state, speed) = transition(6.0, true, false, true, 0.1, &tuning);
    assert_eq!(state, MovementState::Walking);
    assert_eq!(speed, tuning.base_speed);

    // Run key without forward intent walks
    let (state, _) = transition(6.0, true, false, true, 0.0, &tuning);
    assert_eq!(state, MovementState::Walking);
}

#[test]
fn test_grounded_with_crouch_held_yields_crouching_at_half_speed() {
    // Scenario: rawGrounded, crouch key down -> Crouching at base * 0.5
    let tuning = tuning();
    let (state, speed) = transition(6.0, true, true, false, 0.0, &tuning);
    assert_eq!(state, MovementState::Crouching);
    assert_eq!(speed, tuning.base_speed * 0.5);
}

// -----------------------------------------------------------------------------
// Crouch negotiation tests
// -----------------------------------------------------------------------------

#[test]
fn test_wants_to_stand_requires_crouching() {
    let mut crouch = CrouchState::new(1.8);

    // Releasing without ever crouching does nothing
    crouch.release();
    assert!(!crouch.wants_to_stand);

    crouch.press(1.3);
    assert!(crouch.is_crouching);
    assert!(!crouch.wants_to_stand);

    crouch.release();
    assert!(crouch.is_crouching);
    assert!(crouch.wants_to_stand);

    crouch.stand(1.8);
    assert!(!crouch.is_crouching);
    assert!(!crouch.wants_to_stand);
}

#[test]
fn test_repress_cancels_pending_stand() {
    let mut crouch = CrouchState::new(1.8);
    crouch.press(1.3);
    crouch.release();
    assert!(crouch.wants_to_stand);

    crouch.press(1.3);
    assert!(crouch.is_crouching);
    assert!(!crouch.wants_to_stand);
    assert_eq!(crouch.target_height, 1.3);
}

#[test]
fn test_stand_attempt_respects_cooldown() {
    let mut crouch = CrouchState::new(1.8);
    crouch.press(1.3);
    crouch.release();
    crouch.last_stand_check = 10.0;

    assert!(!crouch.should_attempt_stand(10.05, 0.1));
    assert!(crouch.should_attempt_stand(10.11, 0.1));
}

#[test]
fn test_stand_blocked_by_low_obstacle() {
    let marker_y = 1.8;

    // Obstacle bottom below marker + clearance blocks standing
    assert!(stand_blocked([1.7], marker_y, 0.01));
    assert!(stand_blocked([1.805], marker_y, 0.01));
    // Obstacle comfortably above the marker does not
    assert!(!stand_blocked([1.9], marker_y, 0.01));
    // No obstacles means standing is permitted
    assert!(!stand_blocked([], marker_y, 0.01));
}

#[test]
fn test_height_smoothing_converges_without_overshoot() {
    let mut crouch = CrouchState::new(1.8);
    crouch.press(1.3);

    let mut last = crouch.current_height;
    for _ in 0..240 {
        let delta = crouch.step_height(1.0 / 60.0, 0.2);
        assert!(delta <= 0.0, "shrinking must never move upward");
        assert!(crouch.current_height <= last);
        assert!(crouch.current_height >= crouch.target_height - 1e-4);
        last = crouch.current_height;
    }
    assert!((crouch.current_height - 1.3).abs() < 1e-3);
}

#[test]
fn test_height_smoothing_is_idempotent_at_the_fixed_point() {
    let mut crouch = CrouchState::new(1.8);
    let delta = crouch.step_height(1.0 / 60.0, 0.2);
    assert_eq!(delta, 0.0);
    assert_eq!(crouch.current_height, 1.8);
}

#[test]
fn test_growth_reports_positive_delta_for_position_correction() {
    let mut crouch = CrouchState::new(1.8);
    crouch.press(1.3);
    for _ in 0..240 {
        crouch.step_height(1.0 / 60.0, 0.2);
    }
    crouch.stand(1.8);

    let delta = crouch.step_height(1.0 / 60.0, 0.2);
    assert!(delta > 0.0);
}

// -----------------------------------------------------------------------------
// Camera blending tests
// -----------------------------------------------------------------------------

#[test]
fn test_tilt_target_zero_for_negligible_lateral_intent() {
    // Scenario: lateral intent below the 0.1 threshold while grounded and
    // running -> no tilt
    let tuning = tuning();
    let target = tilt_target(
        Vec2::new(0.05, 1.0),
        MovementState::Running,
        false,
        true,
        &tuning,
    );
    assert_eq!(target, 0.0);
}

#[test]
fn test_tilt_target_zero_while_airborne() {
    let tuning = tuning();
    let target = tilt_target(
        Vec2::new(1.0, 0.0),
        MovementState::Jumping,
        false,
        false,
        &tuning,
    );
    assert_eq!(target, 0.0);
}

#[test]
fn test_tilt_leans_against_strafe_with_state_multipliers() {
    let tuning = tuning();
    let axis = Vec2::new(1.0, 0.0);

    let walking = tilt_target(axis, MovementState::Walking, false, true, &tuning);
    assert_eq!(walking, -tuning.tilt_amount);

    let running = tilt_target(axis, MovementState::Running, false, true, &tuning);
    assert_eq!(running, -tuning.tilt_amount * tuning.run_tilt_mult);

    let crouching = tilt_target(axis, MovementState::Crouching, true, true, &tuning);
    assert_eq!(crouching, -tuning.tilt_amount * tuning.crouch_tilt_mult);
}

#[test]
fn test_fov_targets_run_fov_while_airborne_after_running_jump() {
    // Scenario: jump pressed while running -> mid-air FOV target stays at
    // run fov even though intent cannot be sampled
    let tuning = tuning();
    let target = fov_target(false, MovementState::Jumping, true, &tuning);
    assert_eq!(target, tuning.run_fov);

    // A walking jump relaxes to the normal fov
    let target = fov_target(false, MovementState::Jumping, false, &tuning);
    assert_eq!(target, tuning.normal_fov);
}

#[test]
fn test_fov_targets_run_fov_only_while_running_on_the_ground() {
    let tuning = tuning();
    assert_eq!(
        fov_target(true, MovementState::Running, false, &tuning),
        tuning.run_fov
    );
    assert_eq!(
        fov_target(true, MovementState::Walking, true, &tuning),
        tuning.normal_fov
    );
}

#[test]
fn test_bob_params_scale_down_while_crouched() {
    let tuning = tuning();
    let (walk_rate, walk_amount) = bob_params(MovementState::Walking, false, &tuning);
    let (crouch_rate, crouch_amount) = bob_params(MovementState::Crouching, true, &tuning);

    assert_eq!(walk_rate, tuning.walk_bob_rate);
    assert_eq!(walk_amount, tuning.walk_bob_amount);
    assert_eq!(crouch_rate, tuning.walk_bob_rate * tuning.crouch_bob_rate_mult);
    assert_eq!(
        crouch_amount,
        tuning.walk_bob_amount * tuning.crouch_bob_amount_mult
    );

    let (run_rate, run_amount) = bob_params(MovementState::Running, false, &tuning);
    assert_eq!(run_rate, tuning.run_bob_rate);
    assert_eq!(run_amount, tuning.run_bob_amount);
}

#[test]
fn test_expo_smooth_converges_and_is_idempotent_at_target() {
    let mut value = 0.0;
    for _ in 0..600 {
        value = expo_smooth(value, 10.0, 8.0, 1.0 / 60.0);
    }
    assert!((value - 10.0).abs() < 1e-3);

    let settled = expo_smooth(10.0, 10.0, 8.0, 1.0 / 60.0);
    assert_eq!(settled, 10.0);
}

#[test]
fn test_jump_velocity_reaches_configured_apex() {
    let tuning = tuning();
    let v = tuning.jump_velocity();
    // h = v^2 / (2g)
    let apex = v * v / (2.0 * -tuning.gravity);
    assert!((apex - tuning.jump_height).abs() < 1e-4);
}
