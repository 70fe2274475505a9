//! Audio domain: tests for footstep cadence and volume settings.

use std::f32::consts::TAU;

use super::footsteps::{pitch_for_state, steps_crossed};
use super::settings::AudioSettings;
use crate::player::MovementState;

// -----------------------------------------------------------------------------
// Footstep cadence tests
// -----------------------------------------------------------------------------

#[test]
fn test_one_step_per_completed_bob_cycle() {
    assert_eq!(steps_crossed(0.0, TAU * 0.9), 0);
    assert_eq!(steps_crossed(TAU * 0.9, TAU * 1.1), 1);
    assert_eq!(steps_crossed(0.0, TAU * 2.5), 2);
}

#[test]
fn test_phase_reset_produces_no_steps() {
    // Bob going inactive snaps the phase back to zero
    assert_eq!(steps_crossed(TAU * 3.2, 0.0), 0);
}

#[test]
fn test_pitch_follows_movement_state() {
    assert_eq!(pitch_for_state(MovementState::Walking, false), 1.0);
    assert_eq!(pitch_for_state(MovementState::Running, false), 1.5);
    assert_eq!(pitch_for_state(MovementState::Crouching, true), 0.7);
    // Crouching wins even if the state lags a tick behind
    assert_eq!(pitch_for_state(MovementState::Running, true), 0.7);
}

// -----------------------------------------------------------------------------
// Volume settings tests
// -----------------------------------------------------------------------------

#[test]
fn test_volume_steps_clamp_to_unit_range() {
    let mut settings = AudioSettings { master_volume: 0.95 };
    settings.raise();
    assert_eq!(settings.master_volume, 1.0);

    let mut settings = AudioSettings { master_volume: 0.05 };
    settings.lower();
    assert_eq!(settings.master_volume, 0.0);
}

#[test]
fn test_volume_percent_label() {
    let settings = AudioSettings { master_volume: 0.8 };
    assert_eq!(settings.percent_label(), "80%");
}
