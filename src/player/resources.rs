//! Player domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct PlayerTuning {
    // Locomotion
    pub base_speed: f32,
    pub run_speed: f32,
    /// Crouch speed as a fraction of base speed.
    pub crouch_speed_mult: f32,
    /// Apex height of a jump in meters.
    pub jump_height: f32,
    pub gravity: f32,
    /// Grace window after leaving the ground during which the player still
    /// counts as grounded (given non-positive vertical velocity).
    pub coyote_window: f32,

    // Look
    pub mouse_sensitivity: f32,
    pub max_look_up: f32,
    pub max_look_down: f32,

    // Crouch negotiation
    pub stand_height: f32,
    pub crouch_height: f32,
    pub crouch_smooth_time: f32,
    pub stand_check_cooldown: f32,
    pub stand_check_radius: f32,
    pub min_stand_clearance: f32,

    // Camera tilt
    pub tilt_amount: f32,
    pub tilt_rate: f32,
    pub run_tilt_mult: f32,
    pub crouch_tilt_mult: f32,

    // Field of view
    pub normal_fov: f32,
    pub run_fov: f32,
    pub fov_rate: f32,

    // Head bob
    pub walk_bob_rate: f32,
    pub walk_bob_amount: f32,
    pub run_bob_rate: f32,
    pub run_bob_amount: f32,
    pub crouch_bob_rate_mult: f32,
    pub crouch_bob_amount_mult: f32,
    pub bob_air_return_rate: f32,
    pub bob_idle_return_rate: f32,

    // Body
    pub capsule_radius: f32,
    /// Camera local height above the body origin at full stand height.
    pub camera_base_height: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            base_speed: 6.0,
            run_speed: 9.0,
            crouch_speed_mult: 0.5,
            jump_height: 1.0,
            gravity: -9.81,
            coyote_window: 0.2,
            mouse_sensitivity: 0.12,
            max_look_up: 90.0,
            max_look_down: -90.0,
            stand_height: 1.8,
            crouch_height: 1.3,
            crouch_smooth_time: 0.2,
            stand_check_cooldown: 0.1,
            stand_check_radius: 0.2,
            min_stand_clearance: 0.01,
            tilt_amount: 2.0,
            tilt_rate: 8.4,
            run_tilt_mult: 1.2,
            crouch_tilt_mult: 0.5,
            normal_fov: 60.0,
            run_fov: 70.0,
            fov_rate: 8.0,
            walk_bob_rate: 14.0,
            walk_bob_amount: 0.05,
            run_bob_rate: 18.0,
            run_bob_amount: 0.03,
            crouch_bob_rate_mult: 0.6,
            crouch_bob_amount_mult: 0.4,
            bob_air_return_rate: 12.0,
            bob_idle_return_rate: 8.0,
            capsule_radius: 0.3,
            camera_base_height: 0.7,
        }
    }
}

impl PlayerTuning {
    /// Initial vertical velocity needed to reach `jump_height` at apex.
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }

    /// Camera neutral local height for a given capsule height.
    pub fn camera_neutral_height(&self, current_height: f32) -> f32 {
        self.camera_base_height * (current_height / self.stand_height)
    }
}

#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    /// x = strafe (right positive), y = forward intent, both in [-1, 1].
    pub axis: Vec2,
    pub run_held: bool,
    pub jump_just_pressed: bool,
    pub crouch_just_pressed: bool,
    pub crouch_just_released: bool,
    /// Accumulated mouse delta for this tick, in pixels.
    pub look_delta: Vec2,
}
