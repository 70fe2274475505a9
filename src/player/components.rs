//! Player domain: components and physics layers for the first-person body.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (garden floor, paths, slabs)
    Ground,
    /// Static obstacles (walls, beams, props)
    Obstacle,
    /// Player capsule
    Player,
    /// Pickups and NPCs reachable by the interaction ray
    Interactable,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for the head-level camera child of the player body.
#[derive(Component, Debug)]
pub struct PlayerCamera;

/// Discrete motion mode. Exactly one value is active at a time; transitions
/// happen only in the movement state machine.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementState {
    #[default]
    Walking,
    Running,
    Crouching,
    Jumping,
}

/// Grounded tracking with a short grace window after leaving the ground.
#[derive(Component, Debug, Default)]
pub struct GroundSensor {
    pub grounded: bool,
    pub last_grounded_at: f32,
    /// True only on the tick a not-grounded -> grounded edge was seen.
    pub just_landed: bool,
}

impl GroundSensor {
    /// Record the raw grounded flag for this tick. `last_grounded_at` only
    /// ever moves forward.
    pub fn update(&mut self, raw_grounded: bool, now: f32) {
        self.just_landed = raw_grounded && !self.grounded;
        self.grounded = raw_grounded;
        if raw_grounded {
            self.last_grounded_at = now;
        }
    }

    /// Grounded, or still within the coyote window while not moving upward.
    pub fn effectively_grounded(
        &self,
        now: f32,
        coyote_window: f32,
        vertical_velocity: f32,
    ) -> bool {
        self.grounded
            || (now - self.last_grounded_at <= coyote_window && vertical_velocity <= 0.0)
    }
}

/// Speed carried between ticks plus the ran-at-launch flag the camera
/// blender consults while airborne.
#[derive(Component, Debug, Default)]
pub struct Locomotion {
    pub speed: f32,
    pub was_running_at_launch: bool,
}

/// Crouch/stand negotiation over {Standing, Crouching, WantsToStand}.
///
/// Invariants: `wants_to_stand` is only ever true while `is_crouching`;
/// `current_height` converges toward `target_height` without overshoot.
#[derive(Component, Debug, Clone)]
pub struct CrouchState {
    pub current_height: f32,
    pub target_height: f32,
    pub is_crouching: bool,
    pub wants_to_stand: bool,
    pub last_stand_check: f32,
}

impl CrouchState {
    pub fn new(stand_height: f32) -> Self {
        Self {
            current_height: stand_height,
            target_height: stand_height,
            is_crouching: false,
            wants_to_stand: false,
            last_stand_check: 0.0,
        }
    }

    /// Crouch key pressed: enter Crouching, or cancel a pending stand
    /// attempt if one is in flight.
    pub fn press(&mut self, crouch_height: f32) {
        self.wants_to_stand = false;
        if !self.is_crouching {
            self.is_crouching = true;
            self.target_height = crouch_height;
        } else {
            // Re-press while WantsToStand keeps the crouched target
            self.target_height = crouch_height;
        }
    }

    /// Crouch key released: request a stand, but do not stand yet.
    pub fn release(&mut self) {
        if self.is_crouching {
            self.wants_to_stand = true;
        }
    }

    /// A stand re-attempt is allowed at most once per cooldown.
    pub fn should_attempt_stand(&self, now: f32, cooldown: f32) -> bool {
        self.wants_to_stand && now - self.last_stand_check > cooldown
    }

    /// Headroom is clear: stand up.
    pub fn stand(&mut self, stand_height: f32) {
        self.is_crouching = false;
        self.wants_to_stand = false;
        self.target_height = stand_height;
    }

    /// Exponentially smooth `current_height` toward `target_height` and
    /// return the applied delta (positive while growing). Idempotent once
    /// the target is reached.
    pub fn step_height(&mut self, dt: f32, smooth_time: f32) -> f32 {
        let blend = 1.0 - (-dt / smooth_time.max(1e-6)).exp();
        let next = self.current_height + (self.target_height - self.current_height) * blend;
        let delta = next - self.current_height;
        self.current_height = next;
        delta
    }
}

/// Smoothed camera presentation state, derived each tick from the movement
/// state, ground sensor, and input intent. Holds no authoritative state.
#[derive(Component, Debug)]
pub struct CameraBlend {
    /// Camera roll in degrees.
    pub tilt: f32,
    /// Field of view in degrees.
    pub fov: f32,
    /// Head-bob phase in radians; reset to zero while bob is inactive.
    pub bob_phase: f32,
    /// Camera local height, including bob offset.
    pub cam_height: f32,
    /// Look pitch in degrees, clamped by tuning.
    pub pitch: f32,
}

impl CameraBlend {
    pub fn new(normal_fov: f32, camera_base_height: f32) -> Self {
        Self {
            tilt: 0.0,
            fov: normal_fov,
            bob_phase: 0.0,
            cam_height: camera_base_height,
            pitch: 0.0,
        }
    }
}
