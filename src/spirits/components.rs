//! Spirits domain: components for wandering spirits and their spawner.

use bevy::prelude::*;

/// Float-wander behavior: drift between random targets around a home point,
/// bobbing on a sine wave and slowly spinning. Flees when the player gets
/// too close.
#[derive(Component, Debug)]
pub struct SpiritWander {
    pub home: Vec3,
    pub target: Vec3,
    pub retarget_timer: f32,
    pub retarget_interval: f32,
    pub wander_radius: f32,
    pub move_speed: f32,
    pub float_speed: f32,
    pub float_height: f32,
    /// Yaw spin in degrees per second.
    pub spin_speed: f32,
}

impl SpiritWander {
    pub fn new(home: Vec3) -> Self {
        Self {
            home,
            target: home,
            retarget_timer: 0.0,
            retarget_interval: 3.0,
            wander_radius: 5.0,
            move_speed: 1.5,
            float_speed: 2.0,
            float_height: 0.5,
            spin_speed: 30.0,
        }
    }
}

/// Ring-shaped spawn area on the XZ plane around the owning entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnRing {
    pub radius: f32,
    /// Inner radius as a fraction of `radius`, in [0, 1].
    pub inner_fraction: f32,
}

/// Timed spawner that places one spirit pickup per interval at a ring
/// point until `remaining` runs out (or forever when endless).
#[derive(Component, Debug)]
pub struct SpiritSpawner {
    pub item_id: String,
    pub remaining: u32,
    pub endless: bool,
    pub interval: f32,
    pub timer: f32,
    pub spawned: Vec<Entity>,
}

impl SpiritSpawner {
    /// Advance the timer; returns true when a spawn is due this tick.
    /// Endless spawners never decrement `remaining`.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.endless && self.remaining == 0 {
            return false;
        }

        self.timer += dt;
        if self.timer < self.interval {
            return false;
        }

        self.timer -= self.interval;
        if !self.endless {
            self.remaining -= 1;
        }
        true
    }

    pub fn exhausted(&self) -> bool {
        !self.endless && self.remaining == 0
    }
}
