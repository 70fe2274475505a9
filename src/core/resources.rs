//! Core domain: shared resources for session configuration.

use bevy::prelude::*;
use rand::Rng;

/// Seed for all deterministic gameplay randomness (spawn points, wander
/// targets). Fix the seed to reproduce a garden layout.
#[derive(Resource, Debug)]
pub struct WorldSeed {
    pub seed: u64,
}

impl Default for WorldSeed {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}
