//! Spirits domain: seeded RNG shared by spawn and wander rolls.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for spirit behavior, seeded from the world seed so a
/// fixed seed reproduces spawn points and wander paths.
#[derive(Resource)]
pub struct SpiritRng(pub ChaCha8Rng);

impl SpiritRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
