//! Spirits domain: tests for ring sampling and spawner pacing.

use bevy::prelude::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::components::{SpiritSpawner, SpiritWander};
use super::systems::{random_point_in_ring, random_wander_target};

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

// -----------------------------------------------------------------------------
// Ring sampling tests
// -----------------------------------------------------------------------------

#[test]
fn test_ring_samples_stay_between_inner_and_outer_radius() {
    let mut rng = rng();
    let center = Vec3::new(3.0, 1.5, -2.0);

    for _ in 0..500 {
        let point = random_point_in_ring(&mut rng, center, 10.0, 0.5);
        let planar = (point - center).length();

        assert!(planar <= 10.0 + 1e-3, "outside outer radius: {}", planar);
        assert!(planar >= 5.0 - 1e-3, "inside inner radius: {}", planar);
        assert_eq!(point.y, center.y, "samples must stay on the XZ plane");
    }
}

#[test]
fn test_zero_inner_fraction_fills_the_whole_disc() {
    let mut rng = rng();
    let center = Vec3::ZERO;

    let mut saw_close = false;
    for _ in 0..500 {
        let point = random_wander_target(&mut rng, center, 5.0);
        let planar = point.length();
        assert!(planar <= 5.0 + 1e-3);
        if planar < 2.0 {
            saw_close = true;
        }
    }
    assert!(saw_close, "disc sampling should reach near the center");
}

#[test]
fn test_ring_sampling_is_deterministic_per_seed() {
    let a = random_point_in_ring(&mut rng(), Vec3::ZERO, 10.0, 0.5);
    let b = random_point_in_ring(&mut rng(), Vec3::ZERO, 10.0, 0.5);
    assert_eq!(a, b);
}

// -----------------------------------------------------------------------------
// Spawner pacing tests
// -----------------------------------------------------------------------------

fn spawner(remaining: u32, endless: bool, interval: f32) -> SpiritSpawner {
    SpiritSpawner {
        item_id: "item_spirit_ember".to_string(),
        remaining,
        endless,
        interval,
        timer: 0.0,
        spawned: Vec::new(),
    }
}

#[test]
fn test_spawner_fires_once_per_interval() {
    let mut spawner = spawner(3, false, 1.0);

    assert!(!spawner.tick(0.4));
    assert!(!spawner.tick(0.4));
    assert!(spawner.tick(0.4));
    assert_eq!(spawner.remaining, 2);
}

#[test]
fn test_spawner_counts_down_to_exhaustion() {
    let mut spawner = spawner(2, false, 0.5);

    assert!(spawner.tick(0.5));
    assert!(spawner.tick(0.5));
    assert!(spawner.exhausted());
    assert!(!spawner.tick(10.0));
}

#[test]
fn test_endless_spawner_never_exhausts() {
    let mut spawner = spawner(0, true, 0.5);

    for _ in 0..20 {
        spawner.tick(0.5);
    }
    assert!(!spawner.exhausted());
    assert_eq!(spawner.remaining, 0);
}

// -----------------------------------------------------------------------------
// Wander defaults
// -----------------------------------------------------------------------------

#[test]
fn test_new_wanderer_starts_at_home() {
    let home = Vec3::new(1.0, 2.0, 3.0);
    let wander = SpiritWander::new(home);

    assert_eq!(wander.home, home);
    assert_eq!(wander.target, home);
    assert_eq!(wander.retarget_timer, 0.0);
}
