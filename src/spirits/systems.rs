//! Spirits domain: wander updates and timed ring spawning.

use avian3d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::core::WorldSeed;
use crate::effects::{ColorCycle, ColorMode};
use crate::interact::Pickup;
use crate::player::{GameLayer, Player};
use crate::spirits::components::{SpawnRing, SpiritSpawner, SpiritWander};
use crate::spirits::resources::SpiritRng;

/// Distance at which a spirit starts avoiding the player.
const FLEE_DISTANCE: f32 = 2.0;
/// How far past its current position a fleeing spirit aims.
const FLEE_STEP: f32 = 3.0;

/// Uniform-by-area sample inside the ring between `inner_fraction * radius`
/// and `radius`, on the XZ plane at the center's height.
pub(crate) fn random_point_in_ring(
    rng: &mut impl Rng,
    center: Vec3,
    radius: f32,
    inner_fraction: f32,
) -> Vec3 {
    let outer = radius;
    let inner = outer * inner_fraction.clamp(0.0, 1.0);

    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    // sqrt keeps the distribution uniform over the ring's area
    let r = rng.random_range((inner * inner)..=(outer * outer)).sqrt();

    Vec3::new(
        center.x + r * angle.cos(),
        center.y,
        center.z + r * angle.sin(),
    )
}

/// Random wander target inside the spirit's home disc.
pub(crate) fn random_wander_target(rng: &mut impl Rng, home: Vec3, radius: f32) -> Vec3 {
    random_point_in_ring(rng, home, radius, 0.0)
}

pub(crate) fn setup_spirit_rng(mut commands: Commands, seed: Res<WorldSeed>) {
    commands.insert_resource(SpiritRng::from_seed(seed.seed));
}

/// Re-roll wander targets on a timer; proximity to the player overrides the
/// roll with a flee target.
pub(crate) fn retarget_wanderers(
    time: Res<Time>,
    mut rng: ResMut<SpiritRng>,
    player_query: Query<&Transform, With<Player>>,
    mut spirits: Query<(&Transform, &mut SpiritWander), Without<Player>>,
) {
    let dt = time.delta_secs();
    let player_pos = player_query.iter().next().map(|t| t.translation);

    for (transform, mut wander) in &mut spirits {
        if let Some(player_pos) = player_pos {
            let away = transform.translation - player_pos;
            if away.length() < FLEE_DISTANCE {
                let dir = Vec3::new(away.x, 0.0, away.z).normalize_or_zero();
                wander.target = transform.translation + dir * FLEE_STEP;
            }
        }

        wander.retarget_timer += dt;
        if wander.retarget_timer >= wander.retarget_interval {
            wander.retarget_timer = 0.0;
            let (home, radius) = (wander.home, wander.wander_radius);
            wander.target = random_wander_target(&mut rng.0, home, radius);
        }
    }
}

/// Ease toward the target, then layer the sine float and the slow spin on
/// top. The float always rides on the home height, not the eased height.
pub(crate) fn move_wanderers(
    time: Res<Time>,
    mut spirits: Query<(&mut Transform, &SpiritWander)>,
) {
    let dt = time.delta_secs();
    let elapsed = time.elapsed_secs();

    for (mut transform, wander) in &mut spirits {
        let eased = transform
            .translation
            .lerp(wander.target, (wander.move_speed * dt).clamp(0.0, 1.0));

        let float_y = wander.home.y + (elapsed * wander.float_speed).sin() * wander.float_height;
        transform.translation = Vec3::new(eased.x, float_y, eased.z);
        transform.rotate_y((wander.spin_speed * dt).to_radians());
    }
}

/// Tick spawners and place one spirit pickup per due interval at a random
/// ring point.
pub(crate) fn run_spawners(
    mut commands: Commands,
    time: Res<Time>,
    mut rng: ResMut<SpiritRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut spawners: Query<(&Transform, &SpawnRing, &mut SpiritSpawner)>,
) {
    let dt = time.delta_secs();

    for (transform, ring, mut spawner) in &mut spawners {
        if !spawner.tick(dt) {
            continue;
        }

        let point = random_point_in_ring(
            &mut rng.0,
            transform.translation,
            ring.radius,
            ring.inner_fraction,
        );
        let home = point + Vec3::Y * 1.2;

        let spirit = commands
            .spawn((
                Pickup {
                    item_id: spawner.item_id.clone(),
                },
                SpiritWander::new(home),
                ColorCycle {
                    mode: ColorMode::SineWave,
                    speed: 1.4,
                    ..default()
                },
                Mesh3d(meshes.add(Sphere::new(0.25))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgba(0.7, 0.9, 1.0, 0.85),
                    alpha_mode: AlphaMode::Blend,
                    unlit: true,
                    ..default()
                })),
                Transform::from_translation(home),
                Collider::sphere(0.35),
                Sensor,
                CollisionLayers::new(GameLayer::Interactable, [GameLayer::Default]),
            ))
            .id();

        spawner.spawned.push(spirit);

        if spawner.exhausted() {
            info!("Spirit spawner exhausted after {} spawns", spawner.spawned.len());
        }
    }
}
