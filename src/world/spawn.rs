//! World domain: startup assembly of the garden scene.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::{ContentRegistry, WorldConfig};
use crate::effects::{ColorCycle, ColorMode, WindSway};
use crate::interact::{NpcTalk, Pickup};
use crate::player::GameLayer;
use crate::spirits::{SpawnRing, SpiritSpawner};

/// Root marker so re-entering Playing (after a pause) does not rebuild the
/// scene.
#[derive(Component, Debug)]
pub struct WorldRoot;

const GARDEN_SIZE: f32 = 40.0;
const WALL_HEIGHT: f32 = 3.0;
const WALL_THICKNESS: f32 = 0.6;

pub(crate) fn spawn_garden(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Option<Res<WorldConfig>>,
    registry: Option<Res<ContentRegistry>>,
    existing: Query<Entity, With<WorldRoot>>,
) {
    if !existing.is_empty() {
        return;
    }

    let world = config.map(|c| c.0.clone()).unwrap_or_default();

    // Lighting: low amber sun plus a dim ambient for the dusk mood
    commands.spawn((
        WorldRoot,
        DirectionalLight {
            color: Color::srgb(1.0, 0.75, 0.5),
            illuminance: 2_500.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::YXZ, 0.8, -0.5, 0.0)),
    ));
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb(0.5, 0.55, 0.8),
        brightness: 120.0,
        ..default()
    });

    // Ground plane
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.16, 0.24, 0.15),
        perceptual_roughness: 1.0,
        ..default()
    });
    commands.spawn((
        WorldRoot,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GARDEN_SIZE, GARDEN_SIZE))),
        MeshMaterial3d(ground_material),
        Transform::IDENTITY,
        RigidBody::Static,
        Collider::cuboid(GARDEN_SIZE, 0.1, GARDEN_SIZE),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Default]),
    ));

    // Perimeter walls
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.3, 0.28),
        ..default()
    });
    let half = GARDEN_SIZE * 0.5;
    for (pos, size) in [
        (
            Vec3::new(0.0, WALL_HEIGHT * 0.5, -half),
            Vec3::new(GARDEN_SIZE, WALL_HEIGHT, WALL_THICKNESS),
        ),
        (
            Vec3::new(0.0, WALL_HEIGHT * 0.5, half),
            Vec3::new(GARDEN_SIZE, WALL_HEIGHT, WALL_THICKNESS),
        ),
        (
            Vec3::new(-half, WALL_HEIGHT * 0.5, 0.0),
            Vec3::new(WALL_THICKNESS, WALL_HEIGHT, GARDEN_SIZE),
        ),
        (
            Vec3::new(half, WALL_HEIGHT * 0.5, 0.0),
            Vec3::new(WALL_THICKNESS, WALL_HEIGHT, GARDEN_SIZE),
        ),
    ] {
        commands.spawn((
            WorldRoot,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(pos),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            CollisionLayers::new(GameLayer::Obstacle, [GameLayer::Player, GameLayer::Default]),
        ));
    }

    // Crawl space: a slab low enough to force a crouch (underside at 1.45m,
    // between the crouch and stand heights)
    spawn_crawl_space(&mut commands, &mut meshes, &mut materials);

    // Shrine ornament with the cycling glow
    commands.spawn((
        WorldRoot,
        ColorCycle {
            mode: ColorMode::Linear,
            speed: 2.0,
            saturation: 0.7,
            ..default()
        },
        Mesh3d(meshes.add(Cuboid::new(0.5, 0.5, 0.5))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.9, 0.4, 0.4),
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(0.0, 2.2, -10.0),
    ));

    // Swaying bamboo stalks along the east wall
    let bamboo_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.5, 0.2),
        ..default()
    });
    let bamboo_mesh = meshes.add(Cuboid::new(0.15, 2.6, 0.15));
    for i in 0..7 {
        let x = half - 2.0;
        let z = -12.0 + i as f32 * 3.7;
        commands.spawn((
            WorldRoot,
            WindSway::new(i as f32 * 0.9, 0.12, Quat::IDENTITY),
            Mesh3d(bamboo_mesh.clone()),
            MeshMaterial3d(bamboo_material.clone()),
            Transform::from_xyz(x, 1.3, z),
        ));
    }

    // Spirit spawner and its ring, centered on the garden
    commands.spawn((
        WorldRoot,
        SpawnRing {
            radius: world.spawner.ring_radius,
            inner_fraction: world.spawner.ring_inner_fraction,
        },
        SpiritSpawner {
            item_id: world.spawner.spirit_item_id.clone(),
            remaining: world.spawner.count,
            endless: world.spawner.endless,
            interval: world.spawner.interval,
            timer: 0.0,
            spawned: Vec::new(),
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        Visibility::default(),
    ));

    // Placed pickups
    let pickup_mesh = meshes.add(Cuboid::new(0.3, 0.3, 0.3));
    for placed in &world.placed_items {
        let [x, y, z] = placed.position;
        commands.spawn((
            WorldRoot,
            Pickup {
                item_id: placed.item_id.clone(),
            },
            Mesh3d(pickup_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.85, 0.7, 0.3),
                ..default()
            })),
            Transform::from_xyz(x, y, z),
            Collider::cuboid(0.4, 0.4, 0.4),
            Sensor,
            CollisionLayers::new(GameLayer::Interactable, [GameLayer::Default]),
        ));
    }

    // Placed NPCs
    let npc_mesh = meshes.add(Capsule3d::new(0.35, 1.0));
    for placed in &world.placed_npcs {
        let [x, _, z] = placed.position;
        let known = registry
            .as_ref()
            .map(|reg| reg.npcs.contains_key(&placed.npc_id))
            .unwrap_or(false);
        if !known {
            warn!("Skipping unknown NPC '{}'", placed.npc_id);
            continue;
        }

        commands.spawn((
            WorldRoot,
            NpcTalk {
                npc_id: placed.npc_id.clone(),
            },
            Mesh3d(npc_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.6, 0.55, 0.75),
                ..default()
            })),
            Transform::from_xyz(x, 0.85, z),
            Collider::capsule(0.35, 1.0),
            Sensor,
            CollisionLayers::new(GameLayer::Interactable, [GameLayer::Default]),
        ));
    }

    info!("Garden assembled");
}

fn spawn_crawl_space(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let slab_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.26, 0.22),
        ..default()
    });

    // Slab underside at 1.45m
    let slab_size = Vec3::new(5.0, 0.3, 4.0);
    commands.spawn((
        WorldRoot,
        Mesh3d(meshes.add(Cuboid::new(slab_size.x, slab_size.y, slab_size.z))),
        MeshMaterial3d(slab_material.clone()),
        Transform::from_xyz(-8.0, 1.45 + slab_size.y * 0.5, -8.0),
        RigidBody::Static,
        Collider::cuboid(slab_size.x, slab_size.y, slab_size.z),
        CollisionLayers::new(GameLayer::Obstacle, [GameLayer::Player, GameLayer::Default]),
    ));

    // Legs at the slab's corners
    let leg_mesh = meshes.add(Cuboid::new(0.3, 1.45, 0.3));
    for (dx, dz) in [(-2.2, -1.7), (2.2, -1.7), (-2.2, 1.7), (2.2, 1.7)] {
        commands.spawn((
            WorldRoot,
            Mesh3d(leg_mesh.clone()),
            MeshMaterial3d(slab_material.clone()),
            Transform::from_xyz(-8.0 + dx, 1.45 * 0.5, -8.0 + dz),
            RigidBody::Static,
            Collider::cuboid(0.3, 1.45, 0.3),
            CollisionLayers::new(GameLayer::Obstacle, [GameLayer::Player, GameLayer::Default]),
        ));
    }
}
