//! Player domain: player body and camera bootstrap.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::player::{
    CameraBlend, CrouchState, GameLayer, GroundSensor, Locomotion, MovementState, Player,
    PlayerCamera, PlayerTuning,
};

/// Spawn the player capsule with its head camera. Runs on entering Playing,
/// which also happens after unpausing, so an existing player short-circuits.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<PlayerTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        return;
    }

    let cylinder_len = tuning.stand_height - 2.0 * tuning.capsule_radius;

    commands
        .spawn((
            // Identity & simulation state
            (
                Player,
                MovementState::default(),
                GroundSensor::default(),
                Locomotion {
                    speed: tuning.base_speed,
                    was_running_at_launch: false,
                },
                CrouchState::new(tuning.stand_height),
                CameraBlend::new(tuning.normal_fov, tuning.camera_base_height),
            ),
            Transform::from_xyz(0.0, tuning.stand_height * 0.5 + 0.05, 6.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(tuning.capsule_radius, cylinder_len),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // Gravity is applied manually for jump control
                Friction::new(0.0),
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Default, GameLayer::Ground, GameLayer::Obstacle],
                ),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerCamera,
                Camera3d::default(),
                Projection::Perspective(PerspectiveProjection {
                    fov: tuning.normal_fov.to_radians(),
                    ..default()
                }),
                Transform::from_xyz(0.0, tuning.camera_base_height, 0.0),
            ));
        });

    info!("Player spawned");
}
