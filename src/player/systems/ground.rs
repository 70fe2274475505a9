//! Player domain: ground detection feeding the coyote-time sensor.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::player::{CrouchState, GameLayer, GroundSensor, Player};

/// How far above the capsule base the probe ray starts.
const RAY_LIFT: f32 = 0.05;
/// Ray length; anything within this of the feet counts as ground.
const RAY_REACH: f32 = 0.12;

pub(crate) fn update_ground_sensor(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Transform, &CrouchState, &mut GroundSensor), With<Player>>,
) {
    let now = time.elapsed_secs();
    // Anything standable counts: the floor itself and obstacle tops
    let ground_filter =
        SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Obstacle, GameLayer::Default]);

    for (entity, transform, crouch, mut sensor) in &mut query {
        // Cast a short ray downward from just above the capsule base
        let foot_y = transform.translation.y - crouch.current_height * 0.5;
        let origin = Vec3::new(
            transform.translation.x,
            foot_y + RAY_LIFT,
            transform.translation.z,
        );

        let hit = spatial_query.cast_ray(
            origin,
            Dir3::NEG_Y,
            RAY_LIFT + RAY_REACH,
            true,
            &ground_filter.clone().with_excluded_entities([entity]),
        );

        let was_grounded = sensor.grounded;
        sensor.update(hit.is_some(), now);

        if sensor.just_landed {
            debug!("Landed at t={:.2}", now);
        } else if was_grounded && !sensor.grounded {
            debug!("Left ground at t={:.2}", now);
        }
    }
}
