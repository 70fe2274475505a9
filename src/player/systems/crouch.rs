//! Player domain: crouch/stand negotiation with headroom clearance checks.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::player::{CrouchState, GameLayer, Player, PlayerInput, PlayerTuning};

/// Minimum change in capsule height that triggers a collider rebuild.
const HEIGHT_EPSILON: f32 = 1e-4;

/// True if any obstacle's lower bound dips below the clearance marker.
/// An empty set of obstacles means standing is permitted.
pub(crate) fn stand_blocked(
    obstacle_min_ys: impl IntoIterator<Item = f32>,
    marker_y: f32,
    clearance: f32,
) -> bool {
    obstacle_min_ys
        .into_iter()
        .any(|min_y| min_y < marker_y + clearance)
}

/// The player entity plus every descendant (camera, attachments), all of
/// which are excluded from the clearance query.
fn collect_with_descendants(root: Entity, children: &Query<&Children>) -> Vec<Entity> {
    let mut all = vec![root];
    let mut stack = vec![root];
    while let Some(entity) = stack.pop() {
        if let Ok(kids) = children.get(entity) {
            for child in kids.iter() {
                all.push(child);
                stack.push(child);
            }
        }
    }
    all
}

pub(crate) fn negotiate_crouch(
    time: Res<Time>,
    tuning: Res<PlayerTuning>,
    input: Res<PlayerInput>,
    spatial_query: SpatialQuery,
    children: Query<&Children>,
    aabbs: Query<&ColliderAabb>,
    mut query: Query<(Entity, &mut Transform, &mut Collider, &mut CrouchState), With<Player>>,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    for (entity, mut transform, mut collider, mut crouch) in &mut query {
        if input.crouch_just_pressed {
            crouch.press(tuning.crouch_height);
        }
        if input.crouch_just_released {
            crouch.release();
        }

        if crouch.should_attempt_stand(now, tuning.stand_check_cooldown) {
            crouch.last_stand_check = now;

            // Clearance marker sits where the top of the standing capsule
            // would be
            let foot_y = transform.translation.y - crouch.current_height * 0.5;
            let marker = Vec3::new(
                transform.translation.x,
                foot_y + tuning.stand_height,
                transform.translation.z,
            );

            let filter = SpatialQueryFilter::from_mask([
                GameLayer::Default,
                GameLayer::Ground,
                GameLayer::Obstacle,
            ])
            .with_excluded_entities(collect_with_descendants(entity, &children));

            let hits = spatial_query.shape_intersections(
                &Collider::sphere(tuning.stand_check_radius),
                marker,
                Quat::IDENTITY,
                &filter,
            );

            let blocked = stand_blocked(
                hits.iter().filter_map(|hit| aabbs.get(*hit).ok()).map(|aabb| aabb.min.y),
                marker.y,
                tuning.min_stand_clearance,
            );

            if !blocked {
                crouch.stand(tuning.stand_height);
                debug!("Standing up at t={:.2}", now);
            }
        }

        // Smooth the capsule toward its target height; when the capsule
        // grows, lift the body by half the delta so the feet stay planted
        let delta = crouch.step_height(dt, tuning.crouch_smooth_time);
        if delta > 0.0 {
            transform.translation.y += delta * 0.5;
        }
        if delta.abs() > HEIGHT_EPSILON {
            let cylinder_len =
                (crouch.current_height - 2.0 * tuning.capsule_radius).max(tuning.capsule_radius);
            *collider = Collider::capsule(tuning.capsule_radius, cylinder_len);
        }
    }
}
