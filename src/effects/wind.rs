//! Effects domain: global wind settings and per-entity foliage sway.

use bevy::prelude::*;

use crate::content::WorldConfig;

/// Global wind parameters, loaded from world.ron.
#[derive(Resource, Debug, Clone)]
pub struct WindSettings {
    /// Direction the wind blows toward, in degrees on the XZ plane.
    pub direction_degrees: f32,
    /// Main gust strength.
    pub main: f32,
    /// Faster low-amplitude shimmer on top of the main gusts.
    pub turbulence: f32,
}

impl Default for WindSettings {
    fn default() -> Self {
        Self {
            direction_degrees: 30.0,
            main: 0.6,
            turbulence: 0.3,
        }
    }
}

impl WindSettings {
    /// Unit vector the wind blows toward on the XZ plane.
    pub fn direction(&self) -> Vec3 {
        let radians = self.direction_degrees.to_radians();
        Vec3::new(radians.cos(), 0.0, radians.sin())
    }
}

/// Leans the entity back and forth along the wind direction. `phase`
/// staggers entities so foliage does not move in lockstep.
#[derive(Component, Debug, Clone)]
pub struct WindSway {
    pub phase: f32,
    /// Maximum lean in radians at full wind strength.
    pub amount: f32,
    pub base_rotation: Quat,
}

impl WindSway {
    pub fn new(phase: f32, amount: f32, base_rotation: Quat) -> Self {
        Self {
            phase,
            amount,
            base_rotation,
        }
    }
}

/// Main gust frequency in rad/s.
const GUST_FREQUENCY: f32 = 1.2;
/// Turbulence frequency in rad/s.
const SHIMMER_FREQUENCY: f32 = 4.7;
/// Turbulence amplitude relative to the main gust.
const SHIMMER_SCALE: f32 = 0.35;

/// Lean angle in radians for one entity at one instant. Zero wind means
/// zero sway.
pub(crate) fn sway_angle(elapsed: f32, phase: f32, main: f32, turbulence: f32, amount: f32) -> f32 {
    let gust = main * (elapsed * GUST_FREQUENCY + phase).sin();
    let shimmer = turbulence * SHIMMER_SCALE * (elapsed * SHIMMER_FREQUENCY + phase * 2.0).sin();
    amount * (gust + shimmer)
}

/// Runs on entering Playing (after content load); keeps the existing
/// settings when re-entered after a pause.
pub(crate) fn setup_wind(
    mut commands: Commands,
    world: Option<Res<WorldConfig>>,
    existing: Option<Res<WindSettings>>,
) {
    if existing.is_some() {
        return;
    }

    let settings = world
        .map(|config| WindSettings {
            direction_degrees: config.0.wind.direction_degrees,
            main: config.0.wind.main,
            turbulence: config.0.wind.turbulence,
        })
        .unwrap_or_default();

    commands.insert_resource(settings);
}

pub(crate) fn apply_wind_sway(
    time: Res<Time>,
    wind: Res<WindSettings>,
    mut query: Query<(&mut Transform, &WindSway)>,
) {
    let elapsed = time.elapsed_secs();

    // Lean axis is perpendicular to the wind direction on the ground plane
    let direction = wind.direction();
    let axis = Vec3::new(direction.z, 0.0, -direction.x);

    for (mut transform, sway) in &mut query {
        let angle = sway_angle(elapsed, sway.phase, wind.main, wind.turbulence, sway.amount);
        transform.rotation = sway.base_rotation * Quat::from_axis_angle(axis, angle);
    }
}
