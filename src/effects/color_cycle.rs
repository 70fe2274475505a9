//! Effects domain: procedural hue cycling on standard materials.

use bevy::prelude::*;

/// How the hue moves over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    SineWave,
    Linear,
    PingPong,
}

/// Animates the base color of the entity's material through HSV space.
/// Channel flags mask the resulting RGB.
#[derive(Component, Debug, Clone)]
pub struct ColorCycle {
    pub mode: ColorMode,
    pub speed: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub use_red: bool,
    pub use_green: bool,
    pub use_blue: bool,
    /// Current hue in [0, 1].
    pub hue: f32,
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self {
            mode: ColorMode::SineWave,
            speed: 1.0,
            saturation: 0.8,
            brightness: 1.0,
            use_red: true,
            use_green: true,
            use_blue: true,
            hue: 0.0,
        }
    }
}

/// Advance the hue for one tick. Sine and ping-pong track absolute time;
/// linear accumulates and wraps.
pub(crate) fn advance_hue(mode: ColorMode, hue: f32, elapsed: f32, dt: f32, speed: f32) -> f32 {
    match mode {
        ColorMode::SineWave => (elapsed * speed * 0.5).sin() * 0.5 + 0.5,
        ColorMode::Linear => {
            let mut next = hue + dt * speed * 0.1;
            if next > 1.0 {
                next -= 1.0;
            }
            next
        }
        ColorMode::PingPong => {
            let x = (elapsed * speed * 0.5).rem_euclid(2.0);
            if x > 1.0 { 2.0 - x } else { x }
        }
    }
}

/// HSV -> RGB with per-channel masking.
pub(crate) fn masked_color(cycle: &ColorCycle) -> Color {
    let rgb = Color::hsv(cycle.hue * 360.0, cycle.saturation, cycle.brightness).to_srgba();
    Color::srgb(
        if cycle.use_red { rgb.red } else { 0.0 },
        if cycle.use_green { rgb.green } else { 0.0 },
        if cycle.use_blue { rgb.blue } else { 0.0 },
    )
}

pub(crate) fn animate_color_cycles(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(&mut ColorCycle, &MeshMaterial3d<StandardMaterial>)>,
) {
    let elapsed = time.elapsed_secs();
    let dt = time.delta_secs();

    for (mut cycle, material_handle) in &mut query {
        cycle.hue = advance_hue(cycle.mode, cycle.hue, elapsed, dt, cycle.speed);

        let Some(material) = materials.get_mut(&material_handle.0) else {
            continue;
        };
        material.base_color = masked_color(&cycle);
    }
}
