//! Effects domain: tests for hue animation and wind sway.

use super::color_cycle::{advance_hue, masked_color, ColorCycle, ColorMode};
use super::wind::sway_angle;

// -----------------------------------------------------------------------------
// Hue animation tests
// -----------------------------------------------------------------------------

#[test]
fn test_sine_hue_stays_in_unit_range() {
    for i in 0..200 {
        let elapsed = i as f32 * 0.137;
        let hue = advance_hue(ColorMode::SineWave, 0.0, elapsed, 0.016, 2.5);
        assert!((0.0..=1.0).contains(&hue), "hue out of range: {}", hue);
    }
}

#[test]
fn test_linear_hue_accumulates_and_wraps() {
    let mut hue = 0.95;
    hue = advance_hue(ColorMode::Linear, hue, 0.0, 1.0, 1.0);
    // 0.95 + 0.1 wraps past 1.0
    assert!((hue - 0.05).abs() < 1e-5);

    let advanced = advance_hue(ColorMode::Linear, 0.2, 0.0, 0.5, 1.0);
    assert!((advanced - 0.25).abs() < 1e-5);
}

#[test]
fn test_ping_pong_hue_reflects_at_the_ends() {
    // 0.5 * elapsed * speed ramps 0 -> 1 -> 0 over a period of 4s at speed 1
    let up = advance_hue(ColorMode::PingPong, 0.0, 1.0, 0.016, 1.0);
    assert!((up - 0.5).abs() < 1e-5);

    let peak = advance_hue(ColorMode::PingPong, 0.0, 2.0, 0.016, 1.0);
    assert!((peak - 1.0).abs() < 1e-5);

    let down = advance_hue(ColorMode::PingPong, 0.0, 3.0, 0.016, 1.0);
    assert!((down - 0.5).abs() < 1e-5);
}

#[test]
fn test_channel_masks_zero_out_components() {
    let cycle = ColorCycle {
        hue: 0.0, // pure red at full saturation
        saturation: 1.0,
        brightness: 1.0,
        use_red: false,
        ..Default::default()
    };

    let srgba = masked_color(&cycle).to_srgba();
    assert_eq!(srgba.red, 0.0);

    let unmasked = ColorCycle {
        hue: 0.0,
        saturation: 1.0,
        brightness: 1.0,
        ..Default::default()
    };
    let srgba = masked_color(&unmasked).to_srgba();
    assert!(srgba.red > 0.9);
}

// -----------------------------------------------------------------------------
// Wind sway tests
// -----------------------------------------------------------------------------

#[test]
fn test_zero_wind_means_zero_sway() {
    for i in 0..50 {
        let elapsed = i as f32 * 0.21;
        assert_eq!(sway_angle(elapsed, 1.3, 0.0, 0.0, 0.2), 0.0);
    }
}

#[test]
fn test_sway_is_bounded_by_wind_strength() {
    let (main, turbulence, amount) = (0.6, 0.3, 0.2);
    let bound = amount * (main + turbulence * 0.35) + 1e-6;

    for i in 0..500 {
        let elapsed = i as f32 * 0.073;
        let angle = sway_angle(elapsed, 0.8, main, turbulence, amount);
        assert!(angle.abs() <= bound, "sway {} exceeds bound {}", angle, bound);
    }
}

#[test]
fn test_phase_staggers_entities() {
    let a = sway_angle(1.0, 0.0, 0.6, 0.3, 0.2);
    let b = sway_angle(1.0, 2.0, 0.6, 0.3, 0.2);
    assert!((a - b).abs() > 1e-4);
}
