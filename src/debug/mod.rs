//! Debug overlay (dev-tools feature): F3 toggles a live readout of the
//! player simulation state.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::player::{CameraBlend, CrouchState, GroundSensor, Locomotion, MovementState, Player};

/// Resource tracking overlay visibility
#[derive(Resource, Debug, Default)]
pub struct DebugOverlayState {
    pub visible: bool,
}

/// Marker for the overlay text
#[derive(Component)]
pub struct DebugOverlayText;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlayState>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(Update, (toggle_overlay, update_overlay));
    }
}

fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        DebugOverlayText,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.6, 0.95, 0.6)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(12.0),
            bottom: Val::Px(12.0),
            ..default()
        },
        Visibility::Hidden,
    ));
}

fn toggle_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugOverlayState>,
    mut overlay: Query<&mut Visibility, With<DebugOverlayText>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    state.visible = !state.visible;
    for mut visibility in &mut overlay {
        *visibility = if state.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

fn update_overlay(
    state: Res<DebugOverlayState>,
    player: Query<
        (
            &MovementState,
            &GroundSensor,
            &CrouchState,
            &Locomotion,
            &LinearVelocity,
            &CameraBlend,
        ),
        With<Player>,
    >,
    mut overlay: Query<&mut Text, With<DebugOverlayText>>,
) {
    if !state.visible {
        return;
    }
    let Ok((movement, sensor, crouch, locomotion, velocity, blend)) = player.single() else {
        return;
    };

    let readout = format!(
        "state: {:?}\n\
         grounded: {} (last {:.2})\n\
         speed: {:.1}  vy: {:.2}\n\
         height: {:.2} -> {:.2}\n\
         crouching: {}  wants_stand: {}\n\
         fov: {:.1}  tilt: {:.2}",
        movement,
        sensor.grounded,
        sensor.last_grounded_at,
        locomotion.speed,
        velocity.y,
        crouch.current_height,
        crouch.target_height,
        crouch.is_crouching,
        crouch.wants_to_stand,
        blend.fov,
        blend.tilt,
    );

    for mut text in &mut overlay {
        text.0 = readout.clone();
    }
}
