//! Audio domain: footstep cadence driven by the head-bob phase.

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::player::{CameraBlend, CrouchState, MovementState, Player};

/// Event fired once per completed bob cycle while walking.
#[derive(Debug)]
pub struct FootstepEvent {
    pub pitch: f32,
}

impl Message for FootstepEvent {}

/// Tracks the last seen bob phase so cycle crossings can be counted.
#[derive(Resource, Debug, Default)]
pub struct FootstepState {
    pub last_phase: f32,
}

/// Loaded footstep clip; missing audio assets degrade to silent steps.
#[derive(Resource, Debug)]
pub struct FootstepClips {
    pub step: Handle<AudioSource>,
}

/// Number of full bob cycles crossed between two phases. A phase reset
/// (bob went inactive) counts as zero.
pub(crate) fn steps_crossed(prev_phase: f32, new_phase: f32) -> u32 {
    if new_phase < prev_phase {
        return 0;
    }
    let tau = std::f32::consts::TAU;
    ((new_phase / tau).floor() - (prev_phase / tau).floor()) as u32
}

/// Playback pitch for the current movement state.
pub(crate) fn pitch_for_state(state: MovementState, crouching: bool) -> f32 {
    if crouching {
        0.7
    } else if state == MovementState::Running {
        1.5
    } else {
        1.0
    }
}

pub(crate) fn load_footstep_clips(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(FootstepClips {
        step: asset_server.load("audio/footstep_grass.ogg"),
    });
}

/// One step per completed bob cycle. The bob phase is zeroed whenever the
/// player is airborne or idle, so steps stop with it.
pub(crate) fn emit_footsteps(
    mut state: ResMut<FootstepState>,
    mut events: MessageWriter<FootstepEvent>,
    query: Query<(&CameraBlend, &MovementState, &CrouchState), With<Player>>,
) {
    let Ok((blend, movement, crouch)) = query.single() else {
        return;
    };

    let steps = steps_crossed(state.last_phase, blend.bob_phase);
    state.last_phase = blend.bob_phase;

    for _ in 0..steps {
        events.write(FootstepEvent {
            pitch: pitch_for_state(*movement, crouch.is_crouching),
        });
    }
}

pub(crate) fn play_footsteps(
    mut commands: Commands,
    mut events: MessageReader<FootstepEvent>,
    clips: Option<Res<FootstepClips>>,
) {
    let Some(clips) = clips else {
        return;
    };

    for event in events.read() {
        commands.spawn((
            AudioPlayer::new(clips.step.clone()),
            PlaybackSettings::DESPAWN.with_speed(event.pitch),
        ));
    }
}
