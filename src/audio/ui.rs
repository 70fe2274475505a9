//! Audio domain: UI open/close sounds.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::inventory::InventoryToggledEvent;

/// Loaded UI clips; missing audio assets degrade to silence.
#[derive(Resource, Debug)]
pub struct UiClips {
    pub open: Handle<AudioSource>,
    pub close: Handle<AudioSource>,
}

pub(crate) fn load_ui_clips(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(UiClips {
        open: asset_server.load("audio/ui_open.ogg"),
        close: asset_server.load("audio/ui_close.ogg"),
    });
}

pub(crate) fn play_inventory_sounds(
    mut commands: Commands,
    mut events: MessageReader<InventoryToggledEvent>,
    clips: Option<Res<UiClips>>,
) {
    let Some(clips) = clips else {
        return;
    };

    for event in events.read() {
        let clip = if event.open {
            clips.open.clone()
        } else {
            clips.close.clone()
        };
        commands.spawn((AudioPlayer::new(clip), PlaybackSettings::DESPAWN));
    }
}
