//! Audio domain: master volume settings.

use bevy::audio::Volume;
use bevy::prelude::*;

/// Step applied by the pause menu volume buttons.
pub const VOLUME_STEP: f32 = 0.1;

/// Master volume in [0, 1], mirrored into bevy's `GlobalVolume`.
#[derive(Resource, Debug, Clone)]
pub struct AudioSettings {
    pub master_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { master_volume: 0.8 }
    }
}

impl AudioSettings {
    pub fn raise(&mut self) {
        self.master_volume = (self.master_volume + VOLUME_STEP).clamp(0.0, 1.0);
    }

    pub fn lower(&mut self) {
        self.master_volume = (self.master_volume - VOLUME_STEP).clamp(0.0, 1.0);
    }

    /// Volume as a whole-percent label for the pause menu.
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.master_volume * 100.0)
    }
}

pub(crate) fn apply_master_volume(
    settings: Res<AudioSettings>,
    mut global_volume: ResMut<GlobalVolume>,
) {
    if settings.is_changed() {
        global_volume.volume = Volume::Linear(settings.master_volume);
    }
}
