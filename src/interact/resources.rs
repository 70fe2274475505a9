//! Interact domain: the current interaction target.

use bevy::prelude::*;

/// What the interaction ray is pointing at this tick, plus the HUD prompt
/// for it. Cleared whenever nothing usable is in reach.
#[derive(Resource, Debug, Default)]
pub struct InteractTarget {
    pub entity: Option<Entity>,
    pub prompt: Option<String>,
}

impl InteractTarget {
    pub fn set(&mut self, entity: Entity, prompt: String) {
        self.entity = Some(entity);
        self.prompt = Some(prompt);
    }

    pub fn clear(&mut self) {
        self.entity = None;
        self.prompt = None;
    }
}
