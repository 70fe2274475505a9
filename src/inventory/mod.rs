//! Inventory domain: plugin wiring and public exports.

mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{InventoryToggledEvent, ItemCollectedEvent};
pub use resources::{Inventory, ItemSlot};

use bevy::prelude::*;

use crate::inventory::systems::apply_collected_items;

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Inventory>()
            .add_message::<ItemCollectedEvent>()
            .add_message::<InventoryToggledEvent>()
            .add_systems(Update, apply_collected_items);
    }
}
