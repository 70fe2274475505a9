//! Inventory domain: applying collected items to the slot list.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::inventory::events::ItemCollectedEvent;
use crate::inventory::resources::Inventory;

pub(crate) fn apply_collected_items(
    mut events: MessageReader<ItemCollectedEvent>,
    registry: Option<Res<ContentRegistry>>,
    mut inventory: ResMut<Inventory>,
) {
    for event in events.read() {
        inventory.add(&event.item_id);

        let name = registry
            .as_ref()
            .and_then(|reg| reg.items.get(&event.item_id))
            .map(|def| def.name.as_str())
            .unwrap_or(event.item_id.as_str());

        info!(
            "Collected {} (x{} held)",
            name,
            inventory.count(&event.item_id)
        );
    }
}
