//! Inventory domain: events for item collection and panel toggling.

use bevy::ecs::message::Message;

/// Event fired when a pickup in the world has been collected.
#[derive(Debug)]
pub struct ItemCollectedEvent {
    pub item_id: String,
}

impl Message for ItemCollectedEvent {}

/// Event fired when the inventory panel opens or closes.
#[derive(Debug)]
pub struct InventoryToggledEvent {
    pub open: bool,
}

impl Message for InventoryToggledEvent {}
