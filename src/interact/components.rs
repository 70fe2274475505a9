//! Interact domain: components for things the player can use.

use bevy::prelude::*;

/// A collectible item in the world. Interacting grants `item_id` and
/// despawns the entity.
#[derive(Component, Debug)]
pub struct Pickup {
    pub item_id: String,
}

/// An NPC the player can talk to. Interacting starts the dialogue defined
/// by `npc_id` in the content registry.
#[derive(Component, Debug)]
pub struct NpcTalk {
    pub npc_id: String,
}
