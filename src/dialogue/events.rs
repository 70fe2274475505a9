//! Dialogue domain: events for starting conversations.

use bevy::ecs::message::Message;

/// Event fired when the player interacts with an NPC.
#[derive(Debug)]
pub struct DialogueStartEvent {
    pub npc_id: String,
}

impl Message for DialogueStartEvent {}
