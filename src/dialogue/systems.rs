//! Dialogue domain: starting, advancing, and ending conversations.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::GameState;
use crate::dialogue::events::DialogueStartEvent;
use crate::dialogue::resources::ActiveDialogue;

pub(crate) fn begin_dialogue(
    mut events: MessageReader<DialogueStartEvent>,
    registry: Option<Res<ContentRegistry>>,
    mut dialogue: ResMut<ActiveDialogue>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in events.read() {
        let Some(registry) = registry.as_ref() else {
            warn!("No content registry; ignoring dialogue request");
            return;
        };

        let Some(npc) = registry.npcs.get(&event.npc_id) else {
            warn!("Unknown NPC '{}'; ignoring dialogue request", event.npc_id);
            continue;
        };

        if npc.lines.is_empty() {
            warn!("NPC '{}' has no dialogue lines", event.npc_id);
            continue;
        }

        dialogue.start(npc.name.clone(), npc.lines.clone());
        next_state.set(GameState::Dialogue);
        info!("Dialogue with {} ({} lines)", npc.name, dialogue.lines.len());
    }
}

/// E steps through the conversation; when the last line is dismissed the
/// game returns to Playing.
pub(crate) fn advance_dialogue(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut dialogue: ResMut<ActiveDialogue>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }

    dialogue.advance();
    if !dialogue.active {
        next_state.set(GameState::Playing);
    }
}
