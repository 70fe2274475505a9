//! Interact domain: camera-forward targeting and E-key dispatch.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::dialogue::DialogueStartEvent;
use crate::interact::components::{NpcTalk, Pickup};
use crate::interact::resources::InteractTarget;
use crate::inventory::ItemCollectedEvent;
use crate::player::{GameLayer, PlayerCamera};

/// How far ahead of the camera the player can reach.
const INTERACT_REACH: f32 = 3.0;

pub(crate) fn find_interact_target(
    spatial_query: SpatialQuery,
    camera_query: Query<&GlobalTransform, With<PlayerCamera>>,
    registry: Option<Res<ContentRegistry>>,
    pickups: Query<&Pickup>,
    npcs: Query<&NpcTalk>,
    mut target: ResMut<InteractTarget>,
) {
    let Ok(camera) = camera_query.single() else {
        target.clear();
        return;
    };

    let filter = SpatialQueryFilter::from_mask(GameLayer::Interactable);
    let Some(hit) = spatial_query.cast_ray(
        camera.translation(),
        camera.forward(),
        INTERACT_REACH,
        true,
        &filter,
    ) else {
        target.clear();
        return;
    };

    if let Ok(pickup) = pickups.get(hit.entity) {
        let name = registry
            .as_ref()
            .and_then(|reg| reg.items.get(&pickup.item_id))
            .map(|def| def.name.clone())
            .unwrap_or_else(|| pickup.item_id.clone());
        target.set(hit.entity, format!("E — Take {}", name));
    } else if let Ok(npc) = npcs.get(hit.entity) {
        let name = registry
            .as_ref()
            .and_then(|reg| reg.npcs.get(&npc.npc_id))
            .map(|def| def.name.clone())
            .unwrap_or_else(|| npc.npc_id.clone());
        target.set(hit.entity, format!("E — Talk to {}", name));
    } else {
        target.clear();
    }
}

pub(crate) fn dispatch_interaction(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    target: Res<InteractTarget>,
    pickups: Query<&Pickup>,
    npcs: Query<&NpcTalk>,
    mut collected: MessageWriter<ItemCollectedEvent>,
    mut dialogue: MessageWriter<DialogueStartEvent>,
) {
    if !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }
    let Some(entity) = target.entity else {
        return;
    };

    if let Ok(pickup) = pickups.get(entity) {
        collected.write(ItemCollectedEvent {
            item_id: pickup.item_id.clone(),
        });
        commands.entity(entity).despawn();
    } else if let Ok(npc) = npcs.get(entity) {
        dialogue.write(DialogueStartEvent {
            npc_id: npc.npc_id.clone(),
        });
    }
}
