//! UI domain: toggleable inventory panel.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::inventory::{Inventory, InventoryToggledEvent};

/// Whether the inventory panel is on screen.
#[derive(Resource, Debug, Default)]
pub struct InventoryPanelState {
    pub open: bool,
}

/// Marker for the panel root
#[derive(Component)]
pub struct InventoryPanelUI;

/// Marker for the item list text
#[derive(Component)]
pub struct InventoryListText;

pub(crate) fn spawn_inventory_panel(mut commands: Commands) {
    commands
        .spawn((
            InventoryPanelUI,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(24.0),
                top: Val::Px(24.0),
                width: Val::Px(260.0),
                padding: UiRect::all(Val::Px(12.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.08, 0.08, 0.12, 0.85)),
            BorderColor::all(Color::srgb(0.4, 0.4, 0.5)),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Inventory"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.6)),
            ));
            parent.spawn((
                InventoryListText,
                Text::new("(empty)"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
            ));
        });
}

pub(crate) fn toggle_inventory_panel(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<InventoryPanelState>,
    mut events: MessageWriter<InventoryToggledEvent>,
    mut panel: Query<&mut Visibility, With<InventoryPanelUI>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyI) {
        return;
    }

    state.open = !state.open;
    events.write(InventoryToggledEvent { open: state.open });

    for mut visibility in &mut panel {
        *visibility = if state.open {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

pub(crate) fn update_inventory_list(
    inventory: Res<Inventory>,
    registry: Option<Res<ContentRegistry>>,
    mut query: Query<&mut Text, With<InventoryListText>>,
) {
    if !inventory.is_changed() {
        return;
    }

    let mut listing = String::new();
    for slot in &inventory.slots {
        let (name, kind) = registry
            .as_ref()
            .and_then(|reg| reg.items.get(&slot.item_id))
            .map(|def| (def.name.as_str(), def.kind.label()))
            .unwrap_or((slot.item_id.as_str(), "?"));

        listing.push_str(&format!("{} x{} ({})\n", name, slot.amount, kind));
    }
    if listing.is_empty() {
        listing.push_str("(empty)");
    }

    for mut text in &mut query {
        text.0 = listing.clone();
    }
}
