//! UI domain: HUD prompt, inventory and dialogue panels, pause menu.

mod dialogue_panel;
mod inventory_panel;
mod pause_menu;
mod prompt;

pub use inventory_panel::InventoryPanelState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::dialogue_panel::{
    hide_dialogue_panel, show_dialogue_panel, spawn_dialogue_panel, update_dialogue_panel,
};
use crate::ui::inventory_panel::{
    spawn_inventory_panel, toggle_inventory_panel, update_inventory_list,
};
use crate::ui::pause_menu::{
    despawn_pause_menu, handle_pause_buttons, spawn_pause_menu, update_volume_label,
};
use crate::ui::prompt::{clear_prompt, spawn_prompt_ui, update_prompt};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InventoryPanelState>()
            .add_systems(
                Startup,
                (spawn_prompt_ui, spawn_inventory_panel, spawn_dialogue_panel),
            )
            .add_systems(
                Update,
                (update_prompt, toggle_inventory_panel, update_inventory_list)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), clear_prompt)
            .add_systems(OnEnter(GameState::Dialogue), show_dialogue_panel)
            .add_systems(OnExit(GameState::Dialogue), hide_dialogue_panel)
            .add_systems(
                Update,
                update_dialogue_panel.run_if(in_state(GameState::Dialogue)),
            )
            .add_systems(OnEnter(GameState::Paused), spawn_pause_menu)
            .add_systems(OnExit(GameState::Paused), despawn_pause_menu)
            .add_systems(
                Update,
                (handle_pause_buttons, update_volume_label)
                    .run_if(in_state(GameState::Paused)),
            );
    }
}
