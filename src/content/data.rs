//! Data definitions for all RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Items (items.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub enum ItemKind {
    Consumable,
    Quest,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Consumable => "Consumable",
            ItemKind::Quest => "Quest",
        }
    }
}

// ============================================================================
// NPCs (npcs.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct NpcDef {
    pub id: String,
    pub name: String,
    pub lines: Vec<String>,
}

// ============================================================================
// World tuning (world.ron, single struct)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct WorldDef {
    pub spawner: SpawnerDef,
    pub wind: WindDef,
    pub placed_items: Vec<PlacedItemDef>,
    pub placed_npcs: Vec<PlacedNpcDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct SpawnerDef {
    /// Item granted when a spawned spirit is collected.
    pub spirit_item_id: String,
    pub count: u32,
    pub endless: bool,
    pub interval: f32,
    pub ring_radius: f32,
    pub ring_inner_fraction: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct WindDef {
    pub direction_degrees: f32,
    pub main: f32,
    pub turbulence: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct PlacedItemDef {
    pub item_id: String,
    pub position: [f32; 3],
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct PlacedNpcDef {
    pub npc_id: String,
    pub position: [f32; 3],
}

impl Default for WorldDef {
    fn default() -> Self {
        Self {
            spawner: SpawnerDef {
                spirit_item_id: "item_spirit_ember".to_string(),
                count: 8,
                endless: false,
                interval: 2.0,
                ring_radius: 10.0,
                ring_inner_fraction: 0.5,
            },
            wind: WindDef {
                direction_degrees: 30.0,
                main: 0.6,
                turbulence: 0.3,
            },
            placed_items: Vec::new(),
            placed_npcs: Vec::new(),
        }
    }
}
