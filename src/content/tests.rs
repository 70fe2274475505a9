//! Content domain: tests for validation and definition helpers.

use super::data::{ItemDef, ItemKind, NpcDef, PlacedItemDef, WorldDef};
use super::registry::ContentRegistry;
use super::validation::{validate_content, ValidationError};

fn item(id: &str, name: &str) -> ItemDef {
    ItemDef {
        id: id.to_string(),
        name: name.to_string(),
        kind: ItemKind::Quest,
    }
}

fn npc(id: &str, name: &str, lines: &[&str]) -> NpcDef {
    NpcDef {
        id: id.to_string(),
        name: name.to_string(),
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

fn registry_with(items: Vec<ItemDef>, npcs: Vec<NpcDef>) -> ContentRegistry {
    let mut registry = ContentRegistry::default();
    for def in items {
        registry.items.insert(def.id.clone(), def);
    }
    for def in npcs {
        registry.npcs.insert(def.id.clone(), def);
    }
    registry
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_world_against_matching_registry_is_clean() {
    let registry = registry_with(
        vec![item("item_spirit_ember", "Spirit Ember")],
        vec![npc("npc_keeper", "The Keeper", &["Hello."])],
    );
    let errors = validate_content(&registry, &WorldDef::default());
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_missing_spawner_item_is_reported() {
    let registry = registry_with(Vec::new(), Vec::new());
    let errors = validate_content(&registry, &WorldDef::default());

    assert!(errors.iter().any(|e| matches!(
        e,
        ValidationError::MissingRef { field: "spirit_item_id", .. }
    )));
}

#[test]
fn test_npc_with_no_lines_is_reported() {
    let registry = registry_with(
        vec![item("item_spirit_ember", "Spirit Ember")],
        vec![npc("npc_mute", "Mute", &[])],
    );
    let errors = validate_content(&registry, &WorldDef::default());

    assert!(errors.iter().any(|e| matches!(
        e,
        ValidationError::EmptyField { field: "lines", .. }
    )));
}

#[test]
fn test_placed_item_with_unknown_id_is_reported() {
    let registry = registry_with(vec![item("item_spirit_ember", "Spirit Ember")], Vec::new());
    let mut world = WorldDef::default();
    world.placed_items.push(PlacedItemDef {
        item_id: "item_does_not_exist".to_string(),
        position: [1.0, 0.5, -2.0],
    });
    let errors = validate_content(&registry, &world);

    assert!(errors.iter().any(|e| matches!(
        e,
        ValidationError::MissingRef { source_type: "PlacedItem", .. }
    )));
}

// -----------------------------------------------------------------------------
// Definition helpers
// -----------------------------------------------------------------------------

#[test]
fn test_item_kind_labels() {
    assert_eq!(ItemKind::Consumable.label(), "Consumable");
    assert_eq!(ItemKind::Quest.label(), "Quest");
}
