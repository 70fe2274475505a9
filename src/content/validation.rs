//! Validation for cross-references and well-formedness of loaded content.

use super::data::WorldDef;
use super::registry::ContentRegistry;

/// A validation error with context about what failed.
#[derive(Debug)]
pub enum ValidationError {
    MissingRef {
        source_type: &'static str,
        source_id: String,
        field: &'static str,
        target_type: &'static str,
        missing_id: String,
    },
    EmptyField {
        source_type: &'static str,
        source_id: String,
        field: &'static str,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingRef {
                source_type,
                source_id,
                field,
                target_type,
                missing_id,
            } => write!(
                f,
                "{} '{}' references missing {} '{}' in field '{}'",
                source_type, source_id, target_type, missing_id, field
            ),
            ValidationError::EmptyField {
                source_type,
                source_id,
                field,
            } => write!(f, "{} '{}' has empty field '{}'", source_type, source_id, field),
        }
    }
}

/// Helper macro for checking an item reference exists
macro_rules! check_item_ref {
    ($errors:expr, $registry:expr, $source_type:expr, $source_id:expr, $field:expr, $ref_id:expr) => {
        if !$registry.items.contains_key($ref_id) {
            $errors.push(ValidationError::MissingRef {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                target_type: "Item",
                missing_id: $ref_id.to_string(),
            });
        }
    };
}

/// Validate all cross-references in the registry and world config.
/// Returns a list of validation errors, empty if everything checks out.
pub fn validate_content(registry: &ContentRegistry, world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, npc) in &registry.npcs {
        if npc.lines.is_empty() {
            errors.push(ValidationError::EmptyField {
                source_type: "Npc",
                source_id: id.clone(),
                field: "lines",
            });
        }
        if npc.name.is_empty() {
            errors.push(ValidationError::EmptyField {
                source_type: "Npc",
                source_id: id.clone(),
                field: "name",
            });
        }
    }

    for (id, item) in &registry.items {
        if item.name.is_empty() {
            errors.push(ValidationError::EmptyField {
                source_type: "Item",
                source_id: id.clone(),
                field: "name",
            });
        }
    }

    check_item_ref!(
        errors,
        registry,
        "Spawner",
        "world.spawner",
        "spirit_item_id",
        &world.spawner.spirit_item_id
    );

    for (index, placed) in world.placed_items.iter().enumerate() {
        let source_id = format!("world.placed_items[{}]", index);
        check_item_ref!(
            errors,
            registry,
            "PlacedItem",
            source_id,
            "item_id",
            &placed.item_id
        );
    }

    for (index, placed) in world.placed_npcs.iter().enumerate() {
        if !registry.npcs.contains_key(&placed.npc_id) {
            errors.push(ValidationError::MissingRef {
                source_type: "PlacedNpc",
                source_id: format!("world.placed_npcs[{}]", index),
                field: "npc_id",
                target_type: "Npc",
                missing_id: placed.npc_id.clone(),
            });
        }
    }

    errors
}
