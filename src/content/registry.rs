//! ContentRegistry resource providing HashMap lookups for loaded content.

use bevy::prelude::*;
use std::collections::HashMap;
use std::path::Path;

use super::data::*;
use super::loader::load_all_content;
use super::validation::validate_content;

/// Central registry for all loaded game content.
/// Provides O(1) lookup by id for any content type.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub items: HashMap<String, ItemDef>,
    pub npcs: HashMap<String, NpcDef>,
}

impl ContentRegistry {
    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded: {} items, {} NPCs",
            self.items.len(),
            self.npcs.len()
        )
    }
}

/// World tuning loaded from world.ron (spawner, wind, placed items).
#[derive(Resource, Debug, Default)]
pub struct WorldConfig(pub WorldDef);

/// Startup system: load assets/data into the registry and world config.
/// Load failures degrade to empty content rather than aborting the app.
pub(crate) fn setup_content_registry(mut commands: Commands) {
    let base_path = Path::new("assets/data");
    let (registry, world, errors) = load_all_content(base_path);

    for error in &errors {
        warn!("{}", error);
    }

    for issue in validate_content(&registry, &world) {
        warn!("Content validation: {}", issue);
    }

    info!("{}", registry.summary());

    commands.insert_resource(registry);
    commands.insert_resource(WorldConfig(world));
}
