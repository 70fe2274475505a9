//! Content domain: RON-driven definitions, loading, and validation.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{
    ItemDef, ItemKind, NpcDef, PlacedItemDef, PlacedNpcDef, SpawnerDef, WindDef, WorldDef,
};
pub use loader::ContentLoadError;
pub use registry::{ContentRegistry, WorldConfig};
pub use validation::{validate_content, ValidationError};

use bevy::prelude::*;

use crate::content::registry::setup_content_registry;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ItemDef>()
            .register_type::<ItemKind>()
            .register_type::<NpcDef>()
            .register_type::<WorldDef>()
            .add_systems(Startup, setup_content_registry);
    }
}
