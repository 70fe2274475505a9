mod audio;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod dialogue;
mod effects;
mod interact;
mod inventory;
mod player;
mod spirits;
mod ui;
mod world;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Yurei Garden".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        player::PlayerPlugin,
        interact::InteractPlugin,
        inventory::InventoryPlugin,
        dialogue::DialoguePlugin,
        spirits::SpiritsPlugin,
        effects::EffectsPlugin,
        audio::GameAudioPlugin,
        world::WorldPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
