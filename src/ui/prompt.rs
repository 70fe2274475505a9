//! UI domain: interaction prompt above the hotbar line.

use bevy::prelude::*;

use crate::interact::InteractTarget;

/// Marker for the prompt text element
#[derive(Component)]
pub struct InteractPromptText;

pub(crate) fn spawn_prompt_ui(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(80.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                InteractPromptText,
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgba(0.95, 0.95, 0.9, 0.9)),
            ));
        });
}

pub(crate) fn update_prompt(
    target: Res<InteractTarget>,
    mut query: Query<&mut Text, With<InteractPromptText>>,
) {
    if !target.is_changed() {
        return;
    }

    for mut text in &mut query {
        text.0 = target.prompt.clone().unwrap_or_default();
    }
}

/// The prompt only makes sense while playing; blank it elsewhere.
pub(crate) fn clear_prompt(mut query: Query<&mut Text, With<InteractPromptText>>) {
    for mut text in &mut query {
        text.0.clear();
    }
}
