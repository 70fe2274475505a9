//! UI domain: dialogue panel shown while talking to an NPC.

use bevy::prelude::*;

use crate::dialogue::ActiveDialogue;

/// Marker for the panel root
#[derive(Component)]
pub struct DialoguePanelUI;

/// Marker for the speaker name text
#[derive(Component)]
pub struct DialogueNameText;

/// Marker for the spoken line text
#[derive(Component)]
pub struct DialogueLineText;

pub(crate) fn spawn_dialogue_panel(mut commands: Commands) {
    commands
        .spawn((
            DialoguePanelUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(15.0),
                right: Val::Percent(15.0),
                bottom: Val::Px(40.0),
                padding: UiRect::all(Val::Px(16.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.1, 0.9)),
            BorderColor::all(Color::srgb(0.5, 0.45, 0.3)),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                DialogueNameText,
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.8, 0.5)),
            ));
            parent.spawn((
                DialogueLineText,
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.92, 0.92, 0.92)),
            ));
            parent.spawn((
                Text::new("E \u{25b8}"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgba(0.7, 0.7, 0.7, 0.8)),
            ));
        });
}

pub(crate) fn show_dialogue_panel(mut panel: Query<&mut Visibility, With<DialoguePanelUI>>) {
    for mut visibility in &mut panel {
        *visibility = Visibility::Visible;
    }
}

pub(crate) fn hide_dialogue_panel(mut panel: Query<&mut Visibility, With<DialoguePanelUI>>) {
    for mut visibility in &mut panel {
        *visibility = Visibility::Hidden;
    }
}

pub(crate) fn update_dialogue_panel(
    dialogue: Res<ActiveDialogue>,
    mut names: Query<&mut Text, (With<DialogueNameText>, Without<DialogueLineText>)>,
    mut lines: Query<&mut Text, (With<DialogueLineText>, Without<DialogueNameText>)>,
) {
    if !dialogue.is_changed() {
        return;
    }

    for mut text in &mut names {
        text.0 = dialogue.npc_name.clone();
    }
    for mut text in &mut lines {
        text.0 = dialogue.current_line().unwrap_or("").to_string();
    }
}
