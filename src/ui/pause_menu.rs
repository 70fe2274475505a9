//! UI domain: pause menu with resume and volume controls.

use bevy::prelude::*;

use crate::audio::AudioSettings;
use crate::core::GameState;

/// Marker for the pause menu root
#[derive(Component)]
pub struct PauseMenuUI;

/// Marker for the resume button
#[derive(Component)]
pub struct ResumeButton;

/// Marker for the volume-down button
#[derive(Component)]
pub struct VolumeDownButton;

/// Marker for the volume-up button
#[derive(Component)]
pub struct VolumeUpButton;

/// Marker for the volume percentage label
#[derive(Component)]
pub struct VolumeLabel;

const BUTTON_COLOR: Color = Color::srgb(0.2, 0.2, 0.26);
const BUTTON_HOVER_COLOR: Color = Color::srgb(0.3, 0.3, 0.38);

pub(crate) fn spawn_pause_menu(mut commands: Commands, settings: Res<AudioSettings>) {
    commands
        .spawn((
            PauseMenuUI,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Paused"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.95, 0.9)),
            ));

            parent
                .spawn((
                    ResumeButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(24.0), Val::Px(10.0)),
                        ..default()
                    },
                    BackgroundColor(BUTTON_COLOR),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Resume"),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.9, 0.9, 0.9)),
                    ));
                });

            // Volume row: [-] 80% [+]
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(12.0),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        VolumeDownButton,
                        Button,
                        Node {
                            padding: UiRect::axes(Val::Px(14.0), Val::Px(6.0)),
                            ..default()
                        },
                        BackgroundColor(BUTTON_COLOR),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new("-"),
                            TextFont {
                                font_size: 20.0,
                                ..default()
                            },
                            TextColor(Color::srgb(0.9, 0.9, 0.9)),
                        ));
                    });

                    row.spawn((
                        VolumeLabel,
                        Text::new(format!("Volume {}", settings.percent_label())),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.85, 0.85, 0.85)),
                    ));

                    row.spawn((
                        VolumeUpButton,
                        Button,
                        Node {
                            padding: UiRect::axes(Val::Px(14.0), Val::Px(6.0)),
                            ..default()
                        },
                        BackgroundColor(BUTTON_COLOR),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new("+"),
                            TextFont {
                                font_size: 20.0,
                                ..default()
                            },
                            TextColor(Color::srgb(0.9, 0.9, 0.9)),
                        ));
                    });
                });
        });
}

pub(crate) fn despawn_pause_menu(
    mut commands: Commands,
    menu: Query<Entity, With<PauseMenuUI>>,
) {
    for entity in &menu {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_pause_buttons(
    mut interactions: Query<
        (
            &Interaction,
            &mut BackgroundColor,
            Option<&ResumeButton>,
            Option<&VolumeDownButton>,
            Option<&VolumeUpButton>,
        ),
        (Changed<Interaction>, With<Button>),
    >,
    mut settings: ResMut<AudioSettings>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for (interaction, mut color, resume, down, up) in &mut interactions {
        match interaction {
            Interaction::Pressed => {
                if resume.is_some() {
                    next_state.set(GameState::Playing);
                } else if down.is_some() {
                    settings.lower();
                } else if up.is_some() {
                    settings.raise();
                }
                color.0 = BUTTON_COLOR;
            }
            Interaction::Hovered => color.0 = BUTTON_HOVER_COLOR,
            Interaction::None => color.0 = BUTTON_COLOR,
        }
    }
}

pub(crate) fn update_volume_label(
    settings: Res<AudioSettings>,
    mut query: Query<&mut Text, With<VolumeLabel>>,
) {
    if !settings.is_changed() {
        return;
    }

    for mut text in &mut query {
        text.0 = format!("Volume {}", settings.percent_label());
    }
}
