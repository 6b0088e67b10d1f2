//! HUD: popup messages, the check/reset buttons, the start overlay, and the
//! legend. The core only classifies; every message string lives here.

use bevy::prelude::*;

use crate::{
    game::session::FireSession,
    visual::verdict::{VerdictDisplay, begin_check, clear_board},
};

/// Severity of a popup, for styling only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Info,
    Warning,
    Success,
    Error,
}

impl PopupKind {
    fn background(self) -> Color {
        match self {
            PopupKind::Info => Color::srgba(0.12, 0.23, 0.54, 0.92),
            PopupKind::Warning => Color::srgba(0.48, 0.25, 0.05, 0.92),
            PopupKind::Success => Color::srgba(0.08, 0.36, 0.16, 0.92),
            PopupKind::Error => Color::srgba(0.45, 0.11, 0.11, 0.92),
        }
    }
}

/// A dismissible HUD message
#[derive(Debug, Clone)]
pub struct Popup {
    /// Stable id; pushing the same id twice shows one popup
    pub id: &'static str,
    pub message: String,
    pub kind: PopupKind,
}

/// The current popup list, newest last
#[derive(Resource, Debug, Default)]
pub struct Popups {
    items: Vec<Popup>,
}

impl Popups {
    pub fn push(&mut self, popup: Popup) {
        if self.items.iter().any(|p| p.id == popup.id) {
            return;
        }
        self.items.push(popup);
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|p| p.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Popup> {
        self.items.iter()
    }
}

/// UI-only state: whether the start overlay has been dismissed and whether
/// the first-tank tip has fired
#[derive(Resource, Debug, Default)]
pub struct UiState {
    pub started: bool,
    pub tip_shown: bool,
}

#[derive(Component)]
pub struct PopupContainer;

#[derive(Component)]
pub struct PopupRow;

#[derive(Component)]
pub struct DismissButton {
    pub id: &'static str,
}

#[derive(Component)]
pub struct CheckButton;

#[derive(Component)]
pub struct CheckButtonLabel;

#[derive(Component)]
pub struct ResetButton;

#[derive(Component)]
pub struct StartOverlay;

#[derive(Component)]
pub struct StartDismissButton;

#[derive(Component)]
pub struct ProgressText;

const BUTTON_CHECK: Color = Color::srgb(0.91, 0.36, 0.15);
const BUTTON_RESET: Color = Color::srgb(0.28, 0.37, 0.86);
const PANEL_BG: Color = Color::srgba(0.0, 0.0, 0.0, 0.55);

/// System: build the static HUD once at startup
pub fn spawn_hud(mut commands: Commands) {
    // Popup column, top centre
    commands.spawn((
        PopupContainer,
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(8.0),
            ..default()
        },
    ));

    // Control buttons, bottom centre
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            column_gap: Val::Px(16.0),
            ..default()
        })
        .with_children(|parent| {
            spawn_button(parent, "Check Solution", BUTTON_CHECK, CheckButton, true);
            spawn_button(parent, "Reset Game", BUTTON_RESET, ResetButton, false);
        });

    // Progress line, bottom left
    commands.spawn((
        ProgressText,
        Text::new("checks: 0"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));

    // Legend, top right
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                right: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(3.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(PANEL_BG),
            BorderRadius::all(Val::Px(8.0)),
        ))
        .with_children(|parent| {
            for line in [
                "Legend",
                "Mountain: click to place a tank",
                "Tank: covers connected roads",
                "Green road: protected",
                "Red road: burning",
                "Goal: cover every road with as few tanks as possible",
            ] {
                parent.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 12.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            }
        });

    // Start overlay
    commands
        .spawn((
            StartOverlay,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(14.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.65)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("The forest is on fire!"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.85, 0.6)),
            ));
            parent.spawn((
                Text::new(
                    "Place water tanks on mountains to put out the fire on connected roads.\n\
                     Each tank protects every road linked to its mountain.\n\
                     Find the minimum number of tanks so that all roads are safe!",
                ),
                TextFont {
                    font_size: 17.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            spawn_button(parent, "Start", BUTTON_CHECK, StartDismissButton, false);
        });
}

fn spawn_button(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    color: Color,
    marker: impl Component,
    is_check: bool,
) {
    parent
        .spawn((
            Button,
            marker,
            Node {
                padding: UiRect::axes(Val::Px(26.0), Val::Px(12.0)),
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(color),
            BorderRadius::all(Val::Px(22.0)),
        ))
        .with_children(|button| {
            let text = (
                Text::new(label),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            );
            if is_check {
                button.spawn((text, CheckButtonLabel));
            } else {
                button.spawn(text);
            }
        });
}

/// System: route button presses to the session helpers
pub fn handle_buttons(
    mut commands: Commands,
    check: Query<&Interaction, (Changed<Interaction>, With<CheckButton>)>,
    reset: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
    start: Query<&Interaction, (Changed<Interaction>, With<StartDismissButton>)>,
    dismiss: Query<(&Interaction, &DismissButton), Changed<Interaction>>,
    overlay: Query<Entity, With<StartOverlay>>,
    mut ui_state: ResMut<UiState>,
    mut session: ResMut<FireSession>,
    mut display: ResMut<VerdictDisplay>,
    mut popups: ResMut<Popups>,
) {
    if check.iter().any(|i| *i == Interaction::Pressed) {
        begin_check(&mut session, &mut display);
    }

    if reset.iter().any(|i| *i == Interaction::Pressed) {
        clear_board(&mut session, &mut display, &mut popups);
    }

    if start.iter().any(|i| *i == Interaction::Pressed) {
        for entity in &overlay {
            commands.entity(entity).despawn();
        }
        ui_state.started = true;
        info!("Game started");
    }

    for (interaction, button) in &dismiss {
        if *interaction == Interaction::Pressed {
            popups.dismiss(button.id);
        }
    }
}

/// System: rebuild popup rows whenever the popup list changes
pub fn sync_popups(
    mut commands: Commands,
    popups: Res<Popups>,
    container: Query<Entity, With<PopupContainer>>,
    rows: Query<Entity, With<PopupRow>>,
) {
    if !popups.is_changed() {
        return;
    }

    for row in &rows {
        commands.entity(row).despawn();
    }

    let Ok(container) = container.single() else {
        return;
    };

    commands.entity(container).with_children(|parent| {
        for popup in popups.iter() {
            parent
                .spawn((
                    PopupRow,
                    Node {
                        max_width: Val::Px(460.0),
                        padding: UiRect::all(Val::Px(12.0)),
                        column_gap: Val::Px(10.0),
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(popup.kind.background()),
                    BorderRadius::all(Val::Px(8.0)),
                ))
                .with_children(|row| {
                    row.spawn((
                        Text::new(popup.message.clone()),
                        TextFont {
                            font_size: 15.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                    row.spawn((
                        Button,
                        DismissButton { id: popup.id },
                        Node {
                            padding: UiRect::axes(Val::Px(8.0), Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.15)),
                        BorderRadius::all(Val::Px(6.0)),
                    ))
                    .with_children(|b| {
                        b.spawn((
                            Text::new("x"),
                            TextFont {
                                font_size: 14.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                        ));
                    });
                });
        }
    });
}

/// System: one-shot tip once the first tank goes down
pub fn watch_first_tank(
    session: Res<FireSession>,
    mut ui_state: ResMut<UiState>,
    mut popups: ResMut<Popups>,
) {
    if ui_state.tip_shown || !ui_state.started || session.tank_count() == 0 {
        return;
    }

    popups.push(Popup {
        id: "first-tank-tip",
        message: "Water tanks protect all connected roads. Try to cover every road with as \
                  few tanks as possible!"
            .to_string(),
        kind: PopupKind::Info,
    });
    ui_state.tip_shown = true;
}

/// System: keep the progress line and the check button label current
pub fn update_hud_text(
    session: Res<FireSession>,
    mut progress: Query<&mut Text, (With<ProgressText>, Without<CheckButtonLabel>)>,
    mut check_label: Query<&mut Text, With<CheckButtonLabel>>,
) {
    if !session.is_changed() {
        return;
    }

    for mut text in &mut progress {
        text.0 = session.progress().display_string();
    }

    for mut text in &mut check_label {
        text.0 = if session.is_evaluating() {
            "Checking...".to_string()
        } else {
            "Check Solution".to_string()
        };
    }
}
