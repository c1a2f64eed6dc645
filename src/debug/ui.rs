use bevy::prelude::*;

use crate::core::Environment;
use crate::player::{CharacterBody, PlayerAction, PlayerController};

/// Root node of the info panel; despawning it removes the whole panel.
#[derive(Component, Debug)]
pub struct DebugPanel;

/// Text node refreshed with the player's state every frame.
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

const HOTKEY_HINT: &str = "F1 difficulty | F2 invincible | F3 snapshot | F4 hide";

pub(crate) fn spawn_debug_panel(commands: &mut Commands) {
    commands
        .spawn((
            DebugPanel,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                top: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.08, 0.05, 0.75)),
            ZIndex(500),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new(HOTKEY_HINT),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.7, 0.6)),
            ));
            panel.spawn((
                DebugInfoOverlay,
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.95, 0.85)),
            ));
        });
}

/// Panel text for one player.
pub(crate) fn overlay_text(
    environment: &Environment,
    controller: &PlayerController,
    body: &CharacterBody,
) -> String {
    let held: Vec<String> = PlayerAction::ALL
        .iter()
        .filter(|action| controller.is_latched(**action))
        .map(|action| format!("{:?}", action))
        .collect();
    let held = if held.is_empty() {
        "-".to_string()
    } else {
        held.join("+")
    };

    let movement = controller.movement;
    let flag = |allowed: bool, label: char| if allowed { label } else { '.' };

    format!(
        "Level {:?} | {:?}{}\nPos ({:.0}, {:.0}) facing {:?}{}\nKeys {} | moves {}{}{}{} | gravity {}\nTube {} | dying {}",
        environment.current_level_id(),
        environment.difficulty,
        if environment.invincible { " | invincible" } else { "" },
        body.position.x,
        body.position.y,
        controller.direction,
        if controller.is_idle { " (idle)" } else { "" },
        held,
        flag(movement.up, 'U'),
        flag(movement.down, 'D'),
        flag(movement.left, 'L'),
        flag(movement.right, 'R'),
        if body.gravity_enabled { "on" } else { "off" },
        controller.entering_tube,
        controller.is_dying
    )
}
