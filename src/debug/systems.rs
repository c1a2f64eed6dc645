use bevy::prelude::*;

use crate::core::Environment;
use crate::debug::DebugState;
use crate::debug::ui::{DebugInfoOverlay, DebugPanel, overlay_text, spawn_debug_panel};
use crate::player::{CharacterBody, NetworkSync, Player, PlayerController, SyncSnapshot};

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut environment: ResMut<Environment>,
    player_query: Query<(&NetworkSync, &PlayerController, &CharacterBody), With<Player>>,
) {
    // F1: Cycle difficulty
    if keyboard.just_pressed(KeyCode::F1) {
        environment.difficulty = environment.difficulty.cycle();
        info!("[DEBUG] Difficulty {:?}", environment.difficulty);
    }

    // F2: Toggle invincibility
    if keyboard.just_pressed(KeyCode::F2) {
        environment.invincible = !environment.invincible;
        let msg = if environment.invincible {
            "Invincibility ON"
        } else {
            "Invincibility OFF"
        };
        info!("[DEBUG] {}", msg);
    }

    // F3: Dump sync snapshots
    if keyboard.just_pressed(KeyCode::F3) {
        for (sync, controller, body) in &player_query {
            let Some(snapshot) = SyncSnapshot::capture(sync, controller, body) else {
                info!("[DEBUG] {} is not synced", sync.id);
                continue;
            };
            match snapshot.to_json() {
                Ok(json) => info!("[DEBUG] {}", json),
                Err(e) => warn!("[DEBUG] Snapshot for {} failed: {}", sync.id, e),
            }
        }
    }

    // F4: Toggle info overlay
    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_info = !debug_state.show_info;
    }
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    environment: Res<Environment>,
    player_query: Query<(&PlayerController, &CharacterBody), With<Player>>,
    panel_query: Query<Entity, With<DebugPanel>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &panel_query {
            commands.entity(entity).despawn();
        }
        return;
    }

    if panel_query.is_empty() {
        spawn_debug_panel(&mut commands);
        return;
    }

    if let (Some((controller, body)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        **text = overlay_text(&environment, controller, body);
    }
}
