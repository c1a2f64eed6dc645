//! Developer hotkeys for fast iteration and testing.
//!
//! Features:
//! - F1: cycle difficulty
//! - F2: toggle invincibility
//! - F3: log the player's sync snapshot
//! - F4: toggle the info overlay

mod systems;
mod ui;


use bevy::prelude::*;

use crate::debug::systems::{handle_debug_hotkeys, update_debug_info_overlay};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the info overlay (position, difficulty, flags)
    pub show_info: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (handle_debug_hotkeys, update_debug_info_overlay).chain(),
        );
    }
}
