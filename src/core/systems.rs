//! Core domain: camera setup and environment upkeep.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::resources::Environment;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Keep the environment's screen size in step with the primary window.
pub(crate) fn track_screen_size(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut environment: ResMut<Environment>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let (width, height) = (window.width(), window.height());
    if width != environment.screen_width || height != environment.screen_height {
        debug!(
            "Screen resized: {}x{} -> {}x{}",
            environment.screen_width, environment.screen_height, width, height
        );
        environment.screen_width = width;
        environment.screen_height = height;
    }
}
