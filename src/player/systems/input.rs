//! Player domain: forwarding keyboard events to the controller.

use bevy::prelude::*;

use crate::core::Environment;
use crate::player::components::{Player, PlayerController, SpriteFrames};
use crate::player::resources::{AnimationTable, PlayerTuning};

pub(crate) fn forward_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    table: Res<AnimationTable>,
    tuning: Res<PlayerTuning>,
    mut environment: ResMut<Environment>,
    mut player_query: Query<(&mut PlayerController, &mut SpriteFrames), With<Player>>,
) {
    let key_events: Vec<(KeyCode, bool)> = keyboard
        .get_just_pressed()
        .map(|key| (*key, true))
        .chain(keyboard.get_just_released().map(|key| (*key, false)))
        .collect();
    if key_events.is_empty() {
        return;
    }

    for (mut controller, mut frames) in &mut player_query {
        for &(key, pressed) in &key_events {
            match controller.handle_key(
                key,
                pressed,
                &table,
                &tuning,
                &mut frames,
                &mut environment,
            ) {
                Ok(true) => debug!("Key {:?} pressed={}", key, pressed),
                Ok(false) => {}
                Err(e) => error!("Input for {:?} rejected: {}", key, e),
            }
        }
    }
}
