//! Player domain: ticking tube and death sequences.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{Environment, LevelLoaded, LevelTransition, LevelTransitionRequest};
use crate::player::components::{CharacterBody, DeathSpin, Player, PlayerController};
use crate::player::sequences::{DeathSequence, TubeSequence, TubeStep};

pub(crate) fn tick_player_sequences(
    mut commands: Commands,
    time: Res<Time>,
    environment: Res<Environment>,
    mut tube_query: Query<(Entity, &mut TubeSequence, &mut CharacterBody), With<Player>>,
    mut death_query: Query<&mut DeathSequence, With<Player>>,
    mut requests: MessageWriter<LevelTransitionRequest>,
) {
    for (entity, mut sequence, mut body) in &mut tube_query {
        match sequence.tick(time.delta()) {
            Some(TubeStep::RestoreGravity) => {
                debug!("[TUBE] Sinking into tube");
                body.gravity_enabled = true;
            }
            Some(TubeStep::ExitLevel) => {
                info!("[TUBE] Leaving through the tube");
                body.position.x = environment.screen_width + 1.0;
            }
            None => {}
        }

        if sequence.is_done() {
            commands.entity(entity).remove::<TubeSequence>();
        }
    }

    for mut sequence in &mut death_query {
        if sequence.tick(time.delta()) {
            info!("[DEATH] Requesting level restart");
            requests.write(LevelTransitionRequest {
                transition: LevelTransition::Restart,
            });
        }
    }
}

/// A finished reload ends any death sequence still waiting on it.
pub(crate) fn complete_death_sequences(
    mut commands: Commands,
    mut loaded: MessageReader<LevelLoaded>,
    mut player_query: Query<(Entity, &mut PlayerController), With<Player>>,
) {
    let Some(level) = loaded.read().last() else {
        return;
    };

    for (entity, mut controller) in &mut player_query {
        if controller.is_dying {
            debug!("[DEATH] Cleared by reload of level #{}", level.level_index);
            controller.is_dying = false;
        }
        commands
            .entity(entity)
            .remove::<(DeathSequence, DeathSpin)>();
    }
}
