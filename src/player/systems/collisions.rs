//! Player domain: applying touch points and scheduling their follow-ups.

use std::collections::HashMap;

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{Environment, SoundCue};
use crate::level::PlayerTouched;
use crate::player::collisions::ContactSummary;
use crate::player::components::{CharacterBody, Player, PlayerController, SpriteFrames};
use crate::player::resources::{AnimationTable, PlayerTuning};
use crate::player::sequences::{DeathSequence, TubeSequence};

pub(crate) fn react_to_touch_points(
    mut commands: Commands,
    mut touched: MessageReader<PlayerTouched>,
    mut player_query: Query<
        (
            Entity,
            &mut PlayerController,
            &mut CharacterBody,
            &mut SpriteFrames,
        ),
        With<Player>,
    >,
    table: Res<AnimationTable>,
    tuning: Res<PlayerTuning>,
    environment: Res<Environment>,
    mut sounds: MessageWriter<SoundCue>,
) {
    let mut summaries: HashMap<Entity, ContactSummary> = HashMap::new();

    for event in touched.read() {
        let Ok((player, mut controller, mut body, mut frames)) = player_query.get_mut(event.player)
        else {
            continue;
        };
        summaries.entry(player).or_default().record(&event.touch);

        let reaction = match controller.react(
            &event.touch,
            &mut body,
            &mut frames,
            &table,
            &tuning,
            &environment,
        ) {
            Ok(reaction) => reaction,
            Err(e) => {
                error!("Touch with {:?} not applied: {}", event.touch.kind, e);
                continue;
            }
        };

        if reaction.start_tube_sequence {
            commands
                .entity(player)
                .insert(TubeSequence::new(tuning.tube_delay_secs));
        }

        if let Some(spin) = reaction.death {
            commands
                .entity(player)
                .insert((spin, DeathSequence::new(tuning.death_delay_secs)));
            sounds.write(SoundCue::Death);
        }
    }

    for (player, mut controller, mut body, _) in &mut player_query {
        let summary = summaries.get(&player).copied().unwrap_or_default();
        controller.finish_contacts(summary, &mut body);
    }
}
