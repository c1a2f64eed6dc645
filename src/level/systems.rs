//! Level domain: level flow, exit detection and backdrop systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::LevelCatalog;
use crate::core::{Environment, LevelLoaded, LevelTransition, LevelTransitionRequest};
use crate::level::components::{LevelEntity, ParallaxChannel, ParallaxLayer, TitleBanner};
use crate::level::spawn::spawn_level;
use crate::player::{AnimationTable, CharacterBody, Player, PlayerTuning, despawn_player};

pub(crate) fn load_first_level(
    mut commands: Commands,
    catalog: Res<LevelCatalog>,
    tuning: Res<PlayerTuning>,
    table: Res<AnimationTable>,
    mut environment: ResMut<Environment>,
    mut loaded: MessageWriter<LevelLoaded>,
) {
    load_current_level(
        &mut commands,
        &catalog,
        &tuning,
        &table,
        &mut environment,
        &mut loaded,
    );
}

/// Tear down the running level and load the requested one. Several requests
/// in one frame run once, with a restart taking precedence.
pub(crate) fn apply_level_transitions(
    mut commands: Commands,
    mut requests: MessageReader<LevelTransitionRequest>,
    level_query: Query<Entity, (With<LevelEntity>, Without<Player>)>,
    catalog: Res<LevelCatalog>,
    tuning: Res<PlayerTuning>,
    table: Res<AnimationTable>,
    mut environment: ResMut<Environment>,
    mut loaded: MessageWriter<LevelLoaded>,
) {
    let Some(transition) =
        LevelTransition::resolve(requests.read().map(|request| request.transition))
    else {
        return;
    };

    if let Some(player) = environment.player {
        despawn_player(&mut commands, player, &mut environment);
    }
    for entity in &level_query {
        commands.entity(entity).despawn();
    }

    if transition == LevelTransition::Advance {
        environment.advance_level();
    }
    info!(
        "[LEVEL] {:?} -> level #{} ({:?})",
        transition,
        environment.current_level,
        environment.current_level_id()
    );

    load_current_level(
        &mut commands,
        &catalog,
        &tuning,
        &table,
        &mut environment,
        &mut loaded,
    );
}

fn load_current_level(
    commands: &mut Commands,
    catalog: &LevelCatalog,
    tuning: &PlayerTuning,
    table: &AnimationTable,
    environment: &mut Environment,
    loaded: &mut MessageWriter<LevelLoaded>,
) {
    let Some(level) = environment
        .current_level_id()
        .and_then(|id| catalog.get(id))
        .cloned()
    else {
        error!(
            "[LEVEL] No level at index {} (catalog has {})",
            environment.current_level,
            catalog.levels.len()
        );
        return;
    };

    match spawn_level(commands, &level, tuning, table, environment) {
        Ok(_) => {
            loaded.write(LevelLoaded {
                level_index: environment.current_level,
            });
        }
        Err(e) => error!("[LEVEL] Failed to spawn '{}': {}", level.id, e),
    }
}

/// Walking past the right edge finishes the level.
pub(crate) fn detect_level_exit(
    player_query: Query<&CharacterBody, With<Player>>,
    environment: Res<Environment>,
    mut requests: MessageWriter<LevelTransitionRequest>,
) {
    for body in &player_query {
        if body.position.x > environment.screen_width {
            info!("[LEVEL] Player left the screen at x={}", body.position.x);
            requests.write(LevelTransitionRequest {
                transition: LevelTransition::Advance,
            });
        }
    }
}

pub(crate) fn scroll_parallax(
    mut layer_query: Query<(&mut ParallaxLayer, &mut Transform)>,
    environment: Res<Environment>,
) {
    for (mut layer, mut transform) in &mut layer_query {
        let speed = match layer.channel {
            ParallaxChannel::Hills => environment.parallax.hills,
            ParallaxChannel::Clouds => environment.parallax.clouds,
        };
        let offset = layer.scroll(speed);
        transform.translation.x = offset + layer.span - environment.screen_width / 2.0;
    }
}

pub(crate) fn hide_title_banner(
    mut banner_query: Query<&mut Visibility, With<TitleBanner>>,
    environment: Res<Environment>,
) {
    if !environment.movement_started {
        return;
    }

    for mut visibility in &mut banner_query {
        *visibility = Visibility::Hidden;
    }
}
