//! Level domain: turning physics contacts into touch points.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::level::components::{Contacts, LevelCollider};
use crate::level::events::{PlayerTouched, TouchPoint};
use crate::player::{CharacterBody, ControllerError, Player};

/// Keep each player's `Contacts` in step with sensor overlaps reported by the
/// physics engine.
pub(crate) fn track_player_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut player_query: Query<&mut Contacts, With<Player>>,
) {
    for event in collision_start_events.read() {
        let Some((player, other)) =
            player_and_other(event.collider1, event.collider2, |e| player_query.contains(e))
        else {
            continue;
        };
        if let Ok(mut contacts) = player_query.get_mut(player) {
            contacts.entities.insert(other);
        }
    }

    for event in collision_end_events.read() {
        let Some((player, other)) =
            player_and_other(event.collider1, event.collider2, |e| player_query.contains(e))
        else {
            continue;
        };
        if let Ok(mut contacts) = player_query.get_mut(player) {
            contacts.entities.remove(&other);
        }
    }
}

/// Order a collider pair as `(player, other)`, or `None` when neither side is a
/// player.
pub(crate) fn player_and_other(
    collider1: Entity,
    collider2: Entity,
    is_player: impl Fn(Entity) -> bool,
) -> Option<(Entity, Entity)> {
    if is_player(collider1) {
        Some((collider1, collider2))
    } else if is_player(collider2) {
        Some((collider2, collider1))
    } else {
        None
    }
}

/// Write a `PlayerTouched` for every tracked contact whose rectangles still
/// overlap this step.
pub(crate) fn deliver_touch_points(
    mut player_query: Query<(Entity, &CharacterBody, &mut Contacts), With<Player>>,
    collider_query: Query<&LevelCollider>,
    mut touched: MessageWriter<PlayerTouched>,
) {
    for (player, body, mut contacts) in &mut player_query {
        let player_bounds = body.bounds();
        let mut stale = Vec::new();

        for &other in &contacts.entities {
            let collider = match collider_query
                .get(other)
                .map_err(|_| ControllerError::UnknownCollider(other))
            {
                Ok(collider) => collider,
                Err(e) => {
                    error!("Dropping contact: {}", e);
                    stale.push(other);
                    continue;
                }
            };

            if let Some(touch) =
                TouchPoint::between(other, collider.kind, &player_bounds, &collider.bounds)
            {
                touched.write(PlayerTouched { player, touch });
            }
        }

        for entity in stale {
            contacts.entities.remove(&entity);
        }
    }
}
