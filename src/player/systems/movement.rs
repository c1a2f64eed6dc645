//! Player domain: movement step, body integration and transform sync.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{Environment, SoundCue};
use crate::player::components::{
    CharacterBody, DeathSpin, Player, PlayerController, SpriteFrames,
};
use crate::player::resources::{AnimationTable, PlayerTuning};

const BODY_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
const INVERTED_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);

pub(crate) fn step_players(
    mut player_query: Query<
        (&mut PlayerController, &mut CharacterBody, &mut SpriteFrames),
        With<Player>,
    >,
    table: Res<AnimationTable>,
    tuning: Res<PlayerTuning>,
    mut environment: ResMut<Environment>,
    mut sounds: MessageWriter<SoundCue>,
) {
    for (mut controller, mut body, mut frames) in &mut player_query {
        match controller.step(&mut body, &mut frames, &table, &tuning, &mut environment) {
            Ok(outcome) if outcome.jumped => {
                sounds.write(SoundCue::Jump);
            }
            Ok(_) => {}
            Err(e) => error!("Movement step failed: {}", e),
        }
    }
}

/// Gravity tick and animation frame advance.
pub(crate) fn update_character_bodies(
    mut body_query: Query<(&mut CharacterBody, &mut SpriteFrames)>,
) {
    for (mut body, mut frames) in &mut body_query {
        body.update();
        frames.advance();
    }
}

/// Mirror the screen-space body onto the entity's transform and sprite.
pub(crate) fn sync_body_transforms(
    mut body_query: Query<(
        &CharacterBody,
        &SpriteFrames,
        Option<&DeathSpin>,
        &mut Transform,
        &mut Sprite,
    )>,
    environment: Res<Environment>,
) {
    for (body, frames, spin, mut transform, mut sprite) in &mut body_query {
        let mut center = environment.to_world(
            body.position.x,
            body.position.y,
            body.size.x,
            body.size.y,
        );
        let mut rotation = Quat::IDENTITY;

        if let Some(spin) = spin {
            // Screen offsets grow downward
            center += Vec2::new(spin.offset.x, -spin.offset.y);
            rotation = Quat::from_rotation_z(spin.angle);
        }

        transform.translation = center.extend(transform.translation.z);
        transform.rotation = rotation;

        sprite.custom_size = Some(Vec2::new(frames.base_width, body.size.y));
        sprite.color = if frames.inverted {
            INVERTED_COLOR
        } else {
            BODY_COLOR
        };
    }
}
