//! Player domain: spawning and despawning the player character.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::Environment;
use crate::level::{Contacts, GameLayer, LevelEntity};
use crate::player::components::{
    CharacterBody, NetworkSync, Player, PlayerController, SpriteFrames,
};
use crate::player::errors::ControllerError;
use crate::player::resources::{AnimationTable, PlayerTuning};

impl PlayerController {
    /// Fresh controller facing right, with its idle animation already selected.
    pub fn initial(
        tuning: &PlayerTuning,
        table: &AnimationTable,
    ) -> Result<(Self, SpriteFrames), ControllerError> {
        let mut controller = Self::new(tuning.speed);
        let mut frames = SpriteFrames::new(tuning.sprite_width_right, tuning.ticks_per_frame);
        controller.select_facing_animation(table, tuning, &mut frames)?;
        Ok((controller, frames))
    }
}

/// Spawn the player standing on the floor at `spawn_x` and register it with
/// the environment.
pub fn spawn_player(
    commands: &mut Commands,
    spawn_x: f32,
    tuning: &PlayerTuning,
    table: &AnimationTable,
    environment: &mut Environment,
) -> Result<Entity, ControllerError> {
    let (controller, frames) = PlayerController::initial(tuning, table)?;

    let resting_y = environment.floor_y(tuning.floor_height);
    let body = CharacterBody::new(
        Vec2::new(spawn_x, resting_y - tuning.height),
        tuning,
        resting_y,
    );
    let center = environment.to_world(
        body.position.x,
        body.position.y,
        body.size.x,
        body.size.y,
    );
    let sync = NetworkSync::random();

    info!(
        "Spawning player {} at ({}, {}), resting line {}",
        sync.id, body.position.x, body.position.y, resting_y
    );

    let entity = commands
        .spawn((
            // Identity & control
            (Player, LevelEntity, controller, sync, Contacts::default()),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(Vec2::new(frames.base_width, body.size.y)),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 1.5),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(body.size.x, body.size.y),
                LockedAxes::ROTATION_LOCKED,
                GravityScale(0.0), // Gravity is applied by CharacterBody
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Geometry, GameLayer::Enemy]),
            ),
            body,
            frames,
        ))
        .id();

    environment.player = Some(entity);
    Ok(entity)
}

/// Unregister and despawn the player. Pending tube and death sequences go with it.
pub fn despawn_player(commands: &mut Commands, entity: Entity, environment: &mut Environment) {
    if environment.player == Some(entity) {
        environment.player = None;
    }
    commands.entity(entity).despawn();
    debug!("Despawned player {:?}", entity);
}
