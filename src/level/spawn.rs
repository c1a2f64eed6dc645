//! Level domain: spawning level geometry, backdrop and the player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LevelDef;
use crate::core::{Bounds, Environment, ParallaxSpeeds};
use crate::level::components::{
    ColliderKind, GameLayer, LevelCollider, LevelEntity, ParallaxChannel, ParallaxLayer,
    TitleBanner,
};
use crate::player::{AnimationTable, ControllerError, PlayerTuning, spawn_player};

const HILLS_HEIGHT: f32 = 160.0;
const CLOUDS_Y: f32 = 60.0;
const CLOUDS_HEIGHT: f32 = 80.0;

/// Spawn everything a level needs and return the new player entity.
pub(crate) fn spawn_level(
    commands: &mut Commands,
    level: &LevelDef,
    tuning: &PlayerTuning,
    table: &AnimationTable,
    environment: &mut Environment,
) -> Result<Entity, ControllerError> {
    environment.parallax = ParallaxSpeeds {
        hills: 0.0,
        clouds: level.cloud_drift,
    };
    environment.movement_started = false;

    spawn_backdrop(commands, tuning, environment);

    for collider in &level.colliders {
        spawn_collider(commands, collider.kind, collider.bounds, environment);
    }

    commands.spawn((
        LevelEntity,
        TitleBanner,
        Text2d::new(level.name.clone()),
        TextFont {
            font_size: 48.0,
            ..default()
        },
        Transform::from_xyz(0.0, environment.screen_height / 4.0, 10.0),
    ));

    let player = spawn_player(commands, level.spawn_x, tuning, table, environment)?;

    info!(
        "[LEVEL] Spawned '{}' ({} colliders, cloud drift {})",
        level.id,
        level.colliders.len(),
        level.cloud_drift
    );

    Ok(player)
}

fn spawn_backdrop(commands: &mut Commands, tuning: &PlayerTuning, environment: &Environment) {
    let (width, height) = (environment.screen_width, environment.screen_height);
    let floor_top = environment.floor_y(tuning.floor_height);

    let floor = environment.to_world(0.0, floor_top, width, tuning.floor_height);
    commands.spawn((
        LevelEntity,
        Sprite {
            color: Color::srgb(0.35, 0.25, 0.15),
            custom_size: Some(Vec2::new(width, tuning.floor_height)),
            ..default()
        },
        Transform::from_xyz(floor.x, floor.y, 0.0),
    ));

    let strips = [
        (
            ParallaxChannel::Clouds,
            CLOUDS_Y,
            CLOUDS_HEIGHT,
            Color::srgba(0.95, 0.95, 1.0, 0.6),
            -8.0,
        ),
        (
            ParallaxChannel::Hills,
            floor_top - HILLS_HEIGHT,
            HILLS_HEIGHT,
            Color::srgb(0.3, 0.55, 0.3),
            -5.0,
        ),
    ];

    for (channel, y, strip_height, color, z) in strips {
        let center = environment.to_world(0.0, y, width * 2.0, strip_height);
        commands.spawn((
            LevelEntity,
            ParallaxLayer::new(channel, width),
            Sprite {
                color,
                custom_size: Some(Vec2::new(width * 2.0, strip_height)),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, z),
        ));
    }

    debug!("Backdrop spawned for {}x{} screen", width, height);
}

fn spawn_collider(
    commands: &mut Commands,
    kind: ColliderKind,
    bounds: Bounds,
    environment: &Environment,
) {
    let center = environment.to_world(bounds.x, bounds.y, bounds.width, bounds.height);
    // Tubes draw over the player so it can sink into them
    let z = if kind == ColliderKind::Tube { 2.0 } else { 1.0 };

    commands.spawn((
        LevelEntity,
        LevelCollider { kind, bounds },
        Sprite {
            color: kind.color(),
            custom_size: Some(Vec2::new(bounds.width, bounds.height)),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, z),
        Collider::rectangle(bounds.width, bounds.height),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(kind.layer(), [GameLayer::Player]),
    ));
}
