//! Level domain: collider kinds, physics layers and level markers.

use std::collections::BTreeSet;

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::Bounds;

/// Collision layers for physics filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Player character
    Player,
    /// Tubes, platforms and scenery
    Geometry,
    /// Ground and flying enemies
    Enemy,
}

/// What a level collider is. Decides how the player reacts to touching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect)]
pub enum ColliderKind {
    Tube,
    JumpPlatform,
    GroundEnemy,
    FlyingEnemy,
    Scenery,
}

impl ColliderKind {
    pub fn is_enemy(self) -> bool {
        matches!(self, ColliderKind::GroundEnemy | ColliderKind::FlyingEnemy)
    }

    pub fn layer(self) -> GameLayer {
        if self.is_enemy() {
            GameLayer::Enemy
        } else {
            GameLayer::Geometry
        }
    }

    pub fn color(self) -> Color {
        match self {
            ColliderKind::Tube => Color::srgb(0.2, 0.7, 0.3),
            ColliderKind::JumpPlatform => Color::srgb(0.6, 0.45, 0.3),
            ColliderKind::GroundEnemy => Color::srgb(0.8, 0.25, 0.2),
            ColliderKind::FlyingEnemy => Color::srgb(0.6, 0.3, 0.8),
            ColliderKind::Scenery => Color::srgb(0.5, 0.5, 0.55),
        }
    }
}

/// Screen-space rectangle and kind of a level collider.
#[derive(Component, Debug, Clone, Copy)]
pub struct LevelCollider {
    pub kind: ColliderKind,
    pub bounds: Bounds,
}

/// Marker for every entity torn down with the level, player included.
#[derive(Component, Debug)]
pub struct LevelEntity;

/// Level colliders the player currently overlaps, ordered so touch points are
/// delivered in a stable order.
#[derive(Component, Debug, Default)]
pub struct Contacts {
    pub entities: BTreeSet<Entity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallaxChannel {
    Hills,
    Clouds,
}

/// Pixels scrolled per tick for a parallax speed of 1.0.
pub const PARALLAX_PIXELS: f32 = 10.0;

/// A background strip twice the screen width, scrolled by one of the
/// environment's parallax speeds.
#[derive(Component, Debug, Clone)]
pub struct ParallaxLayer {
    pub channel: ParallaxChannel,
    pub offset: f32,
    /// Width of one repeat of the strip.
    pub span: f32,
}

impl ParallaxLayer {
    pub fn new(channel: ParallaxChannel, span: f32) -> Self {
        Self {
            channel,
            offset: 0.0,
            span,
        }
    }

    /// Move the strip against the given speed and wrap it into `(-span, 0]`.
    pub fn scroll(&mut self, speed: f32) -> f32 {
        if self.span <= 0.0 {
            return self.offset;
        }

        self.offset -= speed * PARALLAX_PIXELS;
        self.offset %= self.span;
        if self.offset > 0.0 {
            self.offset -= self.span;
        }
        self.offset
    }
}

/// Level name shown until the player first moves.
#[derive(Component, Debug)]
pub struct TitleBanner;
