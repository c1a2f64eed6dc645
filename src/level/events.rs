//! Level domain: touch points delivered to the player.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::{Bounds, TouchSides};
use crate::level::components::ColliderKind;

/// One overlap between the player and a level collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub other: Entity,
    pub kind: ColliderKind,
    /// Faces of the player in contact.
    pub sides: TouchSides,
    /// Faces of the collider in contact.
    pub other_sides: TouchSides,
    /// Left edge of the collider.
    pub other_x: f32,
}

impl TouchPoint {
    /// Touch point for two screen-space rectangles, or `None` if they do not
    /// overlap.
    pub fn between(
        other: Entity,
        kind: ColliderKind,
        player: &Bounds,
        collider: &Bounds,
    ) -> Option<Self> {
        let (sides, other_sides) = player.touch_sides(collider)?;
        Some(Self {
            other,
            kind,
            sides,
            other_sides,
            other_x: collider.x,
        })
    }

    /// +1.0 to push the player right (away from the collider), -1.0 for left.
    pub fn push_direction(&self, player_x: f32) -> f32 {
        if self.sides.left {
            1.0
        } else if self.sides.right {
            -1.0
        } else if player_x >= self.other_x {
            1.0
        } else {
            -1.0
        }
    }
}

/// Written every fixed step for each collider the player overlaps.
#[derive(Debug)]
pub struct PlayerTouched {
    pub player: Entity,
    pub touch: TouchPoint,
}

impl Message for PlayerTouched {}
