//! Core domain: screen-space rectangles and contact-side classification.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Which faces of a body are in contact with another body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchSides {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl TouchSides {
    pub const NONE: Self = Self {
        left: false,
        right: false,
        top: false,
        bottom: false,
    };

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::NONE
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::NONE
        }
    }

    pub fn top() -> Self {
        Self {
            top: true,
            ..Self::NONE
        }
    }

    pub fn bottom() -> Self {
        Self {
            bottom: true,
            ..Self::NONE
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Axis-aligned rectangle in screen space (top-left origin, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize, Reflect)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Classify an overlap along its axis of least penetration.
    ///
    /// Returns the faces in contact for `self` and for `other`, or `None` when
    /// the rectangles do not overlap.
    pub fn touch_sides(&self, other: &Bounds) -> Option<(TouchSides, TouchSides)> {
        if !self.intersects(other) {
            return None;
        }

        let overlap_x = self.right().min(other.right()) - self.x.max(other.x);
        let overlap_y = self.bottom().min(other.bottom()) - self.y.max(other.y);
        let (own, theirs) = (self.center(), other.center());

        let sides = if overlap_y < overlap_x {
            if own.y < theirs.y {
                (TouchSides::bottom(), TouchSides::top())
            } else {
                (TouchSides::top(), TouchSides::bottom())
            }
        } else if own.x < theirs.x {
            (TouchSides::right(), TouchSides::left())
        } else {
            (TouchSides::left(), TouchSides::right())
        };

        Some(sides)
    }
}
