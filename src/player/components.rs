//! Player domain: controller state, character body and sprite frames.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::core::Bounds;
use crate::player::actions::{Facing, PlayerAction};
use crate::player::resources::{AnimationDescriptor, PlayerTuning};

/// Dash multiplies the base lateral speed by this factor.
pub const DASH_MULTIPLIER: f32 = 3.0;

#[derive(Component, Debug)]
pub struct Player;

/// Per-axis movement permissions. Collisions clear and restore these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementPermissions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for MovementPermissions {
    fn default() -> Self {
        Self {
            up: true,
            down: true,
            left: true,
            right: true,
        }
    }
}

/// Input, facing and collision state of the player character.
#[derive(Component, Debug)]
pub struct PlayerController {
    /// Keys currently held, with the descriptor they were latched with.
    pub pressed_keys: HashMap<PlayerAction, AnimationDescriptor>,
    /// Physical keys held down for each latched action.
    pub physical_keys: HashMap<PlayerAction, HashSet<KeyCode>>,
    pub direction: Facing,
    pub is_idle: bool,
    pub movement: MovementPermissions,
    /// Set while a death sequence is in flight.
    pub is_dying: bool,
    /// Set once the player has dropped onto a tube; the tube sequence runs once.
    pub entering_tube: bool,
    move_speed: f32,
}

impl PlayerController {
    pub fn new(speed: f32) -> Self {
        Self {
            pressed_keys: HashMap::new(),
            physical_keys: HashMap::new(),
            direction: Facing::Right,
            is_idle: true,
            movement: MovementPermissions::default(),
            is_dying: false,
            entering_tube: false,
            move_speed: speed * DASH_MULTIPLIER,
        }
    }

    /// Lateral distance per frame while dashing.
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn is_latched(&self, action: PlayerAction) -> bool {
        self.pressed_keys.contains_key(&action)
    }

    /// A key drives the character only while latched and not idle.
    pub fn is_active(&self, action: PlayerAction) -> bool {
        self.is_latched(action) && !self.is_idle
    }
}

/// Position, size and gravity of a character, in screen space.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct CharacterBody {
    pub position: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub gravity: f32,
    /// Line the bottom edge rests on when standing on the floor.
    pub resting_y: f32,
    pub gravity_enabled: bool,
}

impl CharacterBody {
    pub fn new(position: Vec2, tuning: &PlayerTuning, resting_y: f32) -> Self {
        Self {
            position,
            size: Vec2::new(tuning.width, tuning.height),
            speed: tuning.speed,
            gravity: tuning.gravity,
            resting_y,
            gravity_enabled: true,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn is_grounded(&self) -> bool {
        self.bottom() >= self.resting_y
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    /// Gravity tick: fall one step toward the resting line, never past it.
    pub fn update(&mut self) {
        if !self.gravity_enabled || self.is_grounded() {
            return;
        }

        self.position.y += self.gravity;
        if self.bottom() > self.resting_y {
            self.position.y = self.resting_y - self.size.y;
        }
    }
}

/// Sprite-sheet frame selection for a character.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SpriteFrames {
    pub row: u32,
    pub column: u32,
    pub min_frame: u32,
    pub max_frame: u32,
    pub base_width: f32,
    /// Color-invert filter, shown while dashing.
    pub inverted: bool,
    pub ticks_per_frame: u32,
    ticks: u32,
}

impl SpriteFrames {
    pub fn new(base_width: f32, ticks_per_frame: u32) -> Self {
        Self {
            row: 0,
            column: 0,
            min_frame: 0,
            max_frame: 0,
            base_width,
            inverted: false,
            ticks_per_frame: ticks_per_frame.max(1),
            ticks: 0,
        }
    }

    pub fn set_row(&mut self, row: u32) {
        self.row = row;
    }

    /// Play `frame_count` frames starting at `first`. Re-selecting the range
    /// already playing keeps the current frame.
    pub fn set_frame_range(&mut self, first: u32, frame_count: u32) {
        let last = first + frame_count.saturating_sub(1);
        if self.min_frame == first && self.max_frame == last {
            return;
        }

        self.min_frame = first;
        self.max_frame = last;
        self.column = first;
        self.ticks = 0;
    }

    /// Advance one tick, looping inside the current frame range.
    pub fn advance(&mut self) {
        self.ticks += 1;
        if self.ticks < self.ticks_per_frame {
            return;
        }

        self.ticks = 0;
        self.column = if self.column >= self.max_frame {
            self.min_frame
        } else {
            self.column + 1
        };
    }
}

/// Death-spin pose applied on top of the body's transform.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct DeathSpin {
    /// Rotation in radians, counter-clockwise.
    pub angle: f32,
    /// Screen-space offset (y down).
    pub offset: Vec2,
}

impl DeathSpin {
    /// Spin away from the enemy; `direction` is +1 when pushed right, -1 when pushed left.
    pub fn new(direction: f32, tuning: &PlayerTuning) -> Self {
        Self {
            angle: -direction * tuning.death_spin_degrees.to_radians(),
            offset: Vec2::new(
                direction * tuning.death_spin_offset,
                -tuning.death_spin_offset,
            ),
        }
    }
}

/// Identity the network layer reads to mirror this player.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct NetworkSync {
    pub should_sync: bool,
    pub id: String,
}

impl NetworkSync {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            should_sync: true,
            id: id.into(),
        }
    }

    /// Fresh random identity, e.g. `player-3fa2c01b`.
    pub fn random() -> Self {
        use rand::Rng;

        let suffix: u32 = rand::rng().random();
        Self::new(format!("player-{:08x}", suffix))
    }
}
