//! Core domain: the shared environment every gameplay domain reads and writes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Game difficulty. Scales jump height and decides whether enemy contact kills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, Reflect)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Next difficulty in the Easy -> Normal -> Hard -> Easy cycle.
    pub fn cycle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Scroll speeds of the two background layers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxSpeeds {
    pub hills: f32,
    pub clouds: f32,
}

impl ParallaxSpeeds {
    pub fn stop(&mut self) {
        self.hills = 0.0;
        self.clouds = 0.0;
    }
}

/// World context shared between the player, the level and the presentation
/// layers. Gameplay code takes it by reference instead of reaching for a global.
///
/// Positions use screen space: origin at the top-left corner, y grows downward.
#[derive(Resource, Debug, Clone)]
pub struct Environment {
    /// Entity currently registered as the player.
    pub player: Option<Entity>,
    /// Last position published by the player step.
    pub player_position: Vec2,
    pub screen_width: f32,
    pub screen_height: f32,
    pub difficulty: Difficulty,
    pub parallax: ParallaxSpeeds,
    /// Level ids in play order.
    pub levels: Vec<String>,
    pub current_level: usize,
    pub invincible: bool,
    /// Set once the player first presses an action key; drives the title fade-out.
    pub movement_started: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            player: None,
            player_position: Vec2::ZERO,
            screen_width: 1280.0,
            screen_height: 720.0,
            difficulty: Difficulty::default(),
            parallax: ParallaxSpeeds::default(),
            levels: Vec::new(),
            current_level: 0,
            invincible: false,
            movement_started: false,
        }
    }
}

impl Environment {
    /// Id of the level currently in play, if the catalog is not empty.
    pub fn current_level_id(&self) -> Option<&str> {
        self.levels.get(self.current_level).map(String::as_str)
    }

    /// Move to the next level, wrapping back to the first after the last one.
    pub fn advance_level(&mut self) {
        if self.levels.is_empty() {
            self.current_level = 0;
            return;
        }
        self.current_level = (self.current_level + 1) % self.levels.len();
    }

    /// Convert a screen-space rectangle (top-left origin) to the world-space
    /// center used by `Transform`, where the camera sits at the origin.
    pub fn to_world(&self, x: f32, y: f32, width: f32, height: f32) -> Vec2 {
        Vec2::new(
            x + width / 2.0 - self.screen_width / 2.0,
            self.screen_height / 2.0 - (y + height / 2.0),
        )
    }

    /// Ground line for the bottom edge of bodies standing on the floor.
    pub fn floor_y(&self, floor_height: f32) -> f32 {
        self.screen_height - floor_height
    }
}
