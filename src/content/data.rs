//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/*.ron and are only used for
//! deserialization; gameplay code reads the resources built from them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Difficulty};
use crate::level::ColliderKind;
use crate::player::{AnimationDescriptor, AnimationTable, PlayerAction, PlayerTuning};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Game settings (game.ron)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub invincible: bool,
}

// ============================================================================
// Player (player.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub tuning: PlayerTuning,
    pub animations: HashMap<PlayerAction, AnimationDescriptor>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tuning: PlayerTuning::default(),
            animations: AnimationTable::default().descriptors,
        }
    }
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ColliderDef {
    pub kind: ColliderKind,
    pub bounds: Bounds,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    /// Screen-space x the player starts at, standing on the floor.
    pub spawn_x: f32,
    /// Constant cloud scroll speed while the level runs.
    #[serde(default)]
    pub cloud_drift: f32,
    pub colliders: Vec<ColliderDef>,
}

/// Level used when levels.ron is missing or empty.
pub fn default_levels() -> Vec<LevelDef> {
    let collider = |kind, x, y, width, height| ColliderDef {
        kind,
        bounds: Bounds::new(x, y, width, height),
    };

    vec![LevelDef {
        id: "level_1".to_string(),
        name: "Green Hills".to_string(),
        spawn_x: 80.0,
        cloud_drift: 0.05,
        colliders: vec![
            collider(ColliderKind::JumpPlatform, 320.0, 520.0, 180.0, 20.0),
            collider(ColliderKind::JumpPlatform, 600.0, 430.0, 160.0, 20.0),
            collider(ColliderKind::GroundEnemy, 540.0, 640.0, 40.0, 40.0),
            collider(ColliderKind::FlyingEnemy, 820.0, 360.0, 36.0, 24.0),
            collider(ColliderKind::Tube, 1000.0, 520.0, 90.0, 160.0),
        ],
    }]
}
