//! Player domain: tuning and animation data resources.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::player::actions::PlayerAction;

/// How enemy contact treats the environment's invincibility flag.
///
/// `AlwaysLethal` kills on any non-easy contact, whatever the flag says.
/// `HonorInvincibility` spares an invincible player and nudges them away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum EnemyContactPolicy {
    #[default]
    AlwaysLethal,
    HonorInvincibility,
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Lateral distance covered per frame without dash.
    pub speed: f32,
    /// Fall distance per frame while gravity is enabled.
    pub gravity: f32,
    pub width: f32,
    pub height: f32,
    /// Height of the floor strip below the resting line.
    pub floor_height: f32,
    /// Sprite width used while facing left / right.
    pub sprite_width_left: f32,
    pub sprite_width_right: f32,
    /// Fixed frames spent on each animation frame.
    pub ticks_per_frame: u32,
    /// Delay between the stages of the tube sequence.
    pub tube_delay_secs: f32,
    /// Delay between a lethal contact and the level restart request.
    pub death_delay_secs: f32,
    /// Push applied on a non-lethal enemy contact.
    pub enemy_nudge: f32,
    pub death_spin_degrees: f32,
    pub death_spin_offset: f32,
    pub enemy_contact: EnemyContactPolicy,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 4.0,
            gravity: 8.0,
            width: 48.0,
            height: 64.0,
            floor_height: 40.0,
            sprite_width_left: 48.0,
            sprite_width_right: 48.0,
            ticks_per_frame: 6,
            tube_delay_secs: 1.0,
            death_delay_secs: 1.5,
            enemy_nudge: 10.0,
            death_spin_degrees: 90.0,
            death_spin_offset: 30.0,
            enemy_contact: EnemyContactPolicy::AlwaysLethal,
        }
    }
}

/// Alternate frame range shown while the key's animation is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub struct IdleFrame {
    pub column: u32,
    pub frame_count: u32,
}

/// Sprite-sheet row and frame range for one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub struct AnimationDescriptor {
    pub row: u32,
    pub frame_count: u32,
    pub idle_frame: Option<IdleFrame>,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AnimationTable {
    pub descriptors: HashMap<PlayerAction, AnimationDescriptor>,
}

impl Default for AnimationTable {
    fn default() -> Self {
        let walk_idle = Some(IdleFrame {
            column: 0,
            frame_count: 1,
        });

        Self {
            descriptors: HashMap::from([
                (
                    PlayerAction::Right,
                    AnimationDescriptor {
                        row: 0,
                        frame_count: 8,
                        idle_frame: walk_idle,
                    },
                ),
                (
                    PlayerAction::Left,
                    AnimationDescriptor {
                        row: 1,
                        frame_count: 8,
                        idle_frame: walk_idle,
                    },
                ),
                (
                    PlayerAction::Up,
                    AnimationDescriptor {
                        row: 2,
                        frame_count: 4,
                        idle_frame: None,
                    },
                ),
                (
                    PlayerAction::Dash,
                    AnimationDescriptor {
                        row: 3,
                        frame_count: 6,
                        idle_frame: None,
                    },
                ),
            ]),
        }
    }
}

impl AnimationTable {
    pub fn new(descriptors: HashMap<PlayerAction, AnimationDescriptor>) -> Self {
        Self { descriptors }
    }

    pub fn get(&self, action: PlayerAction) -> Option<&AnimationDescriptor> {
        self.descriptors.get(&action)
    }
}
