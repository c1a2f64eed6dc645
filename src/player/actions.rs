//! Player domain: keyboard actions the controller understands.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// A recognized player action. Every other key is ignored by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect)]
pub enum PlayerAction {
    Left,
    Right,
    Up,
    Dash,
}

impl PlayerAction {
    pub const ALL: [PlayerAction; 4] = [
        PlayerAction::Left,
        PlayerAction::Right,
        PlayerAction::Up,
        PlayerAction::Dash,
    ];

    /// Map a physical key to its action.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::ArrowLeft | KeyCode::KeyA => Some(PlayerAction::Left),
            KeyCode::ArrowRight | KeyCode::KeyD => Some(PlayerAction::Right),
            KeyCode::ArrowUp | KeyCode::KeyW | KeyCode::Space => Some(PlayerAction::Up),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(PlayerAction::Dash),
            _ => None,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, PlayerAction::Left | PlayerAction::Right)
    }
}

/// Horizontal direction the character last faced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// The action whose animation represents this facing.
    pub fn action(self) -> PlayerAction {
        match self {
            Facing::Left => PlayerAction::Left,
            Facing::Right => PlayerAction::Right,
        }
    }

    pub fn from_action(action: PlayerAction) -> Option<Self> {
        match action {
            PlayerAction::Left => Some(Facing::Left),
            PlayerAction::Right => Some(Facing::Right),
            PlayerAction::Up | PlayerAction::Dash => None,
        }
    }
}
