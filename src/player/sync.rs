//! Player domain: state snapshot read by the network layer.

use serde::Serialize;

use crate::player::actions::Facing;
use crate::player::components::{CharacterBody, NetworkSync, PlayerController};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncSnapshot {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub facing: Facing,
    pub idle: bool,
    pub dying: bool,
}

impl SyncSnapshot {
    /// Snapshot of a synchronized player, or `None` when syncing is off.
    pub fn capture(
        sync: &NetworkSync,
        controller: &PlayerController,
        body: &CharacterBody,
    ) -> Option<Self> {
        if !sync.should_sync {
            return None;
        }

        Some(Self {
            id: sync.id.clone(),
            x: body.position.x,
            y: body.position.y,
            facing: controller.direction,
            idle: controller.is_idle,
            dying: controller.is_dying,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
