//! Core domain: cross-domain messages for audio and level flow.

use bevy::ecs::message::Message;

/// Fire-and-forget sound trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    Death,
}

impl Message for SoundCue {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTransition {
    /// Reload the level currently in play.
    Restart,
    /// Move on to the next level in the catalog.
    Advance,
}

impl LevelTransition {
    /// Collapse one frame's requests into the transition to run. A restart
    /// wins over an advance, so a player who dies past the right edge
    /// replays the level.
    pub fn resolve(requests: impl IntoIterator<Item = LevelTransition>) -> Option<Self> {
        requests
            .into_iter()
            .reduce(|chosen, next| match (chosen, next) {
                (LevelTransition::Restart, _) | (_, LevelTransition::Restart) => {
                    LevelTransition::Restart
                }
                _ => LevelTransition::Advance,
            })
    }
}

/// Request to tear down the current level and load another one.
#[derive(Debug)]
pub struct LevelTransitionRequest {
    pub transition: LevelTransition,
}

impl Message for LevelTransitionRequest {}

/// Written once a requested level has finished loading.
#[derive(Debug)]
pub struct LevelLoaded {
    pub level_index: usize,
}

impl Message for LevelLoaded {}
