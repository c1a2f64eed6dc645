//! Player domain: input latch, animation selection, movement step and
//! collision reactions for the player character.

mod actions;
mod animation;
mod bootstrap;
mod collisions;
mod components;
mod errors;
mod input;
mod physics;
mod resources;
mod sequences;
mod sync;
pub(crate) mod systems;

#[cfg(test)]
mod tests;

pub use actions::{Facing, PlayerAction};
pub use bootstrap::{despawn_player, spawn_player};
pub use collisions::{ContactSummary, Reaction};
pub use components::{
    CharacterBody, DASH_MULTIPLIER, DeathSpin, MovementPermissions, NetworkSync, Player,
    PlayerController, SpriteFrames,
};
pub use errors::ControllerError;
pub use input::PARALLAX_STEP;
pub use physics::{PLATFORM_HOP_FRACTION, StepOutcome, TUBE_COLUMN_RATIO, jump_fraction};
pub use resources::{
    AnimationDescriptor, AnimationTable, EnemyContactPolicy, IdleFrame, PlayerTuning,
};
pub use sequences::{DeathSequence, TubeSequence, TubeStep};
pub use sync::SyncSnapshot;

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::player::systems::{
    complete_death_sequences, forward_player_input, react_to_touch_points, step_players,
    sync_body_transforms, tick_player_sequences, update_character_bodies,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<AnimationTable>()
            .add_systems(Update, forward_player_input)
            .add_systems(FixedUpdate, react_to_touch_points.in_set(FrameSet::React))
            .add_systems(
                FixedUpdate,
                (complete_death_sequences, tick_player_sequences)
                    .chain()
                    .in_set(FrameSet::Sequences),
            )
            .add_systems(FixedUpdate, step_players.in_set(FrameSet::Step))
            .add_systems(
                FixedUpdate,
                (update_character_bodies, sync_body_transforms)
                    .chain()
                    .in_set(FrameSet::Integrate),
            );
    }
}
