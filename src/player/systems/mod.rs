//! Player domain: system modules for the controller.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod sequences;

pub(crate) use collisions::react_to_touch_points;
pub(crate) use input::forward_player_input;
pub(crate) use movement::{step_players, sync_body_transforms, update_character_bodies};
pub(crate) use sequences::{complete_death_sequences, tick_player_sequences};
