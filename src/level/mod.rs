//! Level domain: level geometry, contacts, transitions and backdrop.

mod components;
mod contacts;
mod events;
mod spawn;
mod systems;


pub use components::{
    ColliderKind, Contacts, GameLayer, LevelCollider, LevelEntity, ParallaxChannel, ParallaxLayer,
    TitleBanner,
};
pub use events::{PlayerTouched, TouchPoint};

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::level::contacts::{deliver_touch_points, track_player_contacts};
use crate::level::systems::{
    apply_level_transitions, detect_level_exit, hide_title_banner, load_first_level,
    scroll_parallax,
};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayerTouched>()
            .add_systems(Startup, load_first_level)
            .add_systems(
                FixedUpdate,
                (track_player_contacts, deliver_touch_points)
                    .chain()
                    .in_set(FrameSet::Detect),
            )
            .add_systems(FixedUpdate, scroll_parallax.in_set(FrameSet::Integrate))
            .add_systems(FixedUpdate, detect_level_exit.in_set(FrameSet::Exit))
            .add_systems(Update, (apply_level_transitions, hide_title_banner).chain());
    }
}
