//! Core domain: shared environment, cross-domain messages and camera.

mod events;
mod geometry;
mod resources;
mod systems;


pub use events::{LevelLoaded, LevelTransition, LevelTransitionRequest, SoundCue};
pub use geometry::{Bounds, TouchSides};
pub use resources::{Difficulty, Environment, ParallaxSpeeds};

use bevy::prelude::*;

use crate::core::systems::{setup_camera, track_screen_size};

/// Fixed-step phases, run in this order every tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Physics contacts become touch points.
    Detect,
    /// The player reacts to touch points.
    React,
    /// Tube and death timers.
    Sequences,
    /// Input-driven movement step.
    Step,
    /// Gravity, animation frames, transforms and backdrop.
    Integrate,
    /// Level completion checks.
    Exit,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Environment>()
            .add_message::<SoundCue>()
            .add_message::<LevelTransitionRequest>()
            .add_message::<LevelLoaded>()
            .configure_sets(
                FixedUpdate,
                (
                    FrameSet::Detect,
                    FrameSet::React,
                    FrameSet::Sequences,
                    FrameSet::Step,
                    FrameSet::Integrate,
                    FrameSet::Exit,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(PreUpdate, track_screen_size);
    }
}
