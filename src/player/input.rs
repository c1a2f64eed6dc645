//! Player domain: latching held keys.

use bevy::prelude::*;

use crate::core::Environment;
use crate::player::actions::PlayerAction;
use crate::player::components::{PlayerController, SpriteFrames};
use crate::player::errors::ControllerError;
use crate::player::resources::{AnimationTable, PlayerTuning};

/// Hill scroll speed set while a direction key is pressed.
pub const PARALLAX_STEP: f32 = 0.4;

impl PlayerController {
    /// Deliver a physical key event. Returns `Ok(false)` when the key is not a
    /// player action and was ignored.
    ///
    /// An action stays latched until the last of its physical keys is released.
    pub fn handle_key(
        &mut self,
        key: KeyCode,
        pressed: bool,
        table: &AnimationTable,
        tuning: &PlayerTuning,
        frames: &mut SpriteFrames,
        env: &mut Environment,
    ) -> Result<bool, ControllerError> {
        let Some(action) = PlayerAction::from_key(key) else {
            return Ok(false);
        };

        if pressed {
            self.key_down(action, table, tuning, frames, env)?;
            self.physical_keys.entry(action).or_default().insert(key);
            return Ok(true);
        }

        if let Some(held) = self.physical_keys.get_mut(&action) {
            held.remove(&key);
            if !held.is_empty() {
                return Ok(true);
            }
        }
        self.physical_keys.remove(&action);
        self.key_up(action, table, tuning, frames, env)?;
        Ok(true)
    }

    /// Latch `action` unless it is already held.
    pub fn key_down(
        &mut self,
        action: PlayerAction,
        table: &AnimationTable,
        tuning: &PlayerTuning,
        frames: &mut SpriteFrames,
        env: &mut Environment,
    ) -> Result<(), ControllerError> {
        if self.is_latched(action) {
            return Ok(());
        }

        let descriptor = *table
            .get(action)
            .ok_or(ControllerError::MissingAnimation(action))?;
        self.pressed_keys.insert(action, descriptor);
        self.is_idle = false;
        env.movement_started = true;

        match action {
            PlayerAction::Left => env.parallax.hills = -PARALLAX_STEP,
            PlayerAction::Right => env.parallax.hills = PARALLAX_STEP,
            PlayerAction::Dash => frames.inverted = true,
            PlayerAction::Up => {}
        }

        self.select_animation(action, table, tuning, frames)
    }

    /// Release `action` and settle its animation on the idle frame.
    pub fn key_up(
        &mut self,
        action: PlayerAction,
        table: &AnimationTable,
        tuning: &PlayerTuning,
        frames: &mut SpriteFrames,
        env: &mut Environment,
    ) -> Result<(), ControllerError> {
        self.pressed_keys.remove(&action);
        self.is_idle = true;

        match action {
            PlayerAction::Left | PlayerAction::Right => env.parallax.hills = 0.0,
            PlayerAction::Dash => {
                frames.inverted = false;
                env.parallax.hills = 0.0;
            }
            PlayerAction::Up => {}
        }

        self.select_animation(action, table, tuning, frames)
    }
}
