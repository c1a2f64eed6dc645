//! Player domain: the per-frame movement step.
//!
//! Every delta is applied to the position immediately; there is no velocity
//! integration. The jump "arc" is a single upward teleport followed by the
//! body's gravity tick pulling the character back down.

use crate::core::{Difficulty, Environment};
use crate::player::actions::PlayerAction;
use crate::player::components::{CharacterBody, PlayerController, SpriteFrames};
use crate::player::errors::ControllerError;
use crate::player::resources::{AnimationTable, PlayerTuning};

/// Share of the screen width where the tube column starts.
pub const TUBE_COLUMN_RATIO: f32 = 0.8;
/// Jump fraction used on a one-way platform while gravity is off.
pub const PLATFORM_HOP_FRACTION: f32 = 0.15;

/// Jump height as a fraction of the body's bottom-edge measurement.
pub fn jump_fraction(difficulty: Difficulty) -> f32 {
    match difficulty {
        Difficulty::Easy => 0.50,
        Difficulty::Normal => 0.40,
        Difficulty::Hard => 0.30,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// The jump check held this frame; the jump sound plays even if no lift applied.
    pub jumped: bool,
}

impl PlayerController {
    /// Run one frame of lateral movement, jump and boundary clamps.
    pub fn step(
        &mut self,
        body: &mut CharacterBody,
        frames: &mut SpriteFrames,
        table: &AnimationTable,
        tuning: &PlayerTuning,
        env: &mut Environment,
    ) -> Result<StepOutcome, ControllerError> {
        env.player_position = body.position;

        let lateral = if self.is_active(PlayerAction::Dash) {
            self.move_speed()
        } else {
            body.speed
        };

        if self.is_active(PlayerAction::Left) && self.movement.left {
            body.position.x -= lateral;
        }
        if self.is_active(PlayerAction::Right) && self.movement.right {
            body.position.x += lateral;
        }

        let mut outcome = StepOutcome::default();
        if self.gravity_animation_active(body, frames, table, tuning)? {
            outcome.jumped = true;
            if body.gravity_enabled {
                body.position.y -= jump_fraction(env.difficulty) * body.bottom();
            } else if !self.movement.down {
                body.position.y -= PLATFORM_HOP_FRACTION * body.bottom();
            }
        }

        let tube_column = TUBE_COLUMN_RATIO * env.screen_width;
        if body.position.x >= tube_column && body.position.x <= env.screen_width {
            body.position.x = tube_column - 1.0;
        }

        if body.position.x < 0.0 {
            body.position.x = 1.0;
            env.parallax.stop();
        }

        Ok(outcome)
    }

    /// Whether a jump fires this frame.
    ///
    /// Whenever the character is supported (on the floor, or held up by a
    /// one-way platform) the facing animation is re-applied, even if no jump
    /// is requested.
    fn gravity_animation_active(
        &mut self,
        body: &CharacterBody,
        frames: &mut SpriteFrames,
        table: &AnimationTable,
        tuning: &PlayerTuning,
    ) -> Result<bool, ControllerError> {
        let supported = body.is_grounded() || !self.movement.down;
        if supported {
            self.select_facing_animation(table, tuning, frames)?;
        }

        Ok(supported && self.is_active(PlayerAction::Up))
    }
}
