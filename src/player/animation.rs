//! Player domain: picking sprite rows and frame ranges for actions.

use crate::player::actions::{Facing, PlayerAction};
use crate::player::components::{PlayerController, SpriteFrames};
use crate::player::errors::ControllerError;
use crate::player::resources::{AnimationTable, PlayerTuning};

impl PlayerController {
    /// Point the sprite at `action`'s animation.
    ///
    /// Left/right also turn the character and switch the base sprite width.
    /// While idle, a descriptor's idle sub-range replaces the moving range, so
    /// the same key can show a walking and a resting pose.
    pub fn select_animation(
        &mut self,
        action: PlayerAction,
        table: &AnimationTable,
        tuning: &PlayerTuning,
        frames: &mut SpriteFrames,
    ) -> Result<(), ControllerError> {
        let descriptor = table
            .get(action)
            .ok_or(ControllerError::MissingAnimation(action))?;

        if let Some(facing) = Facing::from_action(action) {
            self.direction = facing;
            frames.base_width = match facing {
                Facing::Left => tuning.sprite_width_left,
                Facing::Right => tuning.sprite_width_right,
            };
        }

        let (first, frame_count) = match (self.is_idle, descriptor.idle_frame) {
            (true, Some(idle)) => (idle.column, idle.frame_count),
            _ => (0, descriptor.frame_count),
        };
        frames.set_row(descriptor.row);
        frames.set_frame_range(first, frame_count);

        Ok(())
    }

    /// Re-apply the animation of the direction currently faced.
    pub fn select_facing_animation(
        &mut self,
        table: &AnimationTable,
        tuning: &PlayerTuning,
        frames: &mut SpriteFrames,
    ) -> Result<(), ControllerError> {
        self.select_animation(self.direction.action(), table, tuning, frames)
    }
}
