//! Player domain: reacting to touch points delivered by the level.
//!
//! Collisions only flip movement permissions, gravity and guards here; the
//! timed follow-ups (tube exit, respawn) are returned as a [`Reaction`] for the
//! calling system to schedule.

use bevy::prelude::*;

use crate::core::{Difficulty, Environment};
use crate::level::{ColliderKind, TouchPoint};
use crate::player::components::{CharacterBody, DeathSpin, PlayerController, SpriteFrames};
use crate::player::errors::ControllerError;
use crate::player::resources::{AnimationTable, EnemyContactPolicy, PlayerTuning};

/// Follow-up work produced by a single touch point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reaction {
    /// The player dropped onto a tube: start the tube sequence.
    pub start_tube_sequence: bool,
    /// Lethal contact admitted by the dying guard: spin, play the death
    /// sound and schedule the restart.
    pub death: Option<DeathSpin>,
}

/// What the player touched over a whole frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactSummary {
    pub touched_any: bool,
    pub touched_platform: bool,
}

impl ContactSummary {
    pub fn record(&mut self, touch: &TouchPoint) {
        self.touched_any = true;
        self.touched_platform |= touch.kind == ColliderKind::JumpPlatform;
    }
}

impl PlayerController {
    pub fn react(
        &mut self,
        touch: &TouchPoint,
        body: &mut CharacterBody,
        frames: &mut SpriteFrames,
        table: &AnimationTable,
        tuning: &PlayerTuning,
        env: &Environment,
    ) -> Result<Reaction, ControllerError> {
        let mut reaction = Reaction::default();

        if touch.kind == ColliderKind::Tube {
            reaction.start_tube_sequence = self.react_to_tube(touch, body);
        } else {
            self.movement.left = true;
            self.movement.right = true;
        }

        if touch.kind.is_enemy() {
            reaction.death = self.react_to_enemy(touch, body, tuning, env);
        }

        self.react_to_platform(touch, body, frames, table, tuning)?;

        Ok(reaction)
    }

    /// Frame-level follow-up once every touch point has been delivered.
    ///
    /// No platform contact while held up means the player stepped off the
    /// edge; no contact at all frees lateral movement again.
    pub fn finish_contacts(&mut self, summary: ContactSummary, body: &mut CharacterBody) {
        if !summary.touched_platform && !self.movement.down {
            self.movement.down = true;
            body.gravity_enabled = true;
        }

        if !summary.touched_any {
            self.movement.left = true;
            self.movement.right = true;
        }
    }

    /// Returns true when the tube sequence should start.
    fn react_to_tube(&mut self, touch: &TouchPoint, body: &mut CharacterBody) -> bool {
        if touch.other_sides.left {
            self.movement.right = false;
        } else if touch.other_sides.right {
            self.movement.left = false;
        } else if touch.other_sides.top && !self.entering_tube {
            info!("[TUBE] Entering tube at x={}", touch.other_x);
            body.position.x = touch.other_x;
            body.gravity_enabled = false;
            self.entering_tube = true;
            return true;
        }
        false
    }

    fn react_to_enemy(
        &mut self,
        touch: &TouchPoint,
        body: &mut CharacterBody,
        tuning: &PlayerTuning,
        env: &Environment,
    ) -> Option<DeathSpin> {
        let direction = touch.push_direction(body.position.x);

        let lethal = match tuning.enemy_contact {
            EnemyContactPolicy::AlwaysLethal => env.difficulty != Difficulty::Easy,
            EnemyContactPolicy::HonorInvincibility => {
                env.difficulty != Difficulty::Easy && !env.invincible
            }
        };

        if !lethal {
            body.position.x += direction * tuning.enemy_nudge;
            debug!("Enemy contact nudged player to x={}", body.position.x);
            return None;
        }

        if self.is_dying {
            return None;
        }

        info!(
            "[DEATH] Lethal {:?} contact on {:?}",
            touch.kind, env.difficulty
        );
        self.is_dying = true;
        Some(DeathSpin::new(direction, tuning))
    }

    fn react_to_platform(
        &mut self,
        touch: &TouchPoint,
        body: &mut CharacterBody,
        frames: &mut SpriteFrames,
        table: &AnimationTable,
        tuning: &PlayerTuning,
    ) -> Result<(), ControllerError> {
        let on_platform = touch.kind == ColliderKind::JumpPlatform;

        if on_platform && touch.other_sides.left {
            self.movement.right = false;
            body.gravity_enabled = true;
        } else if on_platform && touch.other_sides.right {
            self.movement.left = false;
            body.gravity_enabled = true;
        } else if on_platform && touch.sides.bottom {
            self.movement.down = false;
            body.gravity_enabled = false;
            self.select_facing_animation(table, tuning, frames)?;
        } else if !self.movement.down {
            self.movement.down = true;
            body.gravity_enabled = true;
        }

        Ok(())
    }
}
