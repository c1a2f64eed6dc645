//! Player domain: timed tube and death sequences.
//!
//! Both live as components on the player entity, so despawning the player
//! cancels whatever is still pending.

use std::time::Duration;

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TubeStep {
    /// First delay elapsed: let the player sink into the tube.
    RestoreGravity,
    /// Second delay elapsed: move past the right edge to finish the level.
    ExitLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TubeStage {
    Sinking,
    Exiting,
    Done,
}

#[derive(Component, Debug)]
pub struct TubeSequence {
    timer: Timer,
    stage: TubeStage,
}

impl TubeSequence {
    pub fn new(delay_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(delay_secs, TimerMode::Once),
            stage: TubeStage::Sinking,
        }
    }

    pub fn tick(&mut self, delta: Duration) -> Option<TubeStep> {
        if self.stage == TubeStage::Done {
            return None;
        }

        self.timer.tick(delta);
        if !self.timer.just_finished() {
            return None;
        }

        match self.stage {
            TubeStage::Sinking => {
                self.stage = TubeStage::Exiting;
                self.timer.reset();
                Some(TubeStep::RestoreGravity)
            }
            TubeStage::Exiting => {
                self.stage = TubeStage::Done;
                Some(TubeStep::ExitLevel)
            }
            TubeStage::Done => None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.stage == TubeStage::Done
    }
}

#[derive(Component, Debug)]
pub struct DeathSequence {
    timer: Timer,
    restart_requested: bool,
}

impl DeathSequence {
    pub fn new(delay_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(delay_secs, TimerMode::Once),
            restart_requested: false,
        }
    }

    /// Returns true on the tick the level restart should be requested.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.restart_requested {
            return false;
        }

        self.timer.tick(delta);
        if self.timer.just_finished() {
            self.restart_requested = true;
            return true;
        }
        false
    }

    /// The restart has been requested; waiting on the level to reload.
    pub fn awaiting_reload(&self) -> bool {
        self.restart_requested
    }
}
