//! Player domain: tests for the input latch, movement step, collision
//! reactions and timed sequences.

use std::time::Duration;

use bevy::prelude::*;

use super::*;
use crate::core::{Difficulty, Environment, TouchSides};
use crate::level::{ColliderKind, TouchPoint};

struct Rig {
    controller: PlayerController,
    body: CharacterBody,
    frames: SpriteFrames,
    table: AnimationTable,
    tuning: PlayerTuning,
    env: Environment,
}

impl Rig {
    fn new() -> Self {
        Self::with_tuning(PlayerTuning::default())
    }

    fn with_tuning(tuning: PlayerTuning) -> Self {
        let table = AnimationTable::default();
        let (controller, frames) = PlayerController::initial(&tuning, &table).unwrap();
        let env = Environment::default();
        let resting_y = env.floor_y(tuning.floor_height);
        let body = CharacterBody::new(Vec2::new(100.0, resting_y - tuning.height), &tuning, resting_y);

        Self {
            controller,
            body,
            frames,
            table,
            tuning,
            env,
        }
    }

    fn press(&mut self, action: PlayerAction) {
        self.controller
            .key_down(action, &self.table, &self.tuning, &mut self.frames, &mut self.env)
            .unwrap();
    }

    fn release(&mut self, action: PlayerAction) {
        self.controller
            .key_up(action, &self.table, &self.tuning, &mut self.frames, &mut self.env)
            .unwrap();
    }

    fn key(&mut self, key: KeyCode, pressed: bool) {
        self.controller
            .handle_key(
                key,
                pressed,
                &self.table,
                &self.tuning,
                &mut self.frames,
                &mut self.env,
            )
            .unwrap();
    }

    fn step(&mut self) -> StepOutcome {
        self.controller
            .step(
                &mut self.body,
                &mut self.frames,
                &self.table,
                &self.tuning,
                &mut self.env,
            )
            .unwrap()
    }

    fn react(&mut self, touch: TouchPoint) -> Reaction {
        self.controller
            .react(
                &touch,
                &mut self.body,
                &mut self.frames,
                &self.table,
                &self.tuning,
                &self.env,
            )
            .unwrap()
    }
}

fn touch(kind: ColliderKind, sides: TouchSides, other_sides: TouchSides, other_x: f32) -> TouchPoint {
    TouchPoint {
        other: Entity::PLACEHOLDER,
        kind,
        sides,
        other_sides,
        other_x,
    }
}

fn standing_on_platform() -> TouchPoint {
    touch(
        ColliderKind::JumpPlatform,
        TouchSides::bottom(),
        TouchSides::top(),
        320.0,
    )
}

fn enemy_on_left(other_x: f32) -> TouchPoint {
    touch(
        ColliderKind::GroundEnemy,
        TouchSides::left(),
        TouchSides::right(),
        other_x,
    )
}

// ============================================================================
// Input latch
// ============================================================================

#[test]
fn test_press_then_release_clears_key_and_idles() {
    let mut rig = Rig::new();

    rig.press(PlayerAction::Right);
    assert!(rig.controller.is_latched(PlayerAction::Right));
    assert!(!rig.controller.is_idle);
    assert!(rig.env.movement_started);

    rig.release(PlayerAction::Right);
    assert!(!rig.controller.is_latched(PlayerAction::Right));
    assert!(rig.controller.is_idle);
}

#[test]
fn test_repeated_press_keeps_single_latch() {
    let mut rig = Rig::new();
    rig.press(PlayerAction::Left);
    rig.press(PlayerAction::Left);
    assert_eq!(rig.controller.pressed_keys.len(), 1);
}

#[test]
fn test_unrecognized_key_changes_nothing() {
    let mut rig = Rig::new();
    let frames_before = rig.frames.clone();

    let handled = rig
        .controller
        .handle_key(
            KeyCode::KeyQ,
            true,
            &rig.table,
            &rig.tuning,
            &mut rig.frames,
            &mut rig.env,
        )
        .unwrap();

    assert!(!handled);
    assert!(rig.controller.pressed_keys.is_empty());
    assert!(rig.controller.is_idle);
    assert!(!rig.env.movement_started);
    assert_eq!(rig.frames, frames_before);
    assert_eq!(rig.env.parallax.hills, 0.0);
}

#[test]
fn test_handle_key_maps_physical_keys() {
    let mut rig = Rig::new();
    let handled = rig
        .controller
        .handle_key(
            KeyCode::ArrowRight,
            true,
            &rig.table,
            &rig.tuning,
            &mut rig.frames,
            &mut rig.env,
        )
        .unwrap();

    assert!(handled);
    assert!(rig.controller.is_latched(PlayerAction::Right));
}

#[test]
fn test_action_held_until_last_physical_key_released() {
    let mut rig = Rig::new();

    rig.key(KeyCode::ArrowLeft, true);
    rig.key(KeyCode::KeyA, true);
    rig.key(KeyCode::ArrowLeft, false);

    assert!(rig.controller.is_latched(PlayerAction::Left));
    assert!(!rig.controller.is_idle);
    assert_eq!(rig.env.parallax.hills, -0.4);
    rig.step();
    assert_eq!(rig.body.position.x, 96.0);

    rig.key(KeyCode::KeyA, false);
    assert!(!rig.controller.is_latched(PlayerAction::Left));
    assert!(rig.controller.is_idle);
    assert!(!rig.controller.physical_keys.contains_key(&PlayerAction::Left));
    rig.step();
    assert_eq!(rig.body.position.x, 96.0);
}

#[test]
fn test_both_shift_keys_keep_dash() {
    let mut rig = Rig::new();
    rig.key(KeyCode::ArrowRight, true);
    rig.key(KeyCode::ShiftLeft, true);
    rig.key(KeyCode::ShiftRight, true);
    rig.key(KeyCode::ShiftLeft, false);

    assert!(rig.frames.inverted);
    rig.step();
    assert_eq!(rig.body.position.x, 112.0);
}

#[test]
fn test_missing_descriptor_is_not_latched() {
    let mut rig = Rig::new();
    rig.table.descriptors.remove(&PlayerAction::Dash);

    let result = rig.controller.key_down(
        PlayerAction::Dash,
        &rig.table,
        &rig.tuning,
        &mut rig.frames,
        &mut rig.env,
    );

    assert_eq!(
        result,
        Err(ControllerError::MissingAnimation(PlayerAction::Dash))
    );
    assert!(!rig.controller.is_latched(PlayerAction::Dash));
    assert!(rig.controller.is_idle);
}

#[test]
fn test_hill_parallax_follows_direction_keys() {
    let mut rig = Rig::new();

    rig.press(PlayerAction::Right);
    assert_eq!(rig.env.parallax.hills, 0.4);
    rig.release(PlayerAction::Right);
    assert_eq!(rig.env.parallax.hills, 0.0);

    rig.press(PlayerAction::Left);
    assert_eq!(rig.env.parallax.hills, -0.4);
    rig.release(PlayerAction::Left);
    assert_eq!(rig.env.parallax.hills, 0.0);
}

#[test]
fn test_dash_toggles_invert_filter() {
    let mut rig = Rig::new();
    rig.press(PlayerAction::Right);
    rig.press(PlayerAction::Dash);
    assert!(rig.frames.inverted);

    rig.release(PlayerAction::Dash);
    assert!(!rig.frames.inverted);
    assert_eq!(rig.env.parallax.hills, 0.0);
}

// ============================================================================
// Animation selection
// ============================================================================

#[test]
fn test_initial_animation_is_right_idle_frame() {
    let rig = Rig::new();
    assert_eq!(rig.controller.direction, Facing::Right);
    assert_eq!(rig.frames.row, 0);
    assert_eq!((rig.frames.min_frame, rig.frames.max_frame), (0, 0));
}

#[test]
fn test_moving_and_idle_frame_ranges() {
    let mut rig = Rig::new();

    rig.press(PlayerAction::Left);
    assert_eq!(rig.controller.direction, Facing::Left);
    assert_eq!(rig.frames.row, 1);
    assert_eq!((rig.frames.min_frame, rig.frames.max_frame), (0, 7));
    assert_eq!(rig.frames.base_width, rig.tuning.sprite_width_left);

    rig.release(PlayerAction::Left);
    assert_eq!(rig.frames.row, 1);
    assert_eq!((rig.frames.min_frame, rig.frames.max_frame), (0, 0));
}

#[test]
fn test_frames_loop_inside_range() {
    let mut rig = Rig::new();
    rig.press(PlayerAction::Right);
    let ticks = rig.tuning.ticks_per_frame;

    for _ in 0..ticks {
        rig.frames.advance();
    }
    assert_eq!(rig.frames.column, 1);

    for _ in 0..ticks * 7 {
        rig.frames.advance();
    }
    assert_eq!(rig.frames.column, 0);
}

#[test]
fn test_reselecting_same_animation_keeps_frame() {
    let mut rig = Rig::new();
    rig.press(PlayerAction::Right);
    for _ in 0..rig.tuning.ticks_per_frame * 2 {
        rig.frames.advance();
    }

    rig.step();
    assert_eq!(rig.frames.column, 2);
}

// ============================================================================
// Movement step
// ============================================================================

#[test]
fn test_walk_moves_by_speed() {
    let mut rig = Rig::new();
    rig.press(PlayerAction::Right);
    rig.step();
    assert_eq!(rig.body.position.x, 104.0);
    assert_eq!(rig.env.player_position.x, 100.0);
}

#[test]
fn test_dash_moves_three_times_as_far() {
    let mut rig = Rig::new();
    rig.press(PlayerAction::Right);

    let start = rig.body.position.x;
    rig.step();
    let walk = rig.body.position.x - start;

    rig.press(PlayerAction::Dash);
    let start = rig.body.position.x;
    rig.step();
    let dash = rig.body.position.x - start;

    assert_eq!(dash, walk * DASH_MULTIPLIER);
    assert_eq!(rig.controller.move_speed(), rig.tuning.speed * 3.0);
}

#[test]
fn test_blocked_direction_does_not_move() {
    let mut rig = Rig::new();
    rig.press(PlayerAction::Right);
    rig.controller.movement.right = false;
    rig.step();
    assert_eq!(rig.body.position.x, 100.0);
}

#[test]
fn test_jump_height_scales_with_difficulty() {
    let mut lifts = Vec::new();

    for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
        let mut rig = Rig::new();
        rig.env.difficulty = difficulty;
        let bottom = rig.body.bottom();
        let start = rig.body.position.y;

        rig.press(PlayerAction::Up);
        let outcome = rig.step();

        let lift = start - rig.body.position.y;
        assert!(outcome.jumped);
        assert!((lift - jump_fraction(difficulty) * bottom).abs() < 1e-3);
        lifts.push(lift);
    }

    assert!(lifts[0] > lifts[1] && lifts[1] > lifts[2]);
    assert_eq!(jump_fraction(Difficulty::Easy), 0.50);
    assert_eq!(jump_fraction(Difficulty::Normal), 0.40);
    assert_eq!(jump_fraction(Difficulty::Hard), 0.30);
}

#[test]
fn test_no_jump_while_airborne() {
    let mut rig = Rig::new();
    rig.body.position.y -= 100.0;
    let start = rig.body.position.y;

    rig.press(PlayerAction::Up);
    let outcome = rig.step();

    assert!(!outcome.jumped);
    assert_eq!(rig.body.position.y, start);
}

#[test]
fn test_tube_column_clamp() {
    let mut rig = Rig::new();
    let width = rig.env.screen_width;
    let limit = TUBE_COLUMN_RATIO * width - 1.0;

    for x in [TUBE_COLUMN_RATIO * width, 1100.0, width] {
        rig.body.position.x = x;
        rig.step();
        assert_eq!(rig.body.position.x, limit);
    }

    // Past the right edge the clamp lets go so the level can end
    rig.body.position.x = width + 1.0;
    rig.step();
    assert_eq!(rig.body.position.x, width + 1.0);
}

#[test]
fn test_left_edge_clamp_stops_parallax() {
    let mut rig = Rig::new();
    rig.body.position.x = 2.0;
    rig.env.parallax.clouds = 0.05;
    rig.press(PlayerAction::Left);

    rig.step();

    assert_eq!(rig.body.position.x, 1.0);
    assert_eq!(rig.env.parallax.hills, 0.0);
    assert_eq!(rig.env.parallax.clouds, 0.0);
}

#[test]
fn test_gravity_tick_falls_and_rests_on_floor() {
    let mut rig = Rig::new();
    let resting_top = rig.body.position.y;
    rig.body.position.y -= 12.0;

    rig.body.update();
    assert_eq!(rig.body.position.y, resting_top - 4.0);

    rig.body.update();
    assert_eq!(rig.body.position.y, resting_top);
    assert!(rig.body.is_grounded());

    rig.body.gravity_enabled = false;
    rig.body.position.y -= 40.0;
    rig.body.update();
    assert_eq!(rig.body.position.y, resting_top - 40.0);
}

// ============================================================================
// Collision reactions
// ============================================================================

#[test]
fn test_platform_stand_and_step_off() {
    let mut rig = Rig::new();
    rig.body.position.y = 460.0;

    rig.react(standing_on_platform());
    assert!(!rig.controller.movement.down);
    assert!(!rig.body.gravity_enabled);

    // Held up by the platform, the body does not fall
    rig.body.update();
    assert_eq!(rig.body.position.y, 460.0);

    // Nothing touched this frame: walked off the edge
    rig.controller
        .finish_contacts(ContactSummary::default(), &mut rig.body);
    assert!(rig.controller.movement.down);
    assert!(rig.body.gravity_enabled);
}

#[test]
fn test_platform_hop() {
    let mut rig = Rig::new();
    rig.body.position.y = 460.0;
    rig.react(standing_on_platform());

    let bottom = rig.body.bottom();
    rig.press(PlayerAction::Up);
    let outcome = rig.step();

    assert!(outcome.jumped);
    assert!((460.0 - rig.body.position.y - PLATFORM_HOP_FRACTION * bottom).abs() < 1e-3);
}

#[test]
fn test_platform_contact_keeps_standing() {
    let mut rig = Rig::new();
    rig.body.position.y = 460.0;
    let platform = standing_on_platform();
    rig.react(platform);

    let mut summary = ContactSummary::default();
    summary.record(&platform);
    rig.controller.finish_contacts(summary, &mut rig.body);

    assert!(!rig.controller.movement.down);
    assert!(!rig.body.gravity_enabled);
}

#[test]
fn test_platform_side_faces_block_movement() {
    let mut rig = Rig::new();

    rig.react(touch(
        ColliderKind::JumpPlatform,
        TouchSides::right(),
        TouchSides::left(),
        320.0,
    ));
    assert!(!rig.controller.movement.right);
    assert!(rig.body.gravity_enabled);

    rig.react(touch(
        ColliderKind::JumpPlatform,
        TouchSides::left(),
        TouchSides::right(),
        320.0,
    ));
    assert!(!rig.controller.movement.left);
}

#[test]
fn test_other_contact_while_held_up_drops_player() {
    let mut rig = Rig::new();
    rig.react(standing_on_platform());

    rig.react(touch(
        ColliderKind::Scenery,
        TouchSides::right(),
        TouchSides::left(),
        200.0,
    ));

    assert!(rig.controller.movement.down);
    assert!(rig.body.gravity_enabled);
}

#[test]
fn test_no_contacts_restores_lateral_movement() {
    let mut rig = Rig::new();
    rig.controller.movement.left = false;
    rig.controller.movement.right = false;

    rig.controller
        .finish_contacts(ContactSummary::default(), &mut rig.body);

    assert!(rig.controller.movement.left);
    assert!(rig.controller.movement.right);
}

#[test]
fn test_tube_side_faces_block_movement() {
    let mut rig = Rig::new();

    let reaction = rig.react(touch(
        ColliderKind::Tube,
        TouchSides::right(),
        TouchSides::left(),
        1000.0,
    ));
    assert!(!reaction.start_tube_sequence);
    assert!(!rig.controller.movement.right);
    assert!(rig.controller.movement.left);

    // Any other target frees both directions again
    rig.react(standing_on_platform());
    assert!(rig.controller.movement.right);
}

#[test]
fn test_entering_tube_from_above_starts_once() {
    let mut rig = Rig::new();
    rig.body.position.x = 1010.0;
    let from_above = touch(
        ColliderKind::Tube,
        TouchSides::bottom(),
        TouchSides::top(),
        1000.0,
    );

    let reaction = rig.react(from_above);
    assert!(reaction.start_tube_sequence);
    assert_eq!(rig.body.position.x, 1000.0);
    assert!(!rig.body.gravity_enabled);
    assert!(rig.controller.entering_tube);

    let reaction = rig.react(from_above);
    assert!(!reaction.start_tube_sequence);
}

#[test]
fn test_easy_enemy_contact_nudges() {
    let mut rig = Rig::new();
    rig.env.difficulty = Difficulty::Easy;
    rig.body.position.x = 100.0;

    let reaction = rig.react(enemy_on_left(60.0));

    assert_eq!(rig.body.position.x, 110.0);
    assert!(reaction.death.is_none());
    assert!(!rig.controller.is_dying);
}

#[test]
fn test_lethal_contact_starts_death_once() {
    let mut rig = Rig::new();
    rig.env.difficulty = Difficulty::Normal;

    let first = rig.react(enemy_on_left(60.0));
    assert!(rig.controller.is_dying);
    let spin = first.death.unwrap();
    // Pushed right: spin clockwise and drift right
    assert!(spin.angle < 0.0);
    assert!(spin.offset.x > 0.0);

    let second = rig.react(enemy_on_left(60.0));
    assert!(second.death.is_none());
    assert!(rig.controller.is_dying);
}

#[test]
fn test_flying_enemy_is_lethal_on_hard() {
    let mut rig = Rig::new();
    rig.env.difficulty = Difficulty::Hard;

    let reaction = rig.react(touch(
        ColliderKind::FlyingEnemy,
        TouchSides::top(),
        TouchSides::bottom(),
        90.0,
    ));
    assert!(reaction.death.is_some());
}

#[test]
fn test_always_lethal_ignores_invincibility() {
    let mut rig = Rig::new();
    rig.env.invincible = true;

    let reaction = rig.react(enemy_on_left(60.0));
    assert!(reaction.death.is_some());
}

#[test]
fn test_honor_invincibility_spares_player() {
    let mut rig = Rig::with_tuning(PlayerTuning {
        enemy_contact: EnemyContactPolicy::HonorInvincibility,
        ..Default::default()
    });
    rig.env.invincible = true;
    rig.body.position.x = 100.0;

    let reaction = rig.react(enemy_on_left(60.0));
    assert!(reaction.death.is_none());
    assert_eq!(rig.body.position.x, 110.0);

    rig.env.invincible = false;
    let reaction = rig.react(enemy_on_left(60.0));
    assert!(reaction.death.is_some());
}

// ============================================================================
// Sequences
// ============================================================================

#[test]
fn test_tube_sequence_runs_two_stages() {
    let mut sequence = TubeSequence::new(1.0);

    assert_eq!(sequence.tick(Duration::from_millis(500)), None);
    assert_eq!(
        sequence.tick(Duration::from_millis(500)),
        Some(TubeStep::RestoreGravity)
    );
    assert_eq!(sequence.tick(Duration::from_millis(900)), None);
    assert_eq!(
        sequence.tick(Duration::from_millis(100)),
        Some(TubeStep::ExitLevel)
    );
    assert!(sequence.is_done());
    assert_eq!(sequence.tick(Duration::from_secs(5)), None);
}

#[test]
fn test_death_sequence_requests_restart_once() {
    let mut sequence = DeathSequence::new(1.5);

    assert!(!sequence.tick(Duration::from_secs(1)));
    assert!(sequence.tick(Duration::from_millis(500)));
    assert!(sequence.awaiting_reload());
    assert!(!sequence.tick(Duration::from_secs(2)));
}

// ============================================================================
// Network sync
// ============================================================================

#[test]
fn test_sync_snapshot_serializes_state() {
    let mut rig = Rig::new();
    rig.press(PlayerAction::Left);
    let sync = NetworkSync::new("player-1");

    let snapshot = SyncSnapshot::capture(&sync, &rig.controller, &rig.body).unwrap();
    let json = snapshot.to_json().unwrap();

    assert!(json.contains("\"id\":\"player-1\""));
    assert!(json.contains("\"facing\":\"Left\""));
    assert!(json.contains("\"idle\":false"));
}

#[test]
fn test_sync_snapshot_skipped_when_disabled() {
    let rig = Rig::new();
    let mut sync = NetworkSync::random();
    assert!(sync.id.starts_with("player-"));
    assert_eq!(sync.id.len(), "player-".len() + 8);

    sync.should_sync = false;
    assert!(SyncSnapshot::capture(&sync, &rig.controller, &rig.body).is_none());
}
