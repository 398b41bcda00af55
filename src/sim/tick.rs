//! Per-frame simulation tick
//!
//! One call advances the game by the measured frame delta. The pipeline runs
//! in a fixed order and each step sees the state the previous one left:
//!
//! 1. round timer accrues (only while the round is undecided)
//! 2. paddle moves, clamped between the side walls
//! 3. ball moves (no sub-stepping: fast balls can tunnel)
//! 4. a ball that left the playfield costs a life
//! 5. ball vs walls, then every live block, then the paddle
//! 6. this frame's input events are applied
//!
//! Steps 3-5 are skipped once the round is Lost or Won.

use super::input::{Command, InputEvent};
use super::physics::{apply_english, hit_ball};
use super::state::{GameEvent, GameState, RoundPhase, out_of_bounds, walls};
use crate::ball_start_position;
use crate::consts::*;

/// Advance the game by `dt` seconds, then apply `events`
///
/// Returns what happened this tick, in order.
pub fn tick(state: &mut GameState, events: &[InputEvent], dt: f32) -> Vec<GameEvent> {
    let mut out = Vec::new();

    if !state.phase().is_terminal() {
        state.round_time += dt;
    }

    state
        .paddle
        .advance(dt, WALL_THICKNESS, PLAYFIELD_WIDTH - WALL_THICKNESS);

    if !state.phase().is_terminal() {
        state.ball.advance(dt);
        check_ball_lost(state, &mut out);
    }

    // Losing the last ball ends the round before any collision
    if !state.phase().is_terminal() {
        collide_walls(state);
        collide_blocks(state, &mut out);
        collide_paddle(state, dt, &mut out);
    }

    apply_input(state, events, &mut out);

    out
}

/// Take a life if the ball has left the playfield
fn check_ball_lost(state: &mut GameState, out: &mut Vec<GameEvent>) {
    if !out_of_bounds(state.ball.pos()) {
        return;
    }

    state.lives = state.lives.saturating_sub(1);
    out.push(GameEvent::BallLost { lives: state.lives });

    if state.lives > 0 {
        log::info!("Ball lost, {} lives left", state.lives);
        state.ball.park(ball_start_position());
    } else {
        log::info!("Ball lost, round over after {:.1}s", state.round_time);
        out.push(GameEvent::RoundLost);
    }
}

fn collide_walls(state: &mut GameState) {
    for wall in walls() {
        hit_ball(&mut state.ball, &wall);
    }
}

/// Reflect off every touching block and damage it, removing destroyed blocks
fn collide_blocks(state: &mut GameState, out: &mut Vec<GameEvent>) {
    let ball = &mut state.ball;
    let mut destroyed = 0;

    state.blocks.retain_mut(|block| {
        if !hit_ball(ball, &block.rect) {
            return true;
        }
        if block.damage() {
            destroyed += 1;
            return false;
        }
        log::debug!("Block hit, now {:?}", block.health);
        out.push(GameEvent::BlockDamaged {
            health: block.health,
        });
        true
    });

    if destroyed == 0 {
        return;
    }

    let remaining = state.blocks.len();
    for _ in 0..destroyed {
        out.push(GameEvent::BlockDestroyed { remaining });
    }
    log::debug!("{} block(s) destroyed, {} remaining", destroyed, remaining);

    if remaining == 0 {
        log::info!("All blocks cleared in {:.1}s", state.round_time);
        out.push(GameEvent::RoundWon);
    }
}

/// Reflect off the paddle, add english and step the ball clear of it
fn collide_paddle(state: &mut GameState, dt: f32, out: &mut Vec<GameEvent>) {
    if !hit_ball(&mut state.ball, &state.paddle.rect) {
        return;
    }

    state.ball.direction = apply_english(state.ball.direction, state.paddle.direction as f32);
    state.ball.advance(dt);
    out.push(GameEvent::PaddleHit);
}

fn apply_input(state: &mut GameState, events: &[InputEvent], out: &mut Vec<GameEvent>) {
    for &event in events {
        let command = state.controls.apply(event, &mut state.paddle.direction);

        match command {
            Some(Command::Launch) => {
                if state.phase() == RoundPhase::Idle {
                    state.ball.launch();
                    log::info!("Ball launched");
                    out.push(GameEvent::Launched);
                }
            }
            Some(Command::Reset) => {
                state.reset();
                log::info!("Round reset");
                out.push(GameEvent::Reset);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paddle_start_position;
    use crate::sim::input::Key;
    use crate::sim::state::{Block, BlockHealth};
    use glam::Vec2;
    use proptest::prelude::*;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1.0e-4
    }

    /// A launched state with the ball placed and aimed by hand
    fn ball_at(x: f32, y: f32, direction: Vec2) -> GameState {
        let mut state = GameState::default();
        state.ball.circle.set_center(Vec2::new(x, y));
        state.ball.direction = direction;
        state
    }

    #[test]
    fn test_launch_from_idle() {
        let mut state = GameState::default();
        assert_eq!(state.phase(), RoundPhase::Idle);

        // Idle tick: nothing moves
        let events = tick(&mut state, &[], 0.1);
        assert!(events.is_empty());
        assert_eq!(state.ball.pos(), ball_start_position());

        let events = tick(&mut state, &[InputEvent::KeyDown(Key::Launch)], 0.1);
        assert_eq!(events, vec![GameEvent::Launched]);
        assert_eq!(state.phase(), RoundPhase::Active);
        assert_eq!(state.ball.direction, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_launch_ignored_while_active() {
        let mut state = ball_at(400.0, 300.0, Vec2::new(0.6, -0.8));
        let events = tick(&mut state, &[InputEvent::KeyDown(Key::Launch)], 0.01);
        assert!(!events.contains(&GameEvent::Launched));
        assert!(approx_eq(state.ball.direction, Vec2::new(0.6, -0.8)));
    }

    #[test]
    fn test_ball_lost_with_spare_life() {
        let mut state = ball_at(400.0, 599.0, Vec2::new(0.0, 1.0));
        state.lives = 2;

        let events = tick(&mut state, &[], 0.1);
        assert_eq!(events, vec![GameEvent::BallLost { lives: 1 }]);
        assert_eq!(state.lives, 1);
        assert_eq!(state.ball.pos(), ball_start_position());
        assert_eq!(state.ball.direction, Vec2::ZERO);
        assert_eq!(state.phase(), RoundPhase::Idle);
    }

    #[test]
    fn test_last_ball_lost_ends_round() {
        let mut state = ball_at(400.0, 599.0, Vec2::new(0.0, 1.0));
        state.lives = 1;

        let events = tick(&mut state, &[], 0.1);
        assert_eq!(
            events,
            vec![GameEvent::BallLost { lives: 0 }, GameEvent::RoundLost]
        );
        assert_eq!(state.phase(), RoundPhase::Lost);

        // Frozen: the ball stays put and the timer stops
        let pos = state.ball.pos();
        let time = state.round_time;
        let events = tick(&mut state, &[], 0.1);
        assert!(events.is_empty());
        assert_eq!(state.ball.pos(), pos);
        assert_eq!(state.round_time, time);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_wall_bounce() {
        // Heading into the left wall
        let mut state = ball_at(45.0, 300.0, Vec2::new(-1.0, 0.0));
        tick(&mut state, &[], 0.05);
        assert!(approx_eq(state.ball.direction, Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_block_hit_damages_and_reflects() {
        let mut state = GameState::default();
        let block = state.blocks[24].rect;
        let x = block.left() + block.width() / 2.0;
        let y = block.bottom() + 7.0;
        state.ball.circle.set_center(Vec2::new(x, y));
        state.ball.direction = Vec2::new(0.0, -1.0);

        let events = tick(&mut state, &[], 0.01);
        assert_eq!(
            events,
            vec![GameEvent::BlockDamaged {
                health: BlockHealth::Damaged
            }]
        );
        assert_eq!(state.blocks[24].health, BlockHealth::Damaged);
        assert_eq!(state.blocks.len(), 25);
        assert!(approx_eq(state.ball.direction, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn test_destroying_last_block_wins() {
        let mut state = GameState::default();
        let mut last = state.blocks.pop().expect("grid has blocks");
        last.health = BlockHealth::Critical;
        let rect = last.rect;
        state.blocks = vec![last];

        state.ball.circle.set_center(Vec2::new(
            rect.left() + rect.width() / 2.0,
            rect.bottom() + 7.0,
        ));
        state.ball.direction = Vec2::new(0.0, -1.0);

        let events = tick(&mut state, &[], 0.01);
        assert_eq!(
            events,
            vec![
                GameEvent::BlockDestroyed { remaining: 0 },
                GameEvent::RoundWon
            ]
        );
        assert_eq!(state.phase(), RoundPhase::Won);
    }

    #[test]
    fn test_clearing_full_grid_wins() {
        let mut state = GameState::default();
        let mut won = false;

        // Knock out every block by parking the ball under it three times
        while let Some(block) = state.blocks.first() {
            let rect = block.rect;
            state.ball.circle.set_center(Vec2::new(
                rect.left() + rect.width() / 2.0,
                rect.bottom() + 7.0,
            ));
            state.ball.direction = Vec2::new(0.0, -1.0);
            let events = tick(&mut state, &[], 0.01);
            won = events.contains(&GameEvent::RoundWon);
        }

        assert!(won);
        assert_eq!(state.phase(), RoundPhase::Won);
    }

    #[test]
    fn test_paddle_english() {
        let mut state = ball_at(400.0, 541.0, Vec2::new(0.0, 1.0));
        state.paddle.direction = 1;

        let events = tick(&mut state, &[], 0.01);
        assert_eq!(events, vec![GameEvent::PaddleHit]);
        let expected = Vec2::new(1.0, -1.0).normalize();
        assert!(approx_eq(state.ball.direction, expected));
    }

    #[test]
    fn test_reset_after_loss() {
        let mut state = ball_at(400.0, 599.0, Vec2::new(0.0, 1.0));
        state.lives = 1;
        state.paddle.direction = -1;
        tick(&mut state, &[], 0.5);
        assert_eq!(state.phase(), RoundPhase::Lost);

        let events = tick(&mut state, &[InputEvent::KeyDown(Key::Reset)], 0.1);
        assert_eq!(events, vec![GameEvent::Reset]);
        assert_eq!(state.lives, 3);
        assert_eq!(state.ball.pos(), ball_start_position());
        assert_eq!(state.ball.direction, Vec2::ZERO);
        assert_eq!(state.paddle.rect.pos, paddle_start_position());
        assert_eq!(state.blocks.len(), 25);
        assert!(state.blocks.iter().all(|b| b.health == BlockHealth::Full));
        assert_eq!(state.round_time, 0.0);
        assert_eq!(state.phase(), RoundPhase::Idle);
    }

    #[test]
    fn test_reset_after_win() {
        let mut state = GameState::default();
        state.ball.launch();
        state.blocks.clear();
        assert_eq!(state.phase(), RoundPhase::Won);

        tick(&mut state, &[InputEvent::KeyDown(Key::Reset)], 0.1);
        assert_eq!(state.blocks.len(), 25);
        assert_eq!(state.phase(), RoundPhase::Idle);
    }

    #[test]
    fn test_reset_mid_round() {
        let mut state = ball_at(400.0, 300.0, Vec2::new(0.6, -0.8));
        state.lives = 2;
        state.round_time = 12.0;

        tick(&mut state, &[InputEvent::KeyDown(Key::Reset)], 0.01);
        assert_eq!(state.lives, 3);
        assert_eq!(state.round_time, 0.0);
        assert_eq!(state.phase(), RoundPhase::Idle);
    }

    #[test]
    fn test_round_time_accrues_until_decided() {
        let mut state = GameState::default();
        tick(&mut state, &[], 0.25);
        tick(&mut state, &[], 0.25);
        assert!((state.round_time - 0.5).abs() < 1.0e-6);

        state.blocks.clear();
        tick(&mut state, &[], 0.25);
        assert!((state.round_time - 0.5).abs() < 1.0e-6);
    }

    #[test]
    fn test_input_applies_after_movement() {
        let mut state = GameState::default();
        let start = state.paddle.rect.left();

        // Direction set this tick only moves the paddle next tick
        tick(&mut state, &[InputEvent::KeyDown(Key::Right)], 0.1);
        assert_eq!(state.paddle.rect.left(), start);
        assert_eq!(state.paddle.direction, 1);

        tick(&mut state, &[], 0.1);
        assert!((state.paddle.rect.left() - (start + 20.0)).abs() < 1.0e-4);
    }

    proptest! {
        #[test]
        fn paddle_stays_between_walls(dt in 0.0f32..100.0, right in any::<bool>(), ticks in 1usize..5) {
            let mut state = GameState::default();
            state.paddle.direction = if right { 1 } else { -1 };
            for _ in 0..ticks {
                tick(&mut state, &[], dt);
                prop_assert!(state.paddle.rect.left() >= WALL_THICKNESS);
                prop_assert!(state.paddle.rect.right() <= PLAYFIELD_WIDTH - WALL_THICKNESS);
            }
        }
    }

    #[test]
    fn test_block_list_is_column_major_after_hits() {
        // Removing a block keeps the others in creation order
        let mut state = GameState::default();
        let order: Vec<_> = state.blocks.iter().map(|b| b.rect.pos).collect();
        state.blocks[3] = Block {
            health: BlockHealth::Critical,
            ..state.blocks[3].clone()
        };
        let rect = state.blocks[3].rect;
        state.ball.circle.set_center(Vec2::new(
            rect.left() + rect.width() / 2.0,
            rect.bottom() + 7.0,
        ));
        state.ball.direction = Vec2::new(0.0, -1.0);
        tick(&mut state, &[], 0.01);

        let after: Vec<_> = state.blocks.iter().map(|b| b.rect.pos).collect();
        let mut expected = order;
        expected.remove(3);
        assert_eq!(after, expected);
    }
}
