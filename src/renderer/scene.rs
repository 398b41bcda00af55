//! Scene and HUD drawing
//!
//! Draw order: paddle, ball, blocks, walls, round timer, remaining lives,
//! then any round message on top.

use glam::Vec2;

use super::RenderSurface;
use super::vertex::colors;
use crate::consts::*;
use crate::format_round_time;
use crate::sim::{BlockHealth, GameState, RoundPhase, walls};

/// Round timer text centre
const TIMER_POS: Vec2 = Vec2::new(PLAYFIELD_WIDTH - 100.0, 18.0);
/// First life indicator centre; the rest follow to the right
const LIVES_POS: Vec2 = Vec2::new(45.0, 15.0);
const LIVES_SPACING: f32 = BALL_RADIUS * 2.0 + 7.0;
const LIFE_RING_WIDTH: f32 = 2.0;
/// Secondary message sits this far below the centre line
const SUBTITLE_OFFSET: f32 = 50.0;

pub const GAME_OVER_TEXT: &str = "Game Over";
pub const WON_TEXT: &str = "You Won!";
pub const RESTART_TEXT: &str = "Press 'r' to restart";
pub const LAUNCH_TEXT: &str = "Press 'space' to launch the ball";

fn block_color(health: BlockHealth) -> [f32; 4] {
    match health {
        BlockHealth::Full => colors::BLOCK_FULL,
        BlockHealth::Damaged => colors::BLOCK_DAMAGED,
        BlockHealth::Critical => colors::BLOCK_CRITICAL,
    }
}

/// Draw one frame of the game (the caller presents it)
pub fn draw_scene(state: &GameState, surface: &mut impl RenderSurface) {
    surface.clear(colors::BACKGROUND);

    surface.draw_rect(&state.paddle.rect, colors::PADDLE);
    surface.draw_circle(state.ball.pos(), state.ball.circle.radius, colors::BALL);

    for block in &state.blocks {
        surface.draw_rect(&block.rect, block_color(block.health));
    }
    for wall in walls() {
        surface.draw_rect(&wall, colors::WALL);
    }

    surface.draw_text(
        &format_round_time(state.round_time),
        TIMER_POS,
        colors::TIMER_TEXT,
    );

    for i in 0..state.lives {
        let center = LIVES_POS + Vec2::new(i as f32 * LIVES_SPACING, 0.0);
        surface.draw_circle(center, BALL_RADIUS + LIFE_RING_WIDTH, colors::LIFE_RING);
        surface.draw_circle(center, BALL_RADIUS, colors::LIFE);
    }

    let centre = Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0);
    let below = centre + Vec2::new(0.0, SUBTITLE_OFFSET);

    match state.phase() {
        RoundPhase::Lost => {
            surface.draw_text(GAME_OVER_TEXT, centre, colors::MESSAGE_TEXT);
            surface.draw_text(RESTART_TEXT, below, colors::MESSAGE_TEXT);
        }
        RoundPhase::Won => {
            surface.draw_text(WON_TEXT, centre, colors::MESSAGE_TEXT);
            surface.draw_text(RESTART_TEXT, below, colors::MESSAGE_TEXT);
        }
        RoundPhase::Idle => surface.draw_text(LAUNCH_TEXT, below, colors::MESSAGE_TEXT),
        RoundPhase::Active => {}
    }
}
