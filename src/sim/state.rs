//! Game state and core simulation types
//!
//! `GameState` is the single aggregate the tick pipeline mutates. The round
//! phase is not stored: it is derived from lives, the block collection and the
//! ball direction, so it can never drift out of sync with them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Rect};
use super::input::Controls;
use crate::consts::*;
use crate::{ball_start_position, paddle_start_position};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Ball parked at the start position, waiting for launch input
    Idle,
    /// Ball in play
    Active,
    /// No lives left
    Lost,
    /// Every block destroyed
    Won,
}

impl RoundPhase {
    /// Lost and Won stop the round timer and freeze the ball
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundPhase::Lost | RoundPhase::Won)
    }
}

/// Something that happened during a tick, for logging and presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    BlockDamaged { health: BlockHealth },
    BlockDestroyed { remaining: usize },
    PaddleHit,
    BallLost { lives: u8 },
    RoundLost,
    RoundWon,
    Reset,
}

/// Speeds and starting lives, overridable from settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ball speed in pixels per second
    pub ball_speed: f32,
    /// Paddle speed in pixels per second
    pub paddle_speed: f32,
    pub starting_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_speed: BALL_SPEED,
            paddle_speed: PADDLE_SPEED,
            starting_lives: STARTING_LIVES,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub circle: Circle,
    /// Unit direction of travel, or zero before launch
    pub direction: Vec2,
    /// Scalar speed, constant for the whole round
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            circle: Circle::new(pos.x, pos.y, radius),
            direction: Vec2::ZERO,
            speed,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.circle.center
    }

    /// True once the ball has a non-zero direction
    #[inline]
    pub fn is_launched(&self) -> bool {
        self.direction != Vec2::ZERO
    }

    /// Move along the current direction for `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        let pos = self.circle.center + self.direction * self.speed * dt;
        self.circle.set_center(pos);
    }

    /// Park the ball at `pos` with zero direction
    pub fn park(&mut self, pos: Vec2) {
        self.circle.set_center(pos);
        self.direction = Vec2::ZERO;
    }

    /// Start moving straight down, toward the paddle
    pub fn launch(&mut self) {
        self.direction = Vec2::Y;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Horizontal intent: -1 left, 0 still, 1 right
    pub direction: i8,
    /// Pixels per second
    pub speed: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, PADDLE_WIDTH, PADDLE_HEIGHT),
            direction: 0,
            speed,
        }
    }

    /// Move by `direction * speed * dt`, keeping the paddle within `[min_x, max_x]`
    pub fn advance(&mut self, dt: f32, min_x: f32, max_x: f32) {
        let step = self.direction as f32 * self.speed * dt;
        let max_left = (max_x - self.rect.width()).max(min_x);
        let x = (self.rect.left() + step).clamp(min_x, max_left);
        self.rect.set_position(Vec2::new(x, self.rect.top()));
    }
}

/// Block health, shown as colour. A hit while Critical destroys the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockHealth {
    #[default]
    Full,
    Damaged,
    Critical,
}

/// A destructible block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    pub health: BlockHealth,
}

impl Block {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            health: BlockHealth::Full,
        }
    }

    /// Take one hit. Returns true when the block is destroyed and must be removed.
    pub fn damage(&mut self) -> bool {
        match self.health {
            BlockHealth::Full => {
                self.health = BlockHealth::Damaged;
                false
            }
            BlockHealth::Damaged => {
                self.health = BlockHealth::Critical;
                false
            }
            BlockHealth::Critical => true,
        }
    }
}

/// Build the full block grid, horizontally centred in the playfield
///
/// Blocks are laid out column by column.
pub fn generate_blocks() -> Vec<Block> {
    let cell_w = BLOCK_WIDTH + BLOCK_MARGIN;
    let cell_h = BLOCK_HEIGHT + BLOCK_MARGIN;
    let start_x = PLAYFIELD_WIDTH / 2.0 - (BLOCK_COLUMNS as f32 * cell_w) / 2.0;

    let mut blocks = Vec::with_capacity(BLOCK_COLUMNS * BLOCK_ROWS);
    for col in 0..BLOCK_COLUMNS {
        for row in 0..BLOCK_ROWS {
            blocks.push(Block::new(Rect::new(
                start_x + col as f32 * cell_w,
                BLOCK_GRID_TOP + row as f32 * cell_h,
                BLOCK_WIDTH,
                BLOCK_HEIGHT,
            )));
        }
    }
    blocks
}

/// The three collidable walls: top, left, right. The bottom is open.
pub fn walls() -> [Rect; 3] {
    [
        Rect::new(0.0, 0.0, PLAYFIELD_WIDTH, WALL_THICKNESS),
        Rect::new(0.0, 0.0, WALL_THICKNESS, PLAYFIELD_HEIGHT),
        Rect::new(
            PLAYFIELD_WIDTH - WALL_THICKNESS,
            0.0,
            WALL_THICKNESS,
            PLAYFIELD_HEIGHT,
        ),
    ]
}

/// True when a point has left the playfield on any side
#[inline]
pub fn out_of_bounds(pos: Vec2) -> bool {
    pos.y >= PLAYFIELD_HEIGHT || pos.y < 0.0 || pos.x > PLAYFIELD_WIDTH || pos.x < 0.0
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live blocks, in grid creation order
    pub blocks: Vec<Block>,
    pub lives: u8,
    /// Seconds of play this round (stops once the round is decided)
    pub round_time: f32,
    /// Held-key tracking for the paddle
    pub controls: Controls,
    pub tuning: Tuning,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Create a fresh round
    pub fn new(tuning: Tuning) -> Self {
        Self {
            ball: Ball::new(ball_start_position(), BALL_RADIUS, tuning.ball_speed),
            paddle: Paddle::new(paddle_start_position(), tuning.paddle_speed),
            blocks: generate_blocks(),
            lives: tuning.starting_lives,
            round_time: 0.0,
            controls: Controls::default(),
            tuning,
        }
    }

    /// Restart the round in place: lives, ball, paddle position, block grid, timer
    ///
    /// Held keys and the paddle's current direction survive a reset.
    pub fn reset(&mut self) {
        self.lives = self.tuning.starting_lives;
        self.ball.park(ball_start_position());
        self.paddle.rect.set_position(paddle_start_position());
        self.blocks = generate_blocks();
        self.round_time = 0.0;
    }

    /// Derive the round phase
    pub fn phase(&self) -> RoundPhase {
        if self.lives == 0 {
            RoundPhase::Lost
        } else if self.blocks.is_empty() {
            RoundPhase::Won
        } else if !self.ball.is_launched() {
            RoundPhase::Idle
        } else {
            RoundPhase::Active
        }
    }
}
