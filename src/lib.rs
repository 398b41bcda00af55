//! Breakout - A paddle, a ball and a grid of blocks
//!
//! Core modules:
//! - `sim`: Simulation (geometry, collisions, reflection physics, round state)
//! - `game`: Frame driver tying the simulation to its collaborators
//! - `renderer`: Render surface trait, scene/HUD drawing, tessellation
//! - `platform`: Input source and clock abstractions
//! - `settings`: Runtime configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameOutcome, Game};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the driver (the measured delta is still used for integration)
    pub const TARGET_FPS: u32 = 30;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    /// Thickness of the top, left and right walls
    pub const WALL_THICKNESS: f32 = 30.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 200.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 25.0;
    pub const PADDLE_SPEED: f32 = 200.0;
    /// Paddle top edge sits this far above the bottom of the playfield
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;

    /// Lives at the start of a round
    pub const STARTING_LIVES: u8 = 3;

    /// Block grid layout
    pub const BLOCK_COLUMNS: usize = 5;
    pub const BLOCK_ROWS: usize = 5;
    pub const BLOCK_WIDTH: f32 = 75.0;
    pub const BLOCK_HEIGHT: f32 = 25.0;
    pub const BLOCK_MARGIN: f32 = 10.0;
    /// Top of the first block row
    pub const BLOCK_GRID_TOP: f32 = 100.0;
}

/// Where the ball waits before launch (playfield centre)
#[inline]
pub fn ball_start_position() -> Vec2 {
    Vec2::new(consts::PLAYFIELD_WIDTH / 2.0, consts::PLAYFIELD_HEIGHT / 2.0)
}

/// Top-left corner of the paddle at round start
#[inline]
pub fn paddle_start_position() -> Vec2 {
    Vec2::new(
        consts::PLAYFIELD_WIDTH / 2.0 - consts::PADDLE_WIDTH / 2.0,
        consts::PLAYFIELD_HEIGHT - consts::PADDLE_BOTTOM_OFFSET,
    )
}

/// Format seconds as `m:ss` for the round timer
pub fn format_round_time(round_time: f32) -> String {
    let total = round_time.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
