//! Simulation module
//!
//! All gameplay logic lives here. No rendering, clock or platform
//! dependencies: the frame driver feeds in a time delta and input events and
//! reads the state back out.

pub mod collision;
pub mod geometry;
pub mod input;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::rect_circle_overlap;
pub use geometry::{Circle, Rect, normalize};
pub use input::{Command, Controls, InputEvent, Key};
pub use physics::{apply_english, hit_ball, reflect_direction};
pub use state::{
    Ball, Block, BlockHealth, GameEvent, GameState, Paddle, RoundPhase, Tuning, generate_blocks,
    out_of_bounds, walls,
};
pub use tick::tick;
