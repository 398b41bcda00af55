//! Discrete input events and held-key tracking
//!
//! The platform delivers key transitions; the simulation turns them into a
//! paddle direction plus one-shot launch/reset commands.

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Launch,
    Reset,
}

/// One input event from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// One-shot command produced by an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Launch,
    Reset,
}

/// Which movement keys are held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub left_down: bool,
    pub right_down: bool,
}

impl Controls {
    /// Apply one event
    ///
    /// `paddle_direction` is updated for movement keys. Pressing a direction
    /// always wins; releasing one falls back to the other key if still held.
    /// Returns a command for launch/reset presses. Quit and key-ups of
    /// launch/reset produce nothing.
    pub fn apply(&mut self, event: InputEvent, paddle_direction: &mut i8) -> Option<Command> {
        match event {
            InputEvent::KeyDown(Key::Right) => {
                self.right_down = true;
                *paddle_direction = 1;
                None
            }
            InputEvent::KeyDown(Key::Left) => {
                self.left_down = true;
                *paddle_direction = -1;
                None
            }
            InputEvent::KeyUp(Key::Right) => {
                self.right_down = false;
                *paddle_direction = if self.left_down { -1 } else { 0 };
                None
            }
            InputEvent::KeyUp(Key::Left) => {
                self.left_down = false;
                *paddle_direction = if self.right_down { 1 } else { 0 };
                None
            }
            InputEvent::KeyDown(Key::Launch) => Some(Command::Launch),
            InputEvent::KeyDown(Key::Reset) => Some(Command::Reset),
            InputEvent::KeyUp(Key::Launch | Key::Reset) | InputEvent::Quit => None,
        }
    }
}
