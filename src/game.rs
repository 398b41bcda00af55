//! Frame driver
//!
//! Owns the game state and its collaborators and runs one simulation tick per
//! frame: measure the delta, drain input, tick, draw, present, pace. The
//! measured delta is used as-is (variable time step, no sub-stepping).

use crate::platform::{Clock, InputSource};
use crate::renderer::{RenderSurface, draw_scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, InputEvent, tick};

/// What the driver should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Game instance holding all state
pub struct Game<S, I, C> {
    pub state: GameState,
    surface: S,
    input: I,
    clock: C,
    target_fps: u32,
    /// Frames run so far
    pub frames: u64,
}

impl<S, I, C> Game<S, I, C>
where
    S: RenderSurface,
    I: InputSource,
    C: Clock,
{
    pub fn new(settings: &Settings, surface: S, input: I, clock: C) -> Self {
        Self {
            state: GameState::new(settings.tuning),
            surface,
            input,
            clock,
            target_fps: settings.target_fps,
            frames: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Run a single frame
    ///
    /// A quit event ends the game at once: the rest of the frame's events are
    /// dropped and nothing is drawn.
    pub fn run_frame(&mut self) -> (FrameOutcome, Vec<GameEvent>) {
        let dt = self.clock.delta();
        let events = self.input.poll();

        if events.contains(&InputEvent::Quit) {
            log::info!("Quit requested");
            return (FrameOutcome::Quit, Vec::new());
        }

        let game_events = tick(&mut self.state, &events, dt);
        log::trace!("Frame {} dt={:.4}s events={:?}", self.frames, dt, game_events);

        draw_scene(&self.state, &mut self.surface);
        self.surface.present();
        self.frames += 1;

        (FrameOutcome::Continue, game_events)
    }

    /// Run frames until quit or until `frame_limit` frames have run
    ///
    /// Returns every game event produced, in order.
    pub fn run(&mut self, frame_limit: Option<u64>) -> Vec<GameEvent> {
        let mut history = Vec::new();

        while frame_limit.is_none_or(|limit| self.frames < limit) {
            let (outcome, events) = self.run_frame();
            history.extend(events);
            if outcome == FrameOutcome::Quit {
                break;
            }
            self.clock.pace(self.target_fps);
        }

        history
    }
}
