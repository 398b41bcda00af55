//! Platform abstraction layer
//!
//! The frame driver talks to the outside world through two traits:
//! - `InputSource`: discrete key/quit events, drained once per frame
//! - `Clock`: time since the previous frame and end-of-frame pacing
//!
//! A windowed frontend implements these over its event loop. The types here
//! cover headless runs and tests.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{InputEvent, Key};

/// Source of input events
pub trait InputSource {
    /// All events that arrived since the previous poll
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Frame timing
pub trait Clock {
    /// Seconds elapsed since the previous call (the first call measures from creation)
    fn delta(&mut self) -> f32;

    /// Wait out the remainder of the frame at `target_fps`
    fn pace(&mut self, target_fps: u32);
}

/// Wall-clock timing backed by `Instant`
#[derive(Debug)]
pub struct SystemClock {
    last_tick: Instant,
    frame_start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_tick: now,
            frame_start: now,
        }
    }
}

impl Clock for SystemClock {
    fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.frame_start = now;
        dt
    }

    fn pace(&mut self, target_fps: u32) {
        if target_fps == 0 {
            return;
        }
        let frame = Duration::from_secs_f64(1.0 / target_fps as f64);
        let elapsed = self.frame_start.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }
}

/// Constant delta and no waiting, for deterministic runs
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl Clock for FixedClock {
    fn delta(&mut self) -> f32 {
        self.dt
    }

    fn pace(&mut self, _target_fps: u32) {}
}

/// Plays back a prepared list of events, one batch per frame
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Queue a batch for a later frame
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Seeded key masher for headless soak runs
///
/// Each frame it may press or release a direction key, launches whenever the
/// ball might be waiting and occasionally resets. It never quits.
#[derive(Debug)]
pub struct MashInput {
    rng: Pcg32,
    held: Option<Key>,
}

impl MashInput {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: None,
        }
    }
}

impl InputSource for MashInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if self.rng.random_bool(0.1) {
            if let Some(key) = self.held.take() {
                events.push(InputEvent::KeyUp(key));
            }
            let key = match self.rng.random_range(0..3) {
                0 => Some(Key::Left),
                1 => Some(Key::Right),
                _ => None,
            };
            if let Some(key) = key {
                events.push(InputEvent::KeyDown(key));
                self.held = Some(key);
            }
        }

        if self.rng.random_bool(0.05) {
            events.push(InputEvent::KeyDown(Key::Launch));
            events.push(InputEvent::KeyUp(Key::Launch));
        }

        if self.rng.random_bool(0.001) {
            events.push(InputEvent::KeyDown(Key::Reset));
            events.push(InputEvent::KeyUp(Key::Reset));
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_drains_in_order() {
        let mut input = ScriptedInput::new(vec![
            vec![InputEvent::KeyDown(Key::Launch)],
            vec![],
        ]);
        input.push_frame(vec![InputEvent::Quit]);

        assert_eq!(input.poll(), vec![InputEvent::KeyDown(Key::Launch)]);
        assert!(input.poll().is_empty());
        assert_eq!(input.poll(), vec![InputEvent::Quit]);
        // Exhausted script yields nothing
        assert!(input.poll().is_empty());
    }

    #[test]
    fn test_mash_input_is_deterministic() {
        let mut a = MashInput::new(7);
        let mut b = MashInput::new(7);
        for _ in 0..200 {
            assert_eq!(a.poll(), b.poll());
        }
    }

    #[test]
    fn test_mash_input_never_quits() {
        let mut input = MashInput::new(1);
        for _ in 0..1000 {
            assert!(!input.poll().contains(&InputEvent::Quit));
        }
    }

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock::new(0.25);
        assert_eq!(clock.delta(), 0.25);
        clock.pace(30);
        assert_eq!(clock.delta(), 0.25);
    }

    #[test]
    fn test_system_clock_measures_elapsed_time() {
        let mut clock = SystemClock::new();
        std::thread::sleep(Duration::from_millis(5));
        assert!(clock.delta() >= 0.005);
    }
}
