//! Platform abstraction layer
//!
//! Handles the parts of the game that talk to the outside world:
//! - Input events and held keys (`InputSource`)
//! - Frame timing (`FrameClock`, `FramePacer`)
//! - Window startup failures (`open_window`)

pub mod macroquad_input;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::{GameError, Result};
use crate::sim::HeldKeys;

pub use macroquad_input::MacroquadInput;

/// Discrete input event drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close or OS quit request
    Quit,
    /// Left mouse button pressed at a board position
    Click { x: i32, y: i32 },
}

/// Keyboard and pointer state for the frame loop
pub trait InputSource {
    /// Every event that arrived since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Direction keys down right now
    fn held_keys(&self) -> HeldKeys;
}

/// Measures wall time between frames
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { last: start }
    }

    /// Seconds since the previous tick
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps frames from running faster than the target rate
///
/// There is no catch-up: a slow frame just produces a large delta next time.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    pub budget: Duration,
}

impl FramePacer {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    /// Time left in the frame that started at `frame_start`
    pub fn remaining(&self, frame_start: Instant, now: Instant) -> Duration {
        self.budget
            .saturating_sub(now.saturating_duration_since(frame_start))
    }

    /// Sleep out whatever is left of the frame budget
    pub fn sleep_remaining(&self, frame_start: Instant) {
        let remaining = self.remaining(frame_start, Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

/// Run `open`, which creates the window and blocks until it closes
///
/// The windowing backend panics when it cannot create the window. A panic
/// raised before `loop_started` is set becomes an `Initialization` error;
/// later panics keep unwinding.
pub fn open_window<F: FnOnce()>(open: F, loop_started: &AtomicBool) -> Result<()> {
    match panic::catch_unwind(AssertUnwindSafe(open)) {
        Ok(()) => Ok(()),
        Err(payload) if loop_started.load(Ordering::SeqCst) => panic::resume_unwind(payload),
        Err(payload) => Err(GameError::Initialization {
            step: "window creation",
            reason: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
