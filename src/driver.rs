//! Frame loop driver
//!
//! One `step` is one iteration of the game loop minus presentation and
//! pacing: measure the delta, drain input, update once, draw.

use glam::IVec2;

use crate::platform::{FrameClock, FramePacer, InputEvent, InputSource};
use crate::renderer::{Renderer, draw_scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Whether the loop should keep going after this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

pub struct FrameDriver {
    clock: FrameClock,
    pacer: FramePacer,
    frames: u64,
}

impl FrameDriver {
    pub fn new(settings: &Settings) -> Self {
        Self::with_clock(settings, FrameClock::new())
    }

    pub fn with_clock(settings: &Settings, clock: FrameClock) -> Self {
        Self {
            clock,
            pacer: FramePacer::new(settings.frame_delay()),
            frames: 0,
        }
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    /// Frames stepped so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame using wall-clock time
    pub fn step<I, R>(&mut self, state: &mut GameState, input: &mut I, renderer: &mut R) -> LoopControl
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let dt = self.clock.tick();
        self.step_with_dt(state, input, renderer, dt)
    }

    /// Run one frame with an explicit delta (seconds)
    ///
    /// A quit request still lets the current frame update and draw; the loop
    /// stops at the next check.
    pub fn step_with_dt<I, R>(
        &mut self,
        state: &mut GameState,
        input: &mut I,
        renderer: &mut R,
        dt: f32,
    ) -> LoopControl
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let mut control = LoopControl::Continue;
        let mut clicks = Vec::new();
        for event in input.poll_events() {
            match event {
                InputEvent::Quit => control = LoopControl::Quit,
                InputEvent::Click { x, y } => clicks.push(IVec2::new(x, y)),
            }
        }

        let tick_input = TickInput {
            held: input.held_keys(),
            clicks,
        };
        for event in tick(state, &tick_input, dt) {
            log_event(&event, self.frames);
        }

        draw_scene(state, renderer);
        self.frames += 1;

        if control == LoopControl::Quit {
            log::info!("Quit requested after {} frames", self.frames);
        }
        control
    }
}

fn log_event(event: &GameEvent, frame: u64) {
    match event {
        GameEvent::CoinCollected { score, size } => {
            log::debug!("[frame {frame}] coin: score {score}, size {size}")
        }
        GameEvent::Crashed { obstacle } => log::debug!("[frame {frame}] crashed into {obstacle}"),
        GameEvent::Restarted => log::debug!("[frame {frame}] restarted"),
        GameEvent::BoardFull => log::debug!("[frame {frame}] board full"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::testing::{DrawCall, RecordingRenderer};
    use crate::sim::{Direction, GamePhase, HeldKeys, Player, Rect};
    use glam::Vec2;
    use std::collections::VecDeque;
    use std::time::{Duration, Instant};

    /// Scripted input: one batch of events per frame
    #[derive(Default)]
    struct ScriptedInput {
        frames: VecDeque<Vec<InputEvent>>,
        held: HeldKeys,
    }

    impl InputSource for ScriptedInput {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            self.frames.pop_front().unwrap_or_default()
        }

        fn held_keys(&self) -> HeldKeys {
            self.held
        }
    }

    fn quiet_state() -> GameState {
        let settings = Settings::default();
        let player = Player::centered(50, settings.bounds());
        GameState::from_parts(
            settings,
            8,
            player,
            Rect::square(0, 0, 50),
            vec![Rect::new(560, 480, 20, 20)],
        )
    }

    #[test]
    fn test_step_updates_and_draws_once() {
        let mut state = quiet_state();
        let mut input = ScriptedInput {
            held: [Direction::Down].into_iter().collect(),
            ..Default::default()
        };
        let mut renderer = RecordingRenderer::default();
        let mut driver = FrameDriver::new(&state.settings);

        let control = driver.step_with_dt(&mut state, &mut input, &mut renderer, 0.1);
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(state.player.pos, Vec2::new(475.0, 545.0));
        assert_eq!(driver.frames(), 1);
        let clears = renderer
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear(_)))
            .count();
        assert_eq!(clears, 1);
    }

    #[test]
    fn test_quit_event_stops_loop() {
        let mut state = quiet_state();
        let mut input = ScriptedInput {
            frames: VecDeque::from(vec![vec![], vec![InputEvent::Quit]]),
            ..Default::default()
        };
        let mut renderer = RecordingRenderer::default();
        let mut driver = FrameDriver::new(&state.settings);

        let mut frames = 0;
        while driver.step_with_dt(&mut state, &mut input, &mut renderer, 0.008)
            == LoopControl::Continue
        {
            frames += 1;
            assert!(frames < 10, "loop did not stop");
        }
        assert_eq!(driver.frames(), 2);
    }

    #[test]
    fn test_clicks_reach_the_simulation() {
        let mut state = quiet_state();
        state.phase = GamePhase::GameOver;
        state.score = 3;
        let mut input = ScriptedInput {
            frames: VecDeque::from(vec![vec![
                InputEvent::Click { x: 5, y: 5 },
                InputEvent::Click { x: 650, y: 490 },
            ]]),
            ..Default::default()
        };
        let mut renderer = RecordingRenderer::default();
        let mut driver = FrameDriver::new(&state.settings);

        driver.step_with_dt(&mut state, &mut input, &mut renderer, 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_crash_moves_to_game_over_and_draws_button() {
        let mut state = quiet_state();
        let mut input = ScriptedInput {
            held: [Direction::Right].into_iter().collect(),
            ..Default::default()
        };
        let mut renderer = RecordingRenderer::default();
        let mut driver = FrameDriver::new(&state.settings);

        driver.step_with_dt(&mut state, &mut input, &mut renderer, 0.1);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(
            renderer
                .calls
                .iter()
                .any(|c| matches!(c, DrawCall::Text(t, _, _) if t == "Play Again"))
        );
    }

    #[test]
    fn test_wall_clock_step_uses_measured_delta() {
        let mut state = quiet_state();
        let mut input = ScriptedInput {
            held: [Direction::Up].into_iter().collect(),
            ..Default::default()
        };
        let mut renderer = RecordingRenderer::default();
        let start = Instant::now() - Duration::from_millis(100);
        let mut driver = FrameDriver::with_clock(&state.settings, FrameClock::starting_at(start));

        driver.step(&mut state, &mut input, &mut renderer);
        // At least 100ms at 700px/s
        assert!(state.player.pos.y <= 475.0 - 70.0 + 0.01);
    }

    #[test]
    fn test_pacer_budget_from_settings() {
        let driver = FrameDriver::new(&Settings::default());
        assert_eq!(driver.pacer().budget, Duration::from_millis(8));
    }
}
