//! Per-frame simulation update
//!
//! Order within a tick: play-again clicks, then movement, then the obstacle
//! check on the candidate position, then coin pickup.

use glam::IVec2;

use super::collision::first_hit;
use super::player::{HeldKeys, clamp_to_bounds, compute_intent};
use super::state::{GameEvent, GamePhase, GameState};

/// Input sampled for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Direction keys currently held
    pub held: HeldKeys,
    /// Left-button presses this frame, in board pixels
    pub clicks: Vec<IVec2>,
}

/// Advance the game by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        let button = state.settings.play_again_button();
        if input.clicks.iter().any(|c| button.contains_point(c.x, c.y)) {
            match state.restart() {
                Ok(()) => events.push(GameEvent::Restarted),
                Err(e) => log::error!("Restart failed: {}", e),
            }
        }
    }

    if state.phase != GamePhase::Playing {
        return events;
    }

    let delta = compute_intent(input.held, state.settings.speed, dt);
    let candidate = clamp_to_bounds(
        state.player.pos + delta,
        state.player.size,
        state.settings.bounds(),
    );

    // Test the move before committing it
    let candidate_rect = state.player.rect_at(candidate);
    if let Some(obstacle) = first_hit(&candidate_rect, &state.obstacles) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: hit obstacle {} with score {}",
            obstacle,
            state.score
        );
        events.push(GameEvent::Crashed { obstacle });
        return events;
    }
    state.player.pos = candidate;

    if state.on_coin() {
        events.push(state.collect_coin());
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::collision::{hits_any, intersects};
    use crate::sim::player::{Direction, Player};
    use crate::sim::rect::Rect;
    use glam::Vec2;

    fn open_board(player: Player, coin: Rect, obstacles: Vec<Rect>) -> GameState {
        GameState::from_parts(Settings::default(), 42, player, coin, obstacles)
    }

    fn holding(dirs: &[Direction]) -> TickInput {
        TickInput {
            held: dirs.iter().copied().collect(),
            clicks: Vec::new(),
        }
    }

    fn click(x: i32, y: i32) -> TickInput {
        TickInput {
            held: HeldKeys::none(),
            clicks: vec![IVec2::new(x, y)],
        }
    }

    #[test]
    fn test_move_right_commits() {
        let player = Player::centered(50, Settings::default().bounds());
        let mut state = open_board(
            player,
            Rect::square(0, 0, 50),
            vec![Rect::new(900, 100, 20, 20)],
        );

        let events = tick(&mut state, &holding(&[Direction::Right]), 0.1);
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos, Vec2::new(545.0, 475.0));
        assert_eq!(state.player.rect().x, 545);
    }

    #[test]
    fn test_move_is_clamped_at_wall() {
        let player = Player {
            pos: Vec2::new(940.0, 10.0),
            size: 50,
        };
        let mut state = open_board(player, Rect::square(400, 400, 50), Vec::new());
        tick(&mut state, &holding(&[Direction::Right, Direction::Up]), 0.5);
        assert_eq!(state.player.pos, Vec2::new(950.0, 0.0));
        assert!(state.player.rect().within(1000, 1000));
    }

    #[test]
    fn test_crash_rejects_move() {
        let player = Player::centered(50, Settings::default().bounds());
        let obstacles = vec![
            Rect::new(0, 0, 20, 20),
            Rect::new(100, 900, 30, 30),
            Rect::new(800, 800, 15, 40),
            Rect::new(530, 480, 20, 20),
        ];
        let mut state = open_board(player, Rect::square(0, 900, 50), obstacles);

        let events = tick(&mut state, &holding(&[Direction::Right]), 0.1);
        assert_eq!(events, vec![GameEvent::Crashed { obstacle: 3 }]);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.player.pos, Vec2::new(475.0, 475.0));
    }

    #[test]
    fn test_no_movement_in_game_over() {
        let player = Player::centered(50, Settings::default().bounds());
        let mut state = open_board(player, Rect::square(0, 0, 50), Vec::new());
        state.phase = GamePhase::GameOver;
        let events = tick(&mut state, &holding(&[Direction::Down]), 0.1);
        assert!(events.is_empty());
        assert_eq!(state.player.pos, Vec2::new(475.0, 475.0));
    }

    #[test]
    fn test_coin_pickup() {
        let player = Player {
            pos: Vec2::new(200.0, 200.0),
            size: 54,
        };
        let obstacles = vec![Rect::new(600, 600, 40, 40)];
        let mut state = open_board(player, Rect::square(260, 200, 50), obstacles);
        state.score = 4;

        // Moves to x = 270, so the 54px player now spans the coin's left edge
        let events = tick(&mut state, &holding(&[Direction::Right]), 0.1);
        assert_eq!(events, vec![GameEvent::CoinCollected { score: 5, size: 55 }]);
        assert_eq!(state.score, 5);
        assert_eq!(state.player.size, 55);
        let grown = state.player.rect();
        assert!(!intersects(&state.coin, &grown));
        assert!(!hits_any(&state.coin, &state.obstacles));
    }

    #[test]
    fn test_click_outside_button_ignored() {
        let mut state = GameState::new(Settings::default(), 3).unwrap();
        state.phase = GamePhase::GameOver;
        state.score = 8;
        let before = state.clone();

        let events = tick(&mut state, &click(10, 10), 0.01);
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 8);
        assert_eq!(state.coin, before.coin);
        assert_eq!(state.obstacles, before.obstacles);
    }

    #[test]
    fn test_click_inside_button_restarts() {
        let mut state = GameState::new(Settings::default(), 3).unwrap();
        state.phase = GamePhase::GameOver;
        state.score = 8;

        let events = tick(&mut state, &click(500, 500), 0.0);
        assert_eq!(events, vec![GameEvent::Restarted]);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.size, 50);
    }

    #[test]
    fn test_click_while_playing_ignored() {
        let mut state = GameState::new(Settings::default(), 3).unwrap();
        state.score = 2;
        let events = tick(&mut state, &click(500, 500), 0.0);
        assert!(!events.contains(&GameEvent::Restarted));
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_sliding_along_obstacle_edge_is_safe() {
        let player = Player {
            pos: Vec2::new(100.0, 100.0),
            size: 50,
        };
        // Obstacle directly below, sharing the player's bottom edge
        let obstacles = vec![Rect::new(50, 150, 200, 20)];
        let mut state = open_board(player, Rect::square(800, 800, 50), obstacles);
        tick(&mut state, &holding(&[Direction::Right]), 0.1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos, Vec2::new(170.0, 100.0));
    }
}
