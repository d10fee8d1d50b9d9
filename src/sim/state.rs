//! Game state and core simulation types
//!
//! `GameState` exclusively owns the player, the coin, the obstacle field, the
//! score and the RNG. Nothing outside the simulation holds references into it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::intersects;
use super::placement::{PlacementError, Placer, SizeSpec};
use super::player::Player;
use super::rect::Rect;
use crate::error::Result;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player moves, collects coins and can crash
    Playing,
    /// Run ended, waiting for the play-again button
    GameOver,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A coin was picked up; carries the new score and player size
    CoinCollected { score: u32, size: i32 },
    /// The attempted move hit the obstacle at this index
    Crashed { obstacle: usize },
    /// The play-again button reset the run
    Restarted,
    /// The player grew so large no coin fits anywhere
    BoardFull,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub settings: Settings,
    pub score: u32,
    pub phase: GamePhase,
    pub player: Player,
    pub coin: Rect,
    pub obstacles: Vec<Rect>,
    /// One entry per obstacle of the session, including any left out of the
    /// current layout
    obstacle_sizes: Vec<(i32, i32)>,
}

impl GameState {
    /// Start a fresh run: centered player, a coin, then the obstacle field
    pub fn new(settings: Settings, seed: u64) -> Result<Self> {
        settings.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let placer = placer_for(&settings);
        let player = Player::centered(settings.player_size, settings.bounds());
        let coin = placer.place_non_overlapping(
            &mut rng,
            SizeSpec::square(settings.coin_size),
            &[player.rect()],
        )?;
        let obstacle_sizes = settings
            .obstacle_size()
            .sample_many(&mut rng, settings.obstacle_count);
        let obstacles = placer.place_obstacle_field(&mut rng, &obstacle_sizes, player.rect(), coin);

        log::info!(
            "New game (seed {}): {} obstacles on a {}x{} board",
            seed,
            obstacles.len(),
            settings.field_width,
            settings.field_height
        );

        Ok(Self {
            seed,
            rng,
            settings,
            score: 0,
            phase: GamePhase::Playing,
            player,
            coin,
            obstacles,
            obstacle_sizes,
        })
    }

    /// Assemble a state from an explicit layout
    pub fn from_parts(
        settings: Settings,
        seed: u64,
        player: Player,
        coin: Rect,
        obstacles: Vec<Rect>,
    ) -> Self {
        let obstacle_sizes = obstacles.iter().map(|r| (r.w, r.h)).collect();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings,
            score: 0,
            phase: GamePhase::Playing,
            player,
            coin,
            obstacles,
            obstacle_sizes,
        }
    }

    pub fn placer(&self) -> Placer {
        placer_for(&self.settings)
    }

    /// Obstacle sizes drawn when the session started
    pub fn obstacle_sizes(&self) -> &[(i32, i32)] {
        &self.obstacle_sizes
    }

    /// Reset to a fresh run, keeping obstacle sizes
    ///
    /// On failure the state is left untouched.
    pub fn restart(&mut self) -> Result<()> {
        let placer = self.placer();
        let player = Player::centered(self.settings.player_size, self.settings.bounds());
        let coin = placer.place_non_overlapping(
            &mut self.rng,
            SizeSpec::square(self.settings.coin_size),
            &[player.rect()],
        )?;
        let obstacles =
            placer.place_obstacle_field(&mut self.rng, &self.obstacle_sizes, player.rect(), coin);

        self.score = 0;
        self.phase = GamePhase::Playing;
        self.player = player;
        self.coin = coin;
        self.obstacles = obstacles;
        log::info!(
            "Game restarted (seed {}): {} of {} obstacles placed",
            self.seed,
            self.obstacles.len(),
            self.obstacle_sizes.len()
        );
        Ok(())
    }

    /// Score the coin, grow the player and put a new coin somewhere free
    ///
    /// The run ends with `BoardFull` when the grown player would not fit the
    /// board or no coin fits anywhere.
    pub fn collect_coin(&mut self) -> GameEvent {
        self.score += 1;
        let bounds = self.settings.bounds();
        let mut grown = self.player.clone();
        grown.grow(
            grown.size + self.settings.growth_step,
            self.settings.growth_anchor,
            bounds,
        );
        if !grown.rect().within(bounds.width, bounds.height) {
            log::info!(
                "Board full at score {}: a {}px player no longer fits",
                self.score,
                grown.size
            );
            self.phase = GamePhase::GameOver;
            return GameEvent::BoardFull;
        }
        self.player = grown;

        match self.respawn_coin() {
            Ok(coin) => {
                self.coin = coin;
                log::debug!("Coin collected: score {}, size {}", self.score, self.player.size);
                GameEvent::CoinCollected {
                    score: self.score,
                    size: self.player.size,
                }
            }
            Err(e) => {
                log::info!("Board full at score {}: {}", self.score, e);
                self.phase = GamePhase::GameOver;
                GameEvent::BoardFull
            }
        }
    }

    fn respawn_coin(&mut self) -> std::result::Result<Rect, PlacementError> {
        let mut avoid = Vec::with_capacity(self.obstacles.len() + 1);
        avoid.push(self.player.rect());
        avoid.extend_from_slice(&self.obstacles);
        self.placer().place_non_overlapping(
            &mut self.rng,
            SizeSpec::square(self.settings.coin_size),
            &avoid,
        )
    }

    /// True while the player sits on the coin
    pub fn on_coin(&self) -> bool {
        intersects(&self.player.rect(), &self.coin)
    }
}

fn placer_for(settings: &Settings) -> Placer {
    Placer::new(settings.bounds(), settings.placement_attempts)
}
