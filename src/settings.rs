//! Game settings
//!
//! Every tunable of the game lives here. Defaults reproduce the classic
//! 1000x1000 board; a JSON file may override any subset of fields.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::sim::{Bounds, GrowthAnchor, Rect, SizeSpec};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    pub field_width: i32,
    pub field_height: i32,

    // === Player ===
    /// Side length at the start of every run
    pub player_size: i32,
    /// Pixels per second per held direction
    pub speed: f32,
    /// Pixels added to the side length per coin
    pub growth_step: i32,
    pub growth_anchor: GrowthAnchor,

    // === Entities ===
    pub coin_size: i32,
    pub obstacle_count: usize,
    pub obstacle_min_size: i32,
    pub obstacle_max_size: i32,
    /// Random samples per placement before the deterministic scan
    pub placement_attempts: u32,

    // === Timing ===
    pub target_fps: u32,

    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,

    // === Presentation ===
    pub font_size: u16,
    /// Checkerboard square size of the background
    pub pattern_size: i32,
    pub button_width: i32,
    pub button_height: i32,
    pub player_texture: PathBuf,
    pub coin_texture: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: 1000,
            field_height: 1000,

            player_size: 50,
            speed: 700.0,
            growth_step: 1,
            growth_anchor: GrowthAnchor::Center,

            coin_size: 50,
            obstacle_count: 20,
            obstacle_min_size: 15,
            obstacle_max_size: 55,
            placement_attempts: 1000,

            target_fps: 120,

            seed: None,

            font_size: 28,
            pattern_size: 50,
            button_width: 400,
            button_height: 50,
            player_texture: PathBuf::from("assets/cyclops.png"),
            coin_texture: PathBuf::from("assets/coin.png"),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, filling missing fields with defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| GameError::config(format!("cannot read {}: {}", path.display(), e)))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| GameError::config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.field_width <= 0 || self.field_height <= 0 {
            return Err(GameError::config("field dimensions must be positive"));
        }
        if self.player_size <= 0 || self.coin_size <= 0 || self.obstacle_min_size <= 0 {
            return Err(GameError::config("entity sizes must be positive"));
        }
        if self.obstacle_min_size > self.obstacle_max_size {
            return Err(GameError::config(format!(
                "obstacle_min_size {} exceeds obstacle_max_size {}",
                self.obstacle_min_size, self.obstacle_max_size
            )));
        }
        let largest = self
            .player_size
            .max(self.coin_size)
            .max(self.obstacle_max_size);
        if largest > self.field_width || largest > self.field_height {
            return Err(GameError::config(format!(
                "entities up to {largest}px do not fit a {}x{} field",
                self.field_width, self.field_height
            )));
        }
        if self.growth_step < 0 {
            return Err(GameError::config("growth_step must not be negative"));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(GameError::config("speed must be a finite, non-negative number"));
        }
        if self.target_fps == 0 {
            return Err(GameError::config("target_fps must be at least 1"));
        }
        if self.font_size == 0 || self.pattern_size <= 0 {
            return Err(GameError::config("font_size and pattern_size must be positive"));
        }
        if self.button_width <= 0 || self.button_height <= 0 {
            return Err(GameError::config("button size must be positive"));
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.field_width, self.field_height)
    }

    pub fn obstacle_size(&self) -> SizeSpec {
        SizeSpec::Range {
            min: self.obstacle_min_size,
            max: self.obstacle_max_size,
        }
    }

    /// Hit-box of the play-again button, centered on the board
    pub fn play_again_button(&self) -> Rect {
        Rect::new(
            self.field_width / 2 - self.button_width / 2,
            self.field_height / 2 - self.button_height / 2,
            self.button_width,
            self.button_height,
        )
    }

    /// Frame budget at the target rate (whole milliseconds, rounded down)
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.target_fps.max(1)))
    }
}
