//! The player-controlled cyclops
//!
//! The continuous position is authoritative. The integer rect used for
//! collision and drawing is recomputed from it on demand, never stored.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Bounds, Rect};

/// One of the four arrow directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Which direction keys are held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn press(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }
}

impl FromIterator<Direction> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut keys = HeldKeys::none();
        for dir in iter {
            keys.press(dir);
        }
        keys
    }
}

/// Where a growing player stays pinned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GrowthAnchor {
    /// Grow outward from the center
    #[default]
    Center,
    /// Keep the top-left corner fixed (how the first release of the game behaved)
    TopLeft,
}

/// Movement for one frame from the held keys
///
/// Each held direction contributes `speed * dt` on its axis. Opposite keys
/// cancel and diagonals are not normalized, so moving diagonally is faster.
pub fn compute_intent(held: HeldKeys, speed: f32, dt: f32) -> Vec2 {
    let step = speed * dt;
    let mut delta = Vec2::ZERO;
    if held.up {
        delta.y -= step;
    }
    if held.down {
        delta.y += step;
    }
    if held.left {
        delta.x -= step;
    }
    if held.right {
        delta.x += step;
    }
    delta
}

/// Clamp a top-left position so a `size`-sided square stays on the board
pub fn clamp_to_bounds(pos: Vec2, size: i32, bounds: Bounds) -> Vec2 {
    let max_x = (bounds.width - size).max(0) as f32;
    let max_y = (bounds.height - size).max(0) as f32;
    Vec2::new(pos.x.clamp(0.0, max_x), pos.y.clamp(0.0, max_y))
}

/// Project a continuous position onto the pixel grid
#[inline]
pub fn project(pos: Vec2, size: i32) -> Rect {
    Rect::square(pos.x.floor() as i32, pos.y.floor() as i32, size)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in continuous board coordinates
    pub pos: Vec2,
    /// Side length in pixels
    pub size: i32,
}

impl Player {
    /// A player of side `size` centered on the board
    pub fn centered(size: i32, bounds: Bounds) -> Self {
        let (x, y) = bounds.centered(size);
        Self {
            pos: Vec2::new(x as f32, y as f32),
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        project(self.pos, self.size)
    }

    /// Rect the player would occupy at `pos`
    pub fn rect_at(&self, pos: Vec2) -> Rect {
        project(pos, self.size)
    }

    /// Resize to `new_size`, keeping the chosen anchor fixed and the player
    /// on the board
    pub fn grow(&mut self, new_size: i32, anchor: GrowthAnchor, bounds: Bounds) {
        let old_size = self.size;
        self.size = new_size;
        if anchor == GrowthAnchor::Center {
            let shift = (new_size - old_size) as f32 / 2.0;
            self.pos -= Vec2::splat(shift);
        }
        self.pos = clamp_to_bounds(self.pos, self.size, bounds);
    }
}
