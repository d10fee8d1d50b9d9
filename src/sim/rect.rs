//! Axis-aligned rectangles on the integer pixel grid
//!
//! Every entity on the board (player, coin, obstacles) and the play-again
//! button hit-box is one of these. Positions are top-left corners.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with a strictly positive size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Build a rect, clamping the size to at least one pixel per axis
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            y,
            w: w.max(1),
            h: h.max(1),
        }
    }

    /// A square rect of side `size` at (x, y)
    #[inline]
    pub fn square(x: i32, y: i32, size: i32) -> Self {
        Self::new(x, y, size, size)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Half-open point containment: `x <= px < x + w`
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// True if the rect lies entirely inside `[0, width] x [0, height]`
    pub fn within(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() <= width && self.bottom() <= height
    }
}

/// Size of the playfield in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Top-left corner that centers a square of side `size`
    pub fn centered(&self, size: i32) -> (i32, i32) {
        (self.width / 2 - size / 2, self.height / 2 - size / 2)
    }
}
