//! Randomized, non-overlapping placement of coins and obstacles
//!
//! Placement is rejection sampling: pick a random spot (and for obstacles a
//! random size), retry while it overlaps something it must avoid. Sampling is
//! capped; once the cap is hit a deterministic row-major scan takes over so
//! placement always terminates.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::first_hit;
use super::rect::{Bounds, Rect};

/// How big a newly placed entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeSpec {
    /// Exact width and height
    Fixed { w: i32, h: i32 },
    /// Width and height each drawn uniformly from `[min, max]`
    Range { min: i32, max: i32 },
}

impl SizeSpec {
    pub fn square(size: i32) -> Self {
        SizeSpec::Fixed { w: size, h: size }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (i32, i32) {
        match *self {
            SizeSpec::Fixed { w, h } => (w, h),
            SizeSpec::Range { min, max } => {
                (rng.random_range(min..=max), rng.random_range(min..=max))
            }
        }
    }

    /// Draw `count` sizes up front, in placement order
    pub fn sample_many<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<(i32, i32)> {
        (0..count).map(|_| self.sample(rng)).collect()
    }

    /// Size used by the fallback scan (the easiest one to fit)
    fn smallest(&self) -> (i32, i32) {
        match *self {
            SizeSpec::Fixed { w, h } => (w, h),
            SizeSpec::Range { min, .. } => (min, min),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no free {w}x{h} slot left in the {width}x{height} field")]
    NoSpace {
        w: i32,
        h: i32,
        width: i32,
        height: i32,
    },
}

/// Places entities inside a fixed playfield
#[derive(Debug, Clone, Copy)]
pub struct Placer {
    pub bounds: Bounds,
    /// Random samples tried before falling back to the scan
    pub max_attempts: u32,
}

impl Placer {
    pub fn new(bounds: Bounds, max_attempts: u32) -> Self {
        Self {
            bounds,
            max_attempts,
        }
    }

    /// Place one rect that overlaps none of `avoid`
    pub fn place_non_overlapping<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        size: SizeSpec,
        avoid: &[Rect],
    ) -> Result<Rect, PlacementError> {
        for _ in 0..self.max_attempts {
            let (w, h) = size.sample(rng);
            let max_x = self.bounds.width - w;
            let max_y = self.bounds.height - h;
            if max_x < 0 || max_y < 0 {
                continue;
            }
            let candidate = Rect::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y), w, h);
            if first_hit(&candidate, avoid).is_none() {
                return Ok(candidate);
            }
        }

        let (w, h) = size.smallest();
        if self.max_attempts > 0 {
            log::warn!(
                "Random placement gave up after {} attempts, scanning for a free {}x{} slot",
                self.max_attempts,
                w,
                h
            );
        }
        self.scan(w, h, avoid)
    }

    /// Deterministic row-major search for the first free slot
    fn scan(&self, w: i32, h: i32, avoid: &[Rect]) -> Result<Rect, PlacementError> {
        for y in 0..=(self.bounds.height - h) {
            let mut x = 0;
            while x <= self.bounds.width - w {
                let candidate = Rect::new(x, y, w, h);
                match first_hit(&candidate, avoid) {
                    None => return Ok(candidate),
                    // Every x short of the blocker's right edge still overlaps it
                    Some(i) => x = avoid[i].right().max(x + 1),
                }
            }
        }
        Err(PlacementError::NoSpace {
            w,
            h,
            width: self.bounds.width,
            height: self.bounds.height,
        })
    }

    /// Place one obstacle per entry of `sizes`, avoiding the player, the coin
    /// and each other
    ///
    /// An obstacle that fits nowhere is left out of this layout only; the
    /// caller keeps its size for the next one.
    pub fn place_obstacle_field<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sizes: &[(i32, i32)],
        player: Rect,
        coin: Rect,
    ) -> Vec<Rect> {
        // avoid[0..2] are the player and coin, the rest is the field so far
        let mut avoid = vec![player, coin];
        for &(w, h) in sizes {
            match self.place_non_overlapping(rng, SizeSpec::Fixed { w, h }, &avoid) {
                Ok(rect) => avoid.push(rect),
                Err(e) => log::warn!("Leaving out obstacle: {}", e),
            }
        }
        avoid.split_off(2)
    }
}
