//! Procedural checkerboard background
//!
//! Light grey board with darker squares wherever the column and row parity
//! of the pattern cell match.

use super::Rgba;

/// Color of the background pixel at (x, y)
#[inline]
pub fn checker_color(x: u32, y: u32, pattern_size: u32) -> Rgba {
    let pattern_size = pattern_size.max(1);
    if (x / pattern_size) % 2 == (y / pattern_size) % 2 {
        Rgba::BACKGROUND_DARK
    } else {
        Rgba::BACKGROUND_LIGHT
    }
}

/// Tightly packed RGBA8 pixels for a `width` x `height` background
pub fn checkerboard_rgba(width: u32, height: u32, pattern_size: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let Rgba(r, g, b, a) = checker_color(x, y, pattern_size);
            pixels.extend_from_slice(&[r, g, b, a]);
        }
    }
    pixels
}
