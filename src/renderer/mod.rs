//! Rendering module
//!
//! The game draws through the `Renderer` trait. `scene` decides what goes on
//! screen and in which order; `macroquad_backend` puts it on a real window.

pub mod background;
pub mod macroquad_backend;
pub mod scene;

use thiserror::Error;

use crate::sim::Rect;

pub use macroquad_backend::MacroquadRenderer;
pub use scene::draw_scene;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const WHITE: Rgba = Rgba(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba(0, 0, 0, 255);
    /// Obstacle fill
    pub const OBSTACLE: Rgba = Rgba(64, 64, 64, 255);
    /// Play-again button fill
    pub const BUTTON: Rgba = Rgba(255, 215, 51, 255);
    pub const BACKGROUND_LIGHT: Rgba = Rgba(240, 240, 240, 255);
    pub const BACKGROUND_DARK: Rgba = Rgba(230, 230, 230, 255);
}

/// Textured entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Player,
    Coin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unable to render text {text:?}: {reason}")]
    Text { text: String, reason: String },
}

/// Drawing surface used by the scene
///
/// Coordinates are board pixels with the origin at the top-left corner.
pub trait Renderer {
    /// Fill the whole frame with one color
    fn clear(&mut self, color: Rgba);

    /// Draw the pre-generated checkerboard over the whole board
    fn draw_background(&mut self);

    /// Stretch a sprite's texture over `rect`
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Width and height `text` would occupy
    fn measure_text(&self, text: &str) -> Result<(i32, i32), RenderError>;

    /// Draw black text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), RenderError>;
}
