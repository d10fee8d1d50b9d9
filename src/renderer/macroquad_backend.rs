//! Macroquad implementation of the `Renderer` trait

use std::path::Path;

use macroquad::color::{BLACK, Color};
use macroquad::math::vec2;
use macroquad::shapes::draw_rectangle;
use macroquad::text::{Font, TextDimensions, TextParams, draw_text_ex, load_ttf_font, measure_text};
use macroquad::texture::{DrawTextureParams, FilterMode, Texture2D, draw_texture_ex, load_texture};
use macroquad::window::clear_background;

use super::background::checkerboard_rgba;
use super::{RenderError, Renderer, Rgba, Sprite};
use crate::error::{GameError, Result};
use crate::settings::Settings;
use crate::sim::Rect;

impl From<Rgba> for Color {
    fn from(Rgba(r, g, b, a): Rgba) -> Self {
        Color::from_rgba(r, g, b, a)
    }
}

/// GPU resources for one window
///
/// Fields drop top to bottom, which is the reverse of load order.
pub struct MacroquadRenderer {
    background: Texture2D,
    coin: Texture2D,
    player: Texture2D,
    font: Font,
    font_size: u16,
    board_width: f32,
    board_height: f32,
}

impl MacroquadRenderer {
    /// Load the font and sprites and generate the background
    pub async fn load(font_path: &Path, settings: &Settings) -> Result<Self> {
        let font = load_ttf_font(&font_path.to_string_lossy())
            .await
            .map_err(|e| GameError::ResourceLoad {
                resource: "font",
                path: font_path.to_path_buf(),
                reason: e.to_string(),
            })?;
        log::info!("Loaded font {}", font_path.display());

        let player = load_sprite("player texture", &settings.player_texture).await?;
        let coin = load_sprite("coin texture", &settings.coin_texture).await?;
        let background = generate_background(settings)?;

        Ok(Self {
            background,
            coin,
            player,
            font,
            font_size: settings.font_size,
            board_width: settings.field_width as f32,
            board_height: settings.field_height as f32,
        })
    }

    fn measure(&self, text: &str) -> std::result::Result<TextDimensions, RenderError> {
        let dims = measure_text(text, Some(&self.font), self.font_size, 1.0);
        if text.is_empty() || dims.width <= 0.0 {
            return Err(RenderError::Text {
                text: text.to_string(),
                reason: "text has zero width".into(),
            });
        }
        Ok(dims)
    }
}

async fn load_sprite(resource: &'static str, path: &Path) -> Result<Texture2D> {
    let texture = load_texture(&path.to_string_lossy())
        .await
        .map_err(|e| GameError::ResourceLoad {
            resource,
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    log::info!("Loaded {} {}", resource, path.display());
    Ok(texture)
}

fn generate_background(settings: &Settings) -> Result<Texture2D> {
    let too_large = |_| GameError::ResourceLoad {
        resource: "background texture",
        path: "<generated>".into(),
        reason: format!(
            "{}x{} exceeds the maximum texture size",
            settings.field_width, settings.field_height
        ),
    };
    let width = u16::try_from(settings.field_width).map_err(too_large)?;
    let height = u16::try_from(settings.field_height).map_err(too_large)?;

    let pixels = checkerboard_rgba(
        u32::from(width),
        u32::from(height),
        settings.pattern_size as u32,
    );
    let texture = Texture2D::from_rgba8(width, height, &pixels);
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}

fn draw_stretched(texture: &Texture2D, x: f32, y: f32, w: f32, h: f32) {
    draw_texture_ex(
        texture,
        x,
        y,
        Color::from(Rgba::WHITE),
        DrawTextureParams {
            dest_size: Some(vec2(w, h)),
            ..Default::default()
        },
    );
}

impl Renderer for MacroquadRenderer {
    fn clear(&mut self, color: Rgba) {
        clear_background(color.into());
    }

    fn draw_background(&mut self) {
        draw_stretched(&self.background, 0.0, 0.0, self.board_width, self.board_height);
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        let texture = match sprite {
            Sprite::Player => &self.player,
            Sprite::Coin => &self.coin,
        };
        draw_stretched(
            texture,
            rect.x as f32,
            rect.y as f32,
            rect.w as f32,
            rect.h as f32,
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        draw_rectangle(
            rect.x as f32,
            rect.y as f32,
            rect.w as f32,
            rect.h as f32,
            color.into(),
        );
    }

    fn measure_text(&self, text: &str) -> std::result::Result<(i32, i32), RenderError> {
        let dims = self.measure(text)?;
        Ok((dims.width.round() as i32, dims.height.round() as i32))
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> std::result::Result<(), RenderError> {
        let dims = self.measure(text)?;
        // Macroquad positions text by its baseline
        draw_text_ex(
            text,
            x as f32,
            y as f32 + dims.offset_y,
            TextParams {
                font: Some(&self.font),
                font_size: self.font_size,
                color: BLACK,
                ..Default::default()
            },
        );
        Ok(())
    }
}
