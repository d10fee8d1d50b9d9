//! Scene composition: what gets drawn each frame, back to front

use super::{Renderer, Rgba, Sprite};
use crate::sim::{GamePhase, GameState, Rect};

pub const PLAY_AGAIN_LABEL: &str = "Play Again";
const SCORE_LABEL: &str = "Score:";
const SCORE_LABEL_POS: (i32, i32) = (10, 10);
const SCORE_VALUE_POS: (i32, i32) = (120, 10);

/// Draw the full frame for the current state
pub fn draw_scene<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    renderer.clear(Rgba::WHITE);
    renderer.draw_background();

    renderer.draw_sprite(Sprite::Player, state.player.rect());
    renderer.draw_sprite(Sprite::Coin, state.coin);

    for obstacle in &state.obstacles {
        renderer.fill_rect(*obstacle, Rgba::OBSTACLE);
    }

    text_or_skip(renderer, SCORE_LABEL, SCORE_LABEL_POS);
    text_or_skip(renderer, &state.score.to_string(), SCORE_VALUE_POS);

    if state.phase == GamePhase::GameOver {
        draw_play_again(renderer, state.settings.play_again_button());
    }
}

fn draw_play_again<R: Renderer + ?Sized>(renderer: &mut R, button: Rect) {
    renderer.fill_rect(button, Rgba::BUTTON);
    match renderer.measure_text(PLAY_AGAIN_LABEL) {
        Ok((w, h)) => {
            let x = button.x + (button.w - w) / 2;
            let y = button.y + (button.h - h) / 2;
            text_or_skip(renderer, PLAY_AGAIN_LABEL, (x, y));
        }
        Err(e) => log::warn!("Skipping draw: {}", e),
    }
}

/// A failed text draw is skipped; the rest of the frame still renders
fn text_or_skip<R: Renderer + ?Sized>(renderer: &mut R, text: &str, (x, y): (i32, i32)) {
    if let Err(e) = renderer.draw_text(text, x, y) {
        log::warn!("Skipping draw: {}", e);
    }
}
