//! Keyboard and mouse input through macroquad

use macroquad::input::{
    KeyCode, MouseButton, is_key_down, is_mouse_button_pressed, is_quit_requested, mouse_position,
    prevent_quit,
};

use super::{InputEvent, InputSource};
use crate::sim::HeldKeys;

/// Reads input from the macroquad window
pub struct MacroquadInput;

impl MacroquadInput {
    /// Take over the window close button so quitting goes through the loop
    pub fn new() -> Self {
        prevent_quit();
        Self
    }
}

impl Default for MacroquadInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for MacroquadInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            events.push(InputEvent::Click {
                x: x.floor() as i32,
                y: y.floor() as i32,
            });
        }
        events
    }

    fn held_keys(&self) -> HeldKeys {
        HeldKeys {
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
        }
    }
}
