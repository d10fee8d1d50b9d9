//! VIP Cyclops - grow by collecting coins, don't touch the blocks
//!
//! Core modules:
//! - `sim`: Game rules (movement, collisions, placement, game state)
//! - `driver`: The per-frame loop step
//! - `renderer`: Scene composition and the macroquad drawing backend
//! - `platform`: Input and frame timing
//! - `settings`: Tunables, loadable from JSON

pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{FrameDriver, LoopControl};
pub use error::{GameError, Result};
pub use settings::Settings;

/// Window configuration constants
pub mod consts {
    /// Window title
    pub const WINDOW_TITLE: &str = "VIP Cyclops";
    /// Settings file picked up from the working directory when present
    pub const DEFAULT_SETTINGS_FILE: &str = "vip_cyclops.json";
}
