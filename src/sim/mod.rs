//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches the window,
//! textures or the clock:
//! - Time comes in as an explicit `dt`
//! - Randomness comes from the seeded RNG owned by `GameState`
//! - Input comes in as a `TickInput`

pub mod collision;
pub mod placement;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{first_hit, hits_any, intersects};
pub use placement::{PlacementError, Placer, SizeSpec};
pub use player::{Direction, GrowthAnchor, HeldKeys, Player, clamp_to_bounds, compute_intent};
pub use rect::{Bounds, Rect};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
