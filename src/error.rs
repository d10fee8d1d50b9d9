//! Error types shared by startup, configuration and the simulation

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::PlacementError;

/// Anything that can stop the game from starting (or restarting)
#[derive(Debug, Error)]
pub enum GameError {
    /// A platform subsystem, the window or the renderer could not be created
    #[error("{step} failed: {reason}")]
    Initialization { step: &'static str, reason: String },

    /// A font, image or generated texture could not be loaded
    #[error("failed to load {resource} from {}: {reason}", .path.display())]
    ResourceLoad {
        resource: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// The settings file is unreadable or holds invalid values
    #[error("invalid settings: {reason}")]
    Config { reason: String },

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

impl GameError {
    pub fn config(reason: impl Into<String>) -> Self {
        GameError::Config {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failed_step() {
        let err = GameError::Initialization {
            step: "window creation",
            reason: "no display".into(),
        };
        assert_eq!(err.to_string(), "window creation failed: no display");

        let err = GameError::ResourceLoad {
            resource: "font",
            path: PathBuf::from("fonts/missing.ttf"),
            reason: "file not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load font from fonts/missing.ttf: file not found"
        );
    }

    #[test]
    fn test_placement_error_converts() {
        let err: GameError = PlacementError::NoSpace {
            w: 50,
            h: 50,
            width: 40,
            height: 40,
        }
        .into();
        assert!(matches!(err, GameError::Placement(_)));
        assert!(err.to_string().contains("50x50"));
    }
}
