//! Centralized error types for the game.
//!
//! Fatal errors propagate out of initialization; everything that can go wrong
//! while a frame is running is written as a `GameError` event and logged.

use std::io;
use std::path::PathBuf;

use bevy_ecs::event::Event;

/// Main error type for the game.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Asset not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors related to texture operations.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadFailed(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

impl From<figment::Error> for GameError {
    fn from(error: figment::Error) -> Self {
        GameError::Config(error.to_string())
    }
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let error = AssetError::NotFound(PathBuf::from("assets/pacman.png"));
        assert_eq!(error.to_string(), "Asset not found: assets/pacman.png");
    }

    #[test]
    fn test_nested_display() {
        let error: GameError = TextureError::LoadFailed("bad png".to_string()).into();
        assert_eq!(error.to_string(), "Texture error: Failed to load texture: bad png");
    }
}
