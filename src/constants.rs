//! This module contains all the constants used in the game.

use glam::UVec2;

/// The default frame rate of the main loop.
pub const DEFAULT_FPS: u32 = 60;

/// The title of the game window.
pub const WINDOW_TITLE: &str = "Pacman!";

/// The size of the game window, in pixels.
pub const WINDOW_SIZE: UVec2 = UVec2::new(900, 900);

/// Game mechanics constants. All speeds are in pixels per simulation tick.
pub mod mechanics {
    use glam::Vec2;

    /// Pac-Man's speed along an axis.
    pub const PLAYER_SPEED: f32 = 0.15;
    /// Ghost speed along an axis.
    pub const GHOST_SPEED: f32 = 0.05;

    /// Where every character spawns.
    pub const SPAWN_POSITION: Vec2 = Vec2::new(450.0, 800.0);
    /// Pac-Man faces right at spawn.
    pub const PLAYER_SPAWN_VELOCITY: Vec2 = Vec2::new(PLAYER_SPEED, 0.0);
    /// Ghosts drift right at spawn.
    pub const GHOST_SPAWN_VELOCITY: Vec2 = Vec2::new(GHOST_SPEED, 0.0);

    /// Default number of simulation ticks advanced per rendered frame.
    pub const DEFAULT_TICKS_PER_FRAME: u32 = 16;
}

/// Sprite geometry constants.
pub mod sprite {
    use glam::Vec2;

    /// Rotation (degrees, clockwise) applied to every character at spawn.
    pub const SPAWN_ROTATION: f32 = 90.0;
    /// Point within the sprite around which it is positioned and rotated.
    pub const ORIGIN: Vec2 = Vec2::new(16.0, 16.0);
    /// Size used when a texture could not be loaded.
    pub const FALLBACK_SIZE: Vec2 = Vec2::new(32.0, 32.0);
}

/// Thickness of the border walls, in pixels.
pub const WALL_THICKNESS: f32 = 4.0;

/// Static wall layout as `(left, top, width, height)` rectangles: a frame around the window.
pub const WALL_LAYOUT: [(f32, f32, f32, f32); 4] = [
    (0.0, 0.0, WINDOW_SIZE.x as f32, WALL_THICKNESS),
    (0.0, WINDOW_SIZE.y as f32 - WALL_THICKNESS, WINDOW_SIZE.x as f32, WALL_THICKNESS),
    (0.0, 0.0, WALL_THICKNESS, WINDOW_SIZE.y as f32),
    (WINDOW_SIZE.x as f32 - WALL_THICKNESS, 0.0, WALL_THICKNESS, WINDOW_SIZE.y as f32),
];

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_window() {
        assert_eq!(WINDOW_SIZE, UVec2::new(900, 900));
        assert_eq!(WINDOW_TITLE, "Pacman!");
    }

    #[test]
    fn test_speeds() {
        assert!(mechanics::PLAYER_SPEED > mechanics::GHOST_SPEED);
        assert_eq!(mechanics::PLAYER_SPAWN_VELOCITY, Vec2::new(0.15, 0.0));
        assert_eq!(mechanics::GHOST_SPAWN_VELOCITY, Vec2::new(0.05, 0.0));
    }

    #[test]
    fn test_spawn_inside_window() {
        let spawn = mechanics::SPAWN_POSITION;
        assert!(spawn.x > 0.0 && spawn.x < WINDOW_SIZE.x as f32);
        assert!(spawn.y > 0.0 && spawn.y < WINDOW_SIZE.y as f32);
    }

    #[test]
    fn test_walls_frame_the_window() {
        for (left, top, width, height) in WALL_LAYOUT {
            assert!(left >= 0.0 && top >= 0.0);
            assert!(left + width <= WINDOW_SIZE.x as f32);
            assert!(top + height <= WINDOW_SIZE.y as f32);
        }
    }
}
