use bevy_ecs::component::Component;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

use crate::systems::collision::Bounds;

/// A static, axis-aligned wall.
///
/// Walls are drawn every frame but nothing moves against them; characters pass straight through.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub bounds: Bounds,
}

impl Wall {
    pub const COLOR: Color = Color::WHITE;

    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: Bounds::from_rect(left, top, width, height),
        }
    }

    /// The on-screen rectangle filled when drawing this wall.
    pub fn visual_rect(&self) -> Rect {
        self.bounds.to_rect()
    }
}
