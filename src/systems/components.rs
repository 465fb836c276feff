use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;
use sdl2::pixels::Color;
use strum_macros::{AsRefStr, EnumIter};

use crate::asset::Asset;
use crate::constants::{mechanics, sprite};
use crate::systems::movement::{Position, Velocity};

/// A tag component for the entity controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// The four ghosts. Each is its own entity with its own sprite.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
pub enum Ghost {
    Inky,
    Pinky,
    Blinky,
    Clyde,
}

impl Ghost {
    pub fn asset(self) -> Asset {
        match self {
            Ghost::Inky => Asset::Inky,
            Ghost::Pinky => Asset::Pinky,
            Ghost::Blinky => Asset::Blinky,
            Ghost::Clyde => Asset::Clyde,
        }
    }
}

/// A textured, rotatable sprite.
///
/// `origin` is the point within the sprite (in sprite pixels) that sits at the entity's
/// position and that rotation pivots around. `rotation` is in degrees, clockwise.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub asset: Asset,
    pub size: Vec2,
    pub origin: Vec2,
    pub rotation: f32,
}

impl Sprite {
    /// A sprite with the rotation and origin every character spawns with.
    pub fn character(asset: Asset, size: Vec2) -> Self {
        Self {
            asset,
            size,
            origin: sprite::ORIGIN,
            rotation: sprite::SPAWN_ROTATION,
        }
    }

    /// Color drawn in place of the texture when it could not be loaded.
    pub fn fallback_color(&self) -> Color {
        match self.asset {
            Asset::Pacman => Color::RGB(255, 255, 0),
            Asset::Blinky => Color::RGB(255, 0, 0),
            Asset::Pinky => Color::RGB(255, 184, 255),
            Asset::Inky => Color::RGB(0, 255, 255),
            Asset::Clyde => Color::RGB(255, 184, 82),
        }
    }
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub velocity: Velocity,
    pub sprite: Sprite,
}

impl PlayerBundle {
    pub fn new(size: Vec2) -> Self {
        Self {
            player: PlayerControlled,
            position: Position(mechanics::SPAWN_POSITION),
            velocity: Velocity(mechanics::PLAYER_SPAWN_VELOCITY),
            sprite: Sprite::character(Asset::Pacman, size),
        }
    }
}

#[derive(Bundle)]
pub struct GhostBundle {
    pub ghost: Ghost,
    pub position: Position,
    pub velocity: Velocity,
    pub sprite: Sprite,
}

impl GhostBundle {
    pub fn new(ghost: Ghost, size: Vec2) -> Self {
        Self {
            ghost,
            position: Position(mechanics::SPAWN_POSITION),
            velocity: Velocity(mechanics::GHOST_SPAWN_VELOCITY),
            sprite: Sprite::character(ghost.asset(), size),
        }
    }
}

#[derive(Resource)]
pub struct GlobalState {
    pub exit: bool,
    /// Whether the window has keyboard focus
    pub focused: bool,
}

impl Default for GlobalState {
    fn default() -> Self {
        Self { exit: false, focused: true }
    }
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct DeltaTime {
    /// Simulation ticks to advance this frame
    pub ticks: u32,
}

#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum PauseState {
    #[default]
    Inactive,
    Active,
}

impl PauseState {
    pub fn active(&self) -> bool {
        matches!(self, PauseState::Active)
    }

    pub fn toggle(&mut self) {
        *self = match self {
            PauseState::Inactive => PauseState::Active,
            PauseState::Active => PauseState::Inactive,
        };
    }
}
