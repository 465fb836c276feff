use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{Local, Query};
use glam::{Affine2, Vec2};
use sdl2::rect::Rect;
use smallvec::SmallVec;
use tracing::debug;

use crate::events::GameEvent;
use crate::map::wall::Wall;
use crate::systems::components::{Ghost, PlayerControlled, Sprite};
use crate::systems::movement::Position;

/// An axis-aligned rectangle in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn from_rect(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            max: Vec2::new(left + width, top + height),
        }
    }

    /// The smallest rectangle enclosing all of `points`.
    pub fn enclosing(points: [Vec2; 4]) -> Self {
        let [first, rest @ ..] = points;
        rest.iter().fold(Self { min: first, max: first }, |bounds, point| Self {
            min: bounds.min.min(*point),
            max: bounds.max.max(*point),
        })
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// The nearest whole-pixel SDL rectangle.
    pub fn to_rect(&self) -> Rect {
        let size = self.size().round().max(Vec2::ZERO);
        Rect::new(self.min.x.round() as i32, self.min.y.round() as i32, size.x as u32, size.y as u32)
    }

    /// True when the two rectangles share a region of positive area.
    ///
    /// Rectangles that only touch along an edge or at a corner do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        min.x < max.x && min.y < max.y
    }
}

impl Sprite {
    /// Maps sprite-local pixels to screen space: translate to `position`, rotate, then offset by the origin.
    pub fn transform(&self, position: Vec2) -> Affine2 {
        Affine2::from_translation(position)
            * Affine2::from_angle(self.rotation.to_radians())
            * Affine2::from_translation(-self.origin)
    }

    /// The screen-space bounding box of the sprite when drawn at `position`.
    pub fn global_bounds(&self, position: Vec2) -> Bounds {
        let transform = self.transform(position);
        Bounds::enclosing([
            Vec2::ZERO,
            Vec2::new(self.size.x, 0.0),
            Vec2::new(0.0, self.size.y),
            self.size,
        ].map(|corner| transform.transform_point2(corner)))
    }
}

/// Anything with a screen-space bounding box.
pub trait Collidable {
    fn bounds(&self) -> Bounds;

    fn is_colliding_with(&self, other: &dyn Collidable) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}

impl Collidable for Bounds {
    fn bounds(&self) -> Bounds {
        *self
    }
}

impl Collidable for Wall {
    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl Collidable for (Position, Sprite) {
    fn bounds(&self) -> Bounds {
        self.1.global_bounds(self.0 .0)
    }
}

/// Whether two drawables overlap. Symmetric in its arguments.
pub fn check_collision(a: &dyn Collidable, b: &dyn Collidable) -> bool {
    a.is_colliding_with(b)
}

/// Reports the player overlapping any ghost. Nothing responds to it beyond logging.
pub fn collision_system(
    player: Query<(Entity, &Position, &Sprite), With<PlayerControlled>>,
    ghosts: Query<(Entity, &Ghost, &Position, &Sprite)>,
    mut touching: Local<SmallVec<[Entity; 4]>>,
    mut events: EventWriter<GameEvent>,
) {
    let Ok((player_entity, player_position, player_sprite)) = player.single() else {
        return;
    };
    let player_body = (*player_position, *player_sprite);

    let mut now_touching: SmallVec<[Entity; 4]> = SmallVec::new();
    for (ghost_entity, ghost, position, sprite) in ghosts.iter() {
        if check_collision(&player_body, &(*position, *sprite)) {
            if !touching.contains(&ghost_entity) {
                debug!(ghost = ghost.as_ref(), "Player touched ghost");
            }
            now_touching.push(ghost_entity);
            events.write(GameEvent::Collision(player_entity, ghost_entity));
        }
    }
    *touching = now_touching;
}
