use bevy_ecs::system::Query;
use glam::Vec2;
use rand::seq::IndexedRandom;
use tracing::trace;

use crate::{
    constants::mechanics::GHOST_SPEED,
    map::direction::Direction,
    platform,
    systems::{components::Ghost, movement::Velocity},
};

/// A ghost's velocity for a direction. Ghost sprites do not turn, so there is no rotation.
pub fn ghost_velocity(direction: Direction) -> Option<Vec2> {
    match direction {
        Direction::None => None,
        direction => Some(direction.as_vec2() * GHOST_SPEED),
    }
}

/// Points every ghost in a uniformly random cardinal direction, once per frame.
pub fn ghost_wander_system(mut ghosts: Query<(&Ghost, &mut Velocity)>) {
    let mut rng = platform::rng();
    for (ghost, mut velocity) in ghosts.iter_mut() {
        let Some(&direction) = Direction::DIRECTIONS.choose(&mut rng) else {
            continue;
        };
        if let Some(new_velocity) = ghost_velocity(direction) {
            trace!(ghost = ghost.as_ref(), direction = direction.as_ref(), "Ghost wandering");
            velocity.0 = new_velocity;
        }
    }
}
