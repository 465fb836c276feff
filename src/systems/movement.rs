use bevy_ecs::component::Component;
use bevy_ecs::system::{Query, Res};
use glam::Vec2;

use crate::systems::components::DeltaTime;

/// Where an entity is on screen, in pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// How far an entity moves per simulation tick, in pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

impl Position {
    /// Advances the position by `velocity` once per tick.
    pub fn advance(&mut self, velocity: Velocity, ticks: u32) {
        for _ in 0..ticks {
            self.0 += velocity.0;
        }
    }
}

impl Velocity {
    /// Adds `delta` to the current velocity.
    pub fn change(&mut self, delta: Vec2) {
        self.0 += delta;
    }

    pub fn is_stopped(&self) -> bool {
        self.0 == Vec2::ZERO
    }
}

/// Moves every entity with a velocity. There is nothing to collide with; positions are unbounded.
pub fn movement_system(delta_time: Res<DeltaTime>, mut entities: Query<(&mut Position, &Velocity)>) {
    for (mut position, velocity) in entities.iter_mut() {
        if velocity.is_stopped() {
            continue;
        }
        position.advance(*velocity, delta_time.ticks);
    }
}
