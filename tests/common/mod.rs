#![allow(dead_code)]

use bevy_ecs::{entity::Entity, event::Events, query::With, world::World};
use glam::Vec2;
use pacman_demo::{
    config::Config,
    constants::sprite::FALLBACK_SIZE,
    events::{GameCommand, GameEvent},
    game::Game,
    systems::{Ghost, PlayerControlled, Position, Sprite, Velocity},
};

/// A game with no SDL resources, where every sprite has the fallback size.
pub fn headless_game() -> Game {
    Game::headless(&Config::default(), |_| FALLBACK_SIZE)
}

pub fn headless_game_with(config: Config) -> Game {
    Game::headless(&config, |_| FALLBACK_SIZE)
}

/// Sends a game event to the world
pub fn send_game_event(world: &mut World, event: GameEvent) {
    let mut events = world.resource_mut::<Events<GameEvent>>();
    events.send(event);
}

pub fn send_command(world: &mut World, command: GameCommand) {
    send_game_event(world, GameEvent::Command(command));
}

/// Every game event still stored in the world, oldest first.
pub fn stored_events(world: &World) -> Vec<GameEvent> {
    let events = world.resource::<Events<GameEvent>>();
    events.get_cursor().read(events).copied().collect()
}

pub fn player_state(world: &mut World) -> (Position, Velocity, Sprite) {
    let mut query = world.query_filtered::<(&Position, &Velocity, &Sprite), With<PlayerControlled>>();
    let (position, velocity, sprite) = query.single(world).expect("exactly one player");
    (*position, *velocity, *sprite)
}

pub fn ghost_states(world: &mut World) -> Vec<(Ghost, Position, Velocity)> {
    let mut query = world.query::<(&Ghost, &Position, &Velocity)>();
    query.iter(world).map(|(ghost, position, velocity)| (*ghost, *position, *velocity)).collect()
}

pub fn player_entity(world: &mut World) -> Entity {
    let mut query = world.query_filtered::<Entity, With<PlayerControlled>>();
    query.single(world).expect("exactly one player")
}

pub fn approx_eq(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < 1e-3
}
