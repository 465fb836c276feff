use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use pacman_demo::{
    constants::mechanics::GHOST_SPEED,
    map::direction::Direction,
    systems::{ghost_velocity, ghost_wander_system, Ghost},
};
use speculoos::prelude::*;
use strum::IntoEnumIterator;

mod common;

#[test]
fn test_ghost_velocity_per_direction() {
    assert_that(&ghost_velocity(Direction::Left)).is_equal_to(Some(Vec2::new(-0.05, 0.0)));
    assert_that(&ghost_velocity(Direction::Right)).is_equal_to(Some(Vec2::new(0.05, 0.0)));
    assert_that(&ghost_velocity(Direction::Up)).is_equal_to(Some(Vec2::new(0.0, -0.05)));
    assert_that(&ghost_velocity(Direction::Down)).is_equal_to(Some(Vec2::new(0.0, 0.05)));
    assert_that(&ghost_velocity(Direction::None)).is_none();
}

#[test]
fn test_four_distinct_ghosts_spawned() {
    let mut game = common::headless_game();
    let ghosts: Vec<Ghost> = common::ghost_states(&mut game.world).into_iter().map(|(ghost, _, _)| ghost).collect();

    assert_that(&ghosts.len()).is_equal_to(4);
    for ghost in Ghost::iter() {
        assert_that(&ghosts.contains(&ghost)).is_true();
    }
}

#[test]
fn test_wander_picks_a_cardinal_direction() {
    let mut game = common::headless_game();

    // Sample enough frames that every ghost has been redirected many times.
    for _ in 0..32 {
        game.world
            .run_system_once(ghost_wander_system)
            .expect("System should run successfully");

        for (ghost, _, velocity) in common::ghost_states(&mut game.world) {
            let is_cardinal = Direction::DIRECTIONS
                .iter()
                .any(|direction| velocity.0 == direction.as_vec2() * GHOST_SPEED);
            assert!(is_cardinal, "{} has non-cardinal velocity {:?}", ghost.as_ref(), velocity.0);
        }
    }
}

#[test]
fn test_ghost_sprites_keep_spawn_rotation() {
    let mut game = common::headless_game();
    for _ in 0..4 {
        game.tick();
    }

    let mut query = game.world.query::<(&Ghost, &pacman_demo::systems::Sprite)>();
    for (ghost, sprite) in query.iter(&game.world) {
        assert_that(&sprite.rotation).is_equal_to(90.0);
        assert_that(&sprite.asset).is_equal_to(ghost.asset());
    }
}
