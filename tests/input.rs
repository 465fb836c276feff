use pacman_demo::events::{GameCommand, GameEvent};
use pacman_demo::map::direction::Direction;
use pacman_demo::systems::Bindings;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use speculoos::prelude::*;

#[test]
fn test_arrow_keys_move_player() {
    let bindings = Bindings::default();

    let test_cases = [
        (Keycode::Up, Direction::Up),
        (Keycode::Down, Direction::Down),
        (Keycode::Left, Direction::Left),
        (Keycode::Right, Direction::Right),
    ];
    for (key, direction) in test_cases {
        assert_that(&bindings.command_for(key)).is_equal_to(Some(GameCommand::MovePlayer(direction)));
    }
}

#[test]
fn test_game_actions_bound() {
    let bindings = Bindings::default();

    assert_that(&bindings.command_for(Keycode::P)).is_equal_to(Some(GameCommand::TogglePause));
    assert_that(&bindings.command_for(Keycode::Escape)).is_equal_to(Some(GameCommand::Exit));
}

#[test]
fn test_unbound_keys_ignored() {
    let bindings = Bindings::default();

    assert_that(&bindings.command_for(Keycode::W)).is_none();
    assert_that(&bindings.command_for(Keycode::Space)).is_none();
}

#[test]
fn test_window_close_requests_exit() {
    let bindings = Bindings::default();

    assert_that(&bindings.translate(&Event::Quit { timestamp: 0 })).is_equal_to(Some(GameCommand::Exit));
    assert_that(&bindings.translate(&Event::AppLowMemory { timestamp: 0 })).is_none();
}

#[test]
fn test_command_wraps_into_event() {
    let event: GameEvent = GameCommand::TogglePause.into();
    assert_that(&event).is_equal_to(GameEvent::Command(GameCommand::TogglePause));
}
