use std::collections::HashMap;

use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
    EventPump,
};
use tracing::debug;

use crate::{
    events::{GameCommand, GameEvent},
    map::direction::Direction,
    systems::components::GlobalState,
};

#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Player movement
        key_bindings.insert(Keycode::Up, GameCommand::MovePlayer(Direction::Up));
        key_bindings.insert(Keycode::Down, GameCommand::MovePlayer(Direction::Down));
        key_bindings.insert(Keycode::Left, GameCommand::MovePlayer(Direction::Left));
        key_bindings.insert(Keycode::Right, GameCommand::MovePlayer(Direction::Right));

        // Game actions
        key_bindings.insert(Keycode::P, GameCommand::TogglePause);
        key_bindings.insert(Keycode::Escape, GameCommand::Exit);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn command_for(&self, key: Keycode) -> Option<GameCommand> {
        self.key_bindings.get(&key).copied()
    }

    /// Translates a single SDL event into a command, if it maps to one.
    pub fn translate(&self, event: &Event) -> Option<GameCommand> {
        match event {
            Event::Quit { .. } => Some(GameCommand::Exit),
            Event::KeyDown { keycode: Some(key), .. } => self.command_for(*key),
            _ => None,
        }
    }
}

/// Drains the SDL event queue into `GameEvent`s, tracking window focus along the way.
pub fn input_system(
    bindings: Res<Bindings>,
    mut state: ResMut<GlobalState>,
    mut writer: EventWriter<GameEvent>,
    mut pump: NonSendMut<EventPump>,
) {
    for event in pump.poll_iter() {
        if let Event::Window { win_event, .. } = &event {
            match win_event {
                WindowEvent::FocusGained => state.focused = true,
                WindowEvent::FocusLost => state.focused = false,
                _ => {}
            }
        }

        if let Some(command) = bindings.translate(&event) {
            debug!(?command, "Triggering command");
            writer.write(GameEvent::Command(command));
        }
    }
}
