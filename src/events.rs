use bevy_ecs::prelude::*;

use crate::map::direction::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Exit,
    MovePlayer(Direction),
    TogglePause,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
    /// The bounding boxes of two characters overlap. The player is always first.
    Collision(Entity, Entity),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
