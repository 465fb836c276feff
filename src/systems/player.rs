use bevy_ecs::{
    event::{EventReader, EventWriter},
    query::With,
    system::{Query, ResMut},
};
use glam::Vec2;
use tracing::{debug, info, trace};

use crate::{
    constants::mechanics::PLAYER_SPEED,
    error::GameError,
    events::{GameCommand, GameEvent},
    map::direction::Direction,
    systems::{
        components::{GlobalState, PauseState, PlayerControlled, Sprite},
        movement::Velocity,
    },
};

/// A velocity paired with the sprite rotation that faces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heading {
    pub velocity: Vec2,
    /// Degrees, clockwise, with 0 facing up.
    pub rotation: f32,
}

impl Heading {
    pub fn apply(self, velocity: &mut Velocity, sprite: &mut Sprite) {
        velocity.0 = self.velocity;
        sprite.rotation = self.rotation;
    }
}

/// Pac-Man's heading for a direction. `Direction::None` has no heading.
pub fn pacman_heading(direction: Direction) -> Option<Heading> {
    let rotation = match direction {
        Direction::Up => 0.0,
        Direction::Right => 90.0,
        Direction::Down => 180.0,
        Direction::Left => 270.0,
        Direction::None => return None,
    };

    Some(Heading {
        velocity: direction.as_vec2() * PLAYER_SPEED,
        rotation,
    })
}

/// Applies player commands: direction changes, pausing and exit requests.
pub fn player_control_system(
    mut events: EventReader<GameEvent>,
    mut state: ResMut<GlobalState>,
    mut pause: ResMut<PauseState>,
    mut players: Query<(&mut Velocity, &mut Sprite), With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    for event in events.read() {
        let GameEvent::Command(command) = event else {
            continue;
        };

        match command {
            GameCommand::Exit => {
                info!("Exit requested");
                state.exit = true;
            }
            GameCommand::TogglePause => {
                pause.toggle();
                info!("{}", if pause.active() { "Paused" } else { "Unpaused" });
            }
            GameCommand::MovePlayer(direction) => {
                if pause.active() {
                    trace!(direction = direction.as_ref(), "Ignoring movement while paused");
                    continue;
                }
                let Some(heading) = pacman_heading(*direction) else {
                    continue;
                };

                match players.single_mut() {
                    Ok((mut velocity, mut sprite)) => {
                        heading.apply(&mut velocity, &mut sprite);
                        debug!(direction = direction.as_ref(), "Player changed direction");
                    }
                    Err(e) => {
                        errors.write(GameError::InvalidState(format!(
                            "No/multiple entities queried for player system: {e}"
                        )));
                    }
                }
            }
        }
    }
}
