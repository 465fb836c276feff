use bevy_ecs::event::EventReader;
use tracing::error;

use crate::error::GameError;

/// Logs every error raised by a system during the frame.
pub fn error_log_system(mut errors: EventReader<GameError>) {
    for e in errors.read() {
        error!("{e}");
    }
}
