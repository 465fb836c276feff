use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::constants::{mechanics, DEFAULT_FPS};
use crate::error::{GameError, GameResult};

/// Highest frame rate the main loop accepts.
pub const MAX_FPS: u32 = 240;

/// Runtime configuration, read from `PACMAN_`-prefixed environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory the character sprites are loaded from
    pub assets_dir: PathBuf,
    /// Target frames per second of the main loop
    pub fps: u32,
    /// Simulation ticks advanced per rendered frame
    pub ticks_per_frame: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("./assets"),
            fps: DEFAULT_FPS,
            ticks_per_frame: mechanics::DEFAULT_TICKS_PER_FRAME,
        }
    }
}

impl Config {
    /// Loads the configuration from the process environment, falling back to defaults.
    pub fn load() -> GameResult<Self> {
        Self::from_figment(Self::figment().merge(Env::prefixed("PACMAN_")))
    }

    /// The defaults as a figment, for layering other providers on top.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
    }

    /// Extracts and validates a configuration from an arbitrary figment.
    pub fn from_figment(figment: Figment) -> GameResult<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> GameResult<()> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(GameError::Config(format!("fps must be within 1..={MAX_FPS}, got {}", self.fps)));
        }
        if self.ticks_per_frame == 0 {
            return Err(GameError::Config("ticks_per_frame must be at least 1".to_string()));
        }
        Ok(())
    }

    /// The duration of a single frame.
    pub fn loop_time(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}
