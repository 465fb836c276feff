use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::{WINDOW_SIZE, WINDOW_TITLE};
use crate::error::GameError;
use crate::game::Game;
use crate::platform;

/// Main application wrapper that manages the SDL context and frame pacing.
pub struct App {
    pub game: Game,
    loop_time: Duration,
}

impl App {
    /// Initializes SDL, opens the window and builds the game on top of it.
    ///
    /// # Errors
    ///
    /// Returns an error if any SDL subsystem, the window or the canvas fails to initialize.
    pub fn new(config: &Config) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        let window = video_subsystem
            .window(WINDOW_TITLE, WINDOW_SIZE.x, WINDOW_SIZE.y)
            .position_centered()
            .build()?;
        debug!(width = WINDOW_SIZE.x, height = WINDOW_SIZE.y, "Window created");

        let canvas = window.into_canvas().accelerated().build()?;
        let texture_creator = canvas.texture_creator();

        let game = Game::new(canvas, texture_creator, event_pump, config);

        info!(fps = config.fps, ticks_per_frame = config.ticks_per_frame, "Starting game loop");
        Ok(App {
            game,
            loop_time: config.loop_time(),
        })
    }

    /// Runs one frame and sleeps out the rest of its time slice.
    ///
    /// # Returns
    ///
    /// `true` if the loop should continue, `false` once an exit has been requested.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        if self.game.tick() {
            info!("Exit requested. Exiting...");
            return false;
        }

        let elapsed = start.elapsed();
        if elapsed < self.loop_time {
            let time = self.loop_time.saturating_sub(elapsed);
            if time != Duration::ZERO {
                platform::sleep(time, self.game.focused());
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", elapsed - self.loop_time);
        }

        true
    }
}
