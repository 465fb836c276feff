use pacman_demo::app::App;
use pacman_demo::config::Config;
use pacman_demo::logging;
use tracing::{debug, info};

/// The main entry point of the application.
///
/// Loads `.env`, sets up logging and configuration, then runs the main loop until exit.
pub fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv().ok();

    logging::setup_logging();
    if let Some(path) = dotenv {
        debug!(path = %path.display(), "Loaded .env file");
    }

    let config = Config::load()?;
    debug!(?config, "Loaded configuration");

    let mut app = App::new(&config)?;

    info!("Starting main loop");
    while app.run() {}

    info!("Main loop ended, shutting down");
    Ok(())
}
