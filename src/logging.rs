use std::sync::Once;

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::formatter::FrameFormatter;

static SUBSCRIBER_INIT: Once = Once::new();

/// The filter used when `RUST_LOG` is unset or invalid.
pub fn default_filter() -> String {
    format!("warn,{}=info", env!("CARGO_CRATE_NAME"))
}

/// Installs the global tracing subscriber. Safe to call more than once.
pub fn setup_logging() {
    SUBSCRIBER_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

        let subscriber = FmtSubscriber::builder()
            .with_ansi(true)
            .event_format(FrameFormatter)
            .with_env_filter(filter)
            .finish()
            .with(ErrorLayer::default());

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Could not install tracing subscriber: {e}");
        }
    });
}
