//! Tracing event formatter that stamps every line with the wall clock and the current frame number.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Frames run since startup.
static FRAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The frame counter is printed as 4 hex digits and wraps.
const FRAME_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:5]");

const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Formats events as `HH:MM:SS.sssss 0xFRAME LEVEL target: fields`.
pub struct FrameFormatter;

impl<S, N> FormatEvent<S, N> for FrameFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let timestamp = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        let frame = frame_count() & FRAME_DISPLAY_MASK;
        if ansi {
            write!(writer, "{DIM}{timestamp} 0x{frame:04X}{RESET} ")?;
        } else {
            write!(writer, "{timestamp} 0x{frame:04X} ")?;
        }

        write_level(&mut writer, meta.level(), ansi)?;

        if ansi {
            write!(writer, " {DIM}{}:{RESET} ", meta.target())?;
        } else {
            write!(writer, " {}: ", meta.target())?;
        }

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn write_level(writer: &mut Writer<'_>, level: &Level, ansi: bool) -> fmt::Result {
    let (color, text) = match *level {
        Level::TRACE => ("\x1b[35m", "TRACE"),
        Level::DEBUG => ("\x1b[34m", "DEBUG"),
        Level::INFO => ("\x1b[32m", " INFO"),
        Level::WARN => ("\x1b[33m", " WARN"),
        Level::ERROR => ("\x1b[31m", "ERROR"),
    };
    if ansi {
        write!(writer, "{color}{text}{RESET}")
    } else {
        writer.write_str(text)
    }
}

/// Advances the frame counter. Called once per frame by the game.
pub fn advance_frame() {
    FRAME_COUNTER.fetch_add(1, Ordering::Relaxed);
}

pub fn frame_count() -> u64 {
    FRAME_COUNTER.load(Ordering::Relaxed)
}
