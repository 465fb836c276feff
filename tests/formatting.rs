use std::io;
use std::sync::{Arc, Mutex};

use pacman_demo::formatter::{self, FrameFormatter};
use pacman_demo::logging;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use tracing_subscriber::fmt::MakeWriter;

#[test]
fn test_default_filter_targets_crate() {
    assert_eq!(logging::default_filter(), "warn,pacman_demo=info");
}

#[test]
fn test_setup_logging_is_idempotent() {
    logging::setup_logging();
    logging::setup_logging();
    tracing::info!("logging set up twice without panicking");
}

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedOutput {
    type Writer = CapturedOutput;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_line(emit: impl FnOnce()) -> String {
    let output = CapturedOutput::default();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(output.clone())
        .event_format(FrameFormatter)
        .finish();

    tracing::subscriber::with_default(subscriber, emit);

    let bytes = output.0.lock().unwrap().clone();
    String::from_utf8(bytes).expect("formatter output is utf-8")
}

#[test]
fn test_frame_formatter_line_layout() {
    let line = capture_line(|| tracing::info!(target: "pacman_demo::game", "Player touched ghost"));

    // HH:MM:SS.fffff
    let (timestamp, rest) = line.split_at(14);
    let digits_at = [0, 1, 3, 4, 6, 7, 9, 10, 11, 12, 13];
    for (i, c) in timestamp.chars().enumerate() {
        if digits_at.contains(&i) {
            assert!(c.is_ascii_digit(), "expected a digit at {i} in {line:?}");
        }
    }
    assert_eq!(&timestamp[2..3], ":");
    assert_eq!(&timestamp[5..6], ":");
    assert_eq!(&timestamp[8..9], ".");

    // 0xFRAME, four upper-case hex digits
    let (frame, rest) = rest.split_at(8);
    assert_that(&frame.starts_with(" 0x")).is_true();
    assert_that(&frame[3..7].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase())).is_true();
    assert_eq!(&frame[7..], " ");

    assert_eq!(rest, " INFO pacman_demo::game: Player touched ghost\n");
}

#[test]
fn test_frame_formatter_pads_levels() {
    let warn = capture_line(|| tracing::warn!(target: "pacman_demo", "behind"));
    let error = capture_line(|| tracing::error!(target: "pacman_demo", "failed"));

    assert_that(&warn[22..].to_string()).is_equal_to(" WARN pacman_demo: behind\n".to_string());
    assert_that(&error[22..].to_string()).is_equal_to("ERROR pacman_demo: failed\n".to_string());
}

#[test]
fn test_frame_counter_advances() {
    let before = formatter::frame_count();
    formatter::advance_frame();
    assert_that(&(formatter::frame_count() > before)).is_true();
}
