//! `log` backend for the firmware.
//!
//! The host UART carries user data, so log records go to a separate sink
//! supplied by the board (a debug UART, semihosting, a test buffer).
//! Records are formatted as `[LEVEL] target: message`.

use core::fmt;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Destination for formatted log records.
pub type LogSink = fn(&fmt::Arguments<'_>);

static SINK: spin::Once<LogSink> = spin::Once::new();
static LOGGER: FirmwareLogger = FirmwareLogger;

struct FirmwareLogger;

impl Log for FirmwareLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(sink) = SINK.get() {
            sink(&format_args!(
                "[{:<5}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            ));
        }
    }

    fn flush(&self) {}
}

/// Install the logger, sending records at or above `level` to `sink`.
///
/// Only the first call registers a sink; later calls fail like any second
/// `log::set_logger`.
pub fn init(sink: LogSink, level: LevelFilter) -> Result<(), SetLoggerError> {
    SINK.call_once(|| sink);
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;
    use std::sync::Mutex;

    static CAPTURED: Mutex<String> = Mutex::new(String::new());

    fn capture(args: &fmt::Arguments<'_>) {
        use core::fmt::Write;
        let mut captured = CAPTURED.lock().unwrap();
        writeln!(captured, "{}", args).unwrap();
    }

    #[test]
    fn test_records_reach_sink() {
        init(capture, LevelFilter::Debug).unwrap();
        log::debug!(target: "ps2term::test", "caps lock on");
        log::trace!(target: "ps2term::test", "filtered out");

        let captured = CAPTURED.lock().unwrap();
        assert!(captured.contains("[DEBUG] ps2term::test: caps lock on"));
        assert!(!captured.contains("filtered out"));
        drop(captured);

        assert!(init(capture, LevelFilter::Trace).is_err());
    }
}
