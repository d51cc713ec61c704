//! Dual-sink output router.
//!
//! Owns the display and the host UART. Writes go to whichever sink is
//! currently selected; [`OutputRouter::write`] selects each requested sink
//! in turn (serial first, then display) before writing to it.

use core::fmt;

use ps2term_common::{Sink, Sinks};
use ps2term_hal::{Display, Serial};

/// Routes characters to the display and the host link.
pub struct OutputRouter<D, S> {
    display: D,
    serial: S,
    selected: Sink,
}

impl<D: Display, S: Serial> OutputRouter<D, S> {
    /// Create a router with the display selected.
    pub fn new(display: D, serial: S) -> Self {
        Self {
            display,
            serial,
            selected: Sink::Display,
        }
    }

    /// Target subsequent [`put`](Self::put) and `fmt::Write` output at `sink`.
    pub fn select(&mut self, sink: Sink) {
        self.selected = sink;
    }

    /// The currently selected sink.
    pub fn selected(&self) -> Sink {
        self.selected
    }

    /// Write one byte to the selected sink.
    pub fn put(&mut self, byte: u8) {
        match self.selected {
            Sink::Display => self.display.write_byte(byte),
            Sink::Serial => self.serial.write_byte(byte),
        }
    }

    /// Write `byte` to every sink in `sinks`.
    pub fn write(&mut self, byte: u8, sinks: Sinks) {
        for sink in sinks.in_write_order() {
            self.select(sink);
            self.put(byte);
        }
    }

    /// Write every byte of `bytes` to every sink in `sinks`.
    pub fn write_all(&mut self, bytes: &[u8], sinks: Sinks) {
        for sink in sinks.in_write_order() {
            self.select(sink);
            for &byte in bytes {
                self.put(byte);
            }
        }
    }

    /// Non-blocking read from the host link.
    pub fn poll_serial(&mut self) -> Option<u8> {
        self.serial.read_byte()
    }

    /// The display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The display, for cursor and control instructions.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// The host link.
    pub fn serial(&self) -> &S {
        &self.serial
    }

    /// The host link.
    pub fn serial_mut(&mut self) -> &mut S {
        &mut self.serial
    }
}

impl<D: Display, S: Serial> fmt::Write for OutputRouter<D, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.put(byte);
        }
        Ok(())
    }
}
