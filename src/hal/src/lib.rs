//! Hardware Abstraction Layer (HAL) traits for the PS/2 terminal.
//!
//! The terminal core only talks to the outside world through these traits.
//! Board glue implements them on top of real registers; `ps2term-sim`
//! implements them in software for tests.

#![no_std]

/// Trait for a serial port or similar character-based communication channel.
pub trait Serial {
    /// Writes a single byte to the serial port.
    fn write_byte(&mut self, byte: u8);
    /// Reads a single byte from the serial port, if available.
    ///
    /// Never blocks.
    fn read_byte(&mut self) -> Option<u8>;
}

/// Trait for an HD44780-style character display.
pub trait Display {
    /// Writes one character at the display cursor and advances the cursor.
    fn write_byte(&mut self, byte: u8);
    /// Clears every cell.
    fn clear(&mut self);
    /// Returns the cursor to the top-left cell without clearing.
    fn home(&mut self);
    /// Moves the cursor to `col` on `row`.
    fn set_cursor(&mut self, col: usize, row: usize);
    /// Sends a raw controller instruction (cursor style, cursor shift, ...).
    fn command(&mut self, code: u8);
}

/// Trait for a digital input line.
pub trait InputPin {
    /// Returns `true` if the line currently reads high.
    fn is_high(&mut self) -> bool;

    /// Returns `true` if the line currently reads low.
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Trait for a blocking delay source.
pub trait Delay {
    /// Busy-waits for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}
