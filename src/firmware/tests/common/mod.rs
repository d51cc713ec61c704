//! Shared harness for the end-to-end tests.

#![allow(dead_code)]

use ps2term::config::{LCD_COLS, LCD_ROWS};
use ps2term::{Config, Peripherals, Terminal};
use ps2term_sim::{Ps2Link, SimClockPin, SimDataPin, SimDelay, SimLcd, SimSerial};

pub type SimTerminal = Terminal<SimClockPin, SimDataPin, SimLcd, SimSerial, SimDelay>;

/// Scan codes for `a` through `z`.
pub const LETTERS: [u8; 26] = [
    0x1C, 0x32, 0x21, 0x23, 0x24, 0x2B, 0x34, 0x33, 0x43, 0x3B, 0x42, 0x4B, 0x3A, 0x31, 0x44,
    0x4D, 0x15, 0x2D, 0x1B, 0x2C, 0x3C, 0x2A, 0x1D, 0x22, 0x35, 0x1A,
];

pub const LEFT_SHIFT: u8 = 0x12;
pub const CAPS_LOCK: u8 = 0x58;
pub const ENTER: u8 = 0x5A;
pub const BACKSPACE: u8 = 0x66;
pub const RELEASE: u8 = 0xF0;
pub const F7: u8 = 0x83;
pub const F9: u8 = 0x01;
pub const F10: u8 = 0x09;

/// Scan code for a lowercase letter.
pub fn letter(c: u8) -> u8 {
    LETTERS[usize::from(c - b'a')]
}

/// Scan codes typing `text` (lowercase letters only).
pub fn codes(text: &str) -> Vec<u8> {
    text.bytes().map(letter).collect()
}

/// A started terminal on simulated peripherals, plus its keyboard link.
pub fn terminal(config: Config) -> (SimTerminal, Ps2Link) {
    let link = Ps2Link::new();
    let (clock, data) = link.pins();
    let mut terminal = Terminal::new(
        Peripherals {
            clock,
            data,
            display: SimLcd::new(LCD_COLS, LCD_ROWS),
            serial: SimSerial::new(),
            delay: SimDelay::new(),
        },
        config,
    );
    terminal.start();
    (terminal, link)
}

/// Poll until every queued frame and host byte has been handled.
pub fn drain(terminal: &mut SimTerminal, link: &Ps2Link) {
    while !link.is_idle() || terminal.serial().pending_rx() > 0 {
        terminal.poll();
    }
}

/// Send scan codes over the link and process them.
pub fn type_codes(terminal: &mut SimTerminal, link: &Ps2Link, codes: &[u8]) {
    link.send(codes);
    drain(terminal, link);
}
