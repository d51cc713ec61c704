//! Screen/cursor manager.
//!
//! Owns the cursor and the scrollback buffer for a `ROWS` x `COLS`
//! character display and keeps the physical display cursor in step with
//! them.
//!
//! # Architecture
//!
//! - `cursor`: row, column and linear address
//! - `scrollback`: the most recent full screen, for recall

pub mod cursor;
pub mod scrollback;

pub use cursor::{Cursor, Retreat};
pub use scrollback::Scrollback;

use ps2term_common::{BackspacePolicy, OverflowPolicy, Sinks};
use ps2term_hal::{Display, Serial};

use crate::config::{Quirks, ScrollbackIndex, LCD_CURSOR_LEFT};
use crate::output::OutputRouter;

/// Where a character came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Typed on the PS/2 keyboard.
    Keyboard,
    /// Received from the host UART.
    Host,
}

impl Origin {
    /// The byte that acts as Enter on this path.
    pub const fn enter(self) -> u8 {
        match self {
            Origin::Keyboard => b'\n',
            Origin::Host => b'\r',
        }
    }
}

/// What [`Screen::place`] did with a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Written; the cursor moved right.
    Written,
    /// Written; the row was full so the cursor moved to the next row.
    Wrapped,
    /// Written; the screen was full so it was reset to the origin.
    Overflowed,
    /// Enter: the cursor moved to the next row.
    NewLine,
    /// A control character with no display effect.
    Discarded,
}

/// Screen state for a `ROWS` x `COLS` display.
#[derive(Debug, Clone)]
pub struct Screen<const ROWS: usize, const COLS: usize> {
    cursor: Cursor,
    scrollback: Scrollback<ROWS, COLS>,
    on_overflow: OverflowPolicy,
    on_backspace: BackspacePolicy,
    quirks: Quirks,
}

impl<const ROWS: usize, const COLS: usize> Screen<ROWS, COLS> {
    /// Number of cells on the screen.
    pub const CAPACITY: usize = ROWS * COLS;

    /// Create a screen with the cursor at the origin and a blank scrollback.
    pub fn new(
        on_overflow: OverflowPolicy,
        on_backspace: BackspacePolicy,
        quirks: Quirks,
    ) -> Self {
        Self {
            cursor: Cursor::new(),
            scrollback: Scrollback::new(),
            on_overflow,
            on_backspace,
            quirks,
        }
    }

    /// The cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// The scrollback buffer.
    pub fn scrollback(&self) -> &Scrollback<ROWS, COLS> {
        &self.scrollback
    }

    /// Place one character from `origin` on the display.
    ///
    /// Enter moves to the next row, other control characters are dropped so
    /// they never reach character-generator RAM, and printable characters are
    /// written at the cursor and recorded in the scrollback buffer.
    pub fn place<D: Display, S: Serial>(
        &mut self,
        byte: u8,
        origin: Origin,
        out: &mut OutputRouter<D, S>,
    ) -> Placement {
        if byte == origin.enter() {
            self.new_line(out);
            return Placement::NewLine;
        }
        if byte < 0x20 {
            log::trace!("discarding control byte {:#04x}", byte);
            return Placement::Discarded;
        }

        let (row, col) = (self.cursor.row(), self.cursor.col());
        out.write(byte, Sinks::DISPLAY);
        self.cursor.advance();

        let wrap_col = match origin {
            Origin::Keyboard => self.quirks.keyboard_wrap_column,
            Origin::Host => COLS,
        };
        let placement = if self.cursor.address() >= Self::CAPACITY {
            self.overflow(out);
            Placement::Overflowed
        } else if self.cursor.col() >= wrap_col {
            self.cursor.wrap_line(ROWS);
            out.display_mut().set_cursor(0, self.cursor.row());
            Placement::Wrapped
        } else {
            Placement::Written
        };

        let (row, col) = match self.quirks.scrollback_index {
            ScrollbackIndex::WrittenCell => (row, col),
            ScrollbackIndex::AdvancedCursor => (self.cursor.row(), self.cursor.col()),
        };
        self.scrollback.store(row, col, byte);
        placement
    }

    /// Move to column 0 of the next row.
    pub fn new_line<D: Display, S: Serial>(&mut self, out: &mut OutputRouter<D, S>) {
        self.cursor.new_line(ROWS, COLS);
        out.display_mut().set_cursor(0, self.cursor.row());
    }

    /// Step the cursor back one cell and shift the display cursor left.
    ///
    /// The cell keeps its character. Returns `false` if the backspace policy
    /// refused to move.
    pub fn backspace<D: Display, S: Serial>(&mut self, out: &mut OutputRouter<D, S>) -> bool {
        if self.on_backspace == BackspacePolicy::StopAtOrigin && self.cursor.at_origin() {
            return false;
        }
        let display = out.display_mut();
        if self.cursor.retreat(ROWS, COLS) == Retreat::PreviousRow {
            // One past the last column, so the shift below lands on it.
            display.set_cursor(COLS, self.cursor.row());
        }
        display.command(LCD_CURSOR_LEFT);
        true
    }

    /// Clear the display and home its cursor.
    pub fn clear<D: Display, S: Serial>(&mut self, out: &mut OutputRouter<D, S>) {
        let display = out.display_mut();
        display.clear();
        display.home();
        if self.quirks.full_clear_resets_cursor {
            self.cursor.reset();
        }
        log::debug!("screen cleared");
    }

    /// Redraw the scrollback buffer, row by row, then put the display cursor
    /// back where the screen cursor is.
    pub fn recall<D: Display, S: Serial>(&self, out: &mut OutputRouter<D, S>) {
        for (row, cells) in self.scrollback.rows().enumerate() {
            out.display_mut().set_cursor(0, row);
            for &byte in cells {
                out.write(byte, Sinks::DISPLAY);
            }
        }
        self.sync_display(out);
    }

    /// Print the cursor column in decimal at the display cursor.
    ///
    /// The digits are not recorded in the scrollback buffer and do not move
    /// the screen cursor, so the display cursor is put back afterwards and
    /// the next character overwrites them.
    pub fn show_column<D: Display, S: Serial>(&self, out: &mut OutputRouter<D, S>) {
        let mut digits = [0u8; 20];
        let mut start = digits.len();
        let mut col = self.cursor.col();
        loop {
            start -= 1;
            digits[start] = b'0' + (col % 10) as u8;
            col /= 10;
            if col == 0 {
                break;
            }
        }
        out.write_all(&digits[start..], Sinks::DISPLAY);
        self.sync_display(out);
    }

    /// Move the display cursor onto the screen cursor.
    pub fn sync_display<D: Display, S: Serial>(&self, out: &mut OutputRouter<D, S>) {
        out.display_mut()
            .set_cursor(self.cursor.col(), self.cursor.row());
    }

    fn overflow<D: Display, S: Serial>(&mut self, out: &mut OutputRouter<D, S>) {
        let display = out.display_mut();
        match self.on_overflow {
            OverflowPolicy::ClearAndHome => {
                display.clear();
                display.home();
            }
            OverflowPolicy::WrapToOrigin => display.set_cursor(0, 0),
        }
        self.cursor.reset();
        log::debug!("screen full, {:?}", self.on_overflow);
    }
}
