//! Character LCD model.
//!
//! Mirrors an HD44780 in the ways the firmware can observe: writes land at
//! the cursor and move it right, `clear` blanks every cell and homes the
//! cursor, and the `0x10`/`0x14` instructions shift the cursor without
//! touching cell contents. Writes past the right edge only move the cursor,
//! like writes into off-screen DDRAM.

use ps2term_hal::Display;

/// Controller instruction: shift cursor one cell left.
pub const CMD_CURSOR_LEFT: u8 = 0x10;
/// Controller instruction: shift cursor one cell right.
pub const CMD_CURSOR_RIGHT: u8 = 0x14;

/// A simulated character display.
#[derive(Debug, Clone)]
pub struct SimLcd {
    cols: usize,
    rows: usize,
    cells: Vec<Vec<u8>>,
    cursor: (usize, usize),
    commands: Vec<u8>,
    written: Vec<u8>,
    clears: usize,
}

impl SimLcd {
    /// Create a blank display of `cols` x `rows` cells.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![vec![b' '; cols]; rows],
            cursor: (0, 0),
            commands: Vec::new(),
            written: Vec::new(),
            clears: 0,
        }
    }

    /// Contents of one row as text.
    pub fn row_text(&self, row: usize) -> String {
        String::from_utf8_lossy(&self.cells[row]).into_owned()
    }

    /// Contents of every row, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows).map(|row| self.row_text(row)).collect()
    }

    /// The byte shown at `col`, `row`.
    pub fn cell(&self, col: usize, row: usize) -> u8 {
        self.cells[row][col]
    }

    /// Cursor position as `(col, row)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Raw instructions received through `command`, in order.
    pub fn commands(&self) -> &[u8] {
        &self.commands
    }

    /// Every byte passed to `write_byte`, in order, including off-screen ones.
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// How many times the display was cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl Display for SimLcd {
    fn write_byte(&mut self, byte: u8) {
        let (col, row) = self.cursor;
        if col < self.cols && row < self.rows {
            self.cells[row][col] = byte;
        }
        self.written.push(byte);
        self.cursor.0 += 1;
    }

    fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(b' ');
        }
        self.cursor = (0, 0);
        self.clears += 1;
    }

    fn home(&mut self) {
        self.cursor = (0, 0);
    }

    fn set_cursor(&mut self, col: usize, row: usize) {
        self.cursor = (col, row);
    }

    fn command(&mut self, code: u8) {
        match code {
            CMD_CURSOR_LEFT => self.cursor.0 = self.cursor.0.saturating_sub(1),
            CMD_CURSOR_RIGHT => self.cursor.0 += 1,
            _ => {}
        }
        self.commands.push(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_advances_cursor() {
        let mut lcd = SimLcd::new(4, 2);
        lcd.write_byte(b'h');
        lcd.write_byte(b'i');
        assert_eq!(lcd.row_text(0), "hi  ");
        assert_eq!(lcd.cursor(), (2, 0));
    }

    #[test]
    fn test_offscreen_write_is_dropped() {
        let mut lcd = SimLcd::new(2, 1);
        lcd.write_byte(b'a');
        lcd.write_byte(b'b');
        lcd.write_byte(b'c');
        assert_eq!(lcd.row_text(0), "ab");
        assert_eq!(lcd.written(), b"abc");
    }

    #[test]
    fn test_cursor_left_keeps_cell() {
        let mut lcd = SimLcd::new(4, 1);
        lcd.write_byte(b'x');
        lcd.command(CMD_CURSOR_LEFT);
        assert_eq!(lcd.cursor(), (0, 0));
        assert_eq!(lcd.cell(0, 0), b'x');
    }

    #[test]
    fn test_clear_blanks_and_homes() {
        let mut lcd = SimLcd::new(3, 2);
        lcd.set_cursor(1, 1);
        lcd.write_byte(b'z');
        lcd.clear();
        assert_eq!(lcd.lines(), vec!["   ", "   "]);
        assert_eq!(lcd.cursor(), (0, 0));
        assert_eq!(lcd.clear_count(), 1);
    }
}
