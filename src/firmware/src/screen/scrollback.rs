//! Copy of the most recently displayed screen.
//!
//! Unlike a terminal history this holds exactly one screen. Cells are
//! overwritten one at a time as characters are placed, so after the display
//! is cleared the buffer still holds the previous screen until new text
//! lands on each cell.

/// A `ROWS` x `COLS` grid of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scrollback<const ROWS: usize, const COLS: usize> {
    cells: [[u8; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Scrollback<ROWS, COLS> {
    /// Create a buffer filled with spaces.
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
        }
    }

    /// Record `byte` at `row`, `col`. Cells outside the grid are ignored.
    pub fn store(&mut self, row: usize, col: usize, byte: u8) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = byte;
                true
            }
            None => false,
        }
    }

    /// The byte at `row`, `col`.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// One row of the grid.
    pub fn row(&self, row: usize) -> Option<&[u8; COLS]> {
        self.cells.get(row)
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8; COLS]> {
        self.cells.iter()
    }
}

impl<const ROWS: usize, const COLS: usize> Default for Scrollback<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}
