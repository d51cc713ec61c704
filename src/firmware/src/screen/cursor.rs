//! Cursor position on the character grid.
//!
//! The cursor carries both a (row, column) pair and a linear, row-major
//! address. With the wrap column equal to the grid width the two always
//! agree: `address == row * cols + col`.

/// Cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    row: usize,
    col: usize,
    address: usize,
}

/// How a backspace moved the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// One column left on the same row.
    Left,
    /// To the last column of the previous row.
    PreviousRow,
}

impl Cursor {
    /// Create a cursor at the origin.
    pub const fn new() -> Self {
        Self {
            row: 0,
            col: 0,
            address: 0,
        }
    }

    /// Row (0-indexed).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column (0-indexed).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Linear address.
    pub fn address(&self) -> usize {
        self.address
    }

    /// Step past a placed character without wrapping.
    pub fn advance(&mut self) {
        self.col += 1;
        self.address += 1;
    }

    /// Move to column 0 of the next row, wrapping from the last row to the
    /// first. The address is left alone.
    pub fn wrap_line(&mut self, rows: usize) {
        self.row = (self.row + 1) % rows;
        self.col = 0;
    }

    /// Start a new line: like [`wrap_line`](Self::wrap_line), but the address
    /// moves to the start of the new row since no cell was consumed.
    pub fn new_line(&mut self, rows: usize, cols: usize) {
        self.wrap_line(rows);
        self.address = self.row * cols;
    }

    /// Step back one cell, wrapping from column 0 to the last column of the
    /// previous row and from the top row to the bottom row.
    pub fn retreat(&mut self, rows: usize, cols: usize) -> Retreat {
        let capacity = rows * cols;
        self.address = (self.address + capacity - 1) % capacity;
        if self.col == 0 {
            self.row = (self.row + rows - 1) % rows;
            self.col = cols - 1;
            Retreat::PreviousRow
        } else {
            self.col -= 1;
            Retreat::Left
        }
    }

    /// Whether the cursor is at the top-left cell.
    pub fn at_origin(&self) -> bool {
        self.row == 0 && self.col == 0
    }

    /// Return to the origin.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
