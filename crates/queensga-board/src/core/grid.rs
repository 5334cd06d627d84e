use std::fmt::{self, Write as _};

use crate::{BOARD_SIZE, Cell};

/// Occupancy of the 8×8 board as a 64-bit mask.
///
/// Bit `n` is set when the cell with index `n` holds at least one piece.
/// Placing a piece on an already occupied cell leaves the grid unchanged,
/// so every occupied cell counts exactly once when scoring.
///
/// # Bit Layout (LSB to MSB)
///
/// - Bits 0-7: row 0, columns 0-7
/// - Bits 8-15: row 1, columns 0-7
/// - ...
/// - Bits 56-63: row 7, columns 0-7
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grid {
    bits: u64,
}

impl Grid {
    pub const EMPTY: Self = Self { bits: 0 };

    /// Builds a grid with every listed cell marked as occupied.
    pub fn from_cells<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let mut grid = Self::EMPTY;
        for &cell in cells {
            grid.occupy(cell);
        }
        grid
    }

    #[inline]
    pub fn occupy(&mut self, cell: Cell) {
        self.bits |= 1 << cell.index();
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(self, cell: Cell) -> bool {
        (self.bits >> cell.index()) & 1 != 0
    }

    #[must_use]
    pub fn occupied_count(self) -> u32 {
        self.bits.count_ones()
    }

    /// Iterates over occupied cells in index order.
    pub fn occupied_cells(self) -> impl Iterator<Item = Cell> {
        Cell::all().filter(move |&c| self.is_occupied(c))
    }

    /// Contribution of a single occupied cell to the grid score.
    ///
    /// For each offset `i` in `0..8` the cell earns one point for each of:
    /// `i != row`, `i != col`, the down-right step `(row + i, col + i)` being
    /// on the board, and the down-left step `(row + i, col - i)` being on the
    /// board.
    #[must_use]
    pub fn cell_score(cell: Cell) -> u32 {
        let (row, col) = (cell.row(), cell.col());
        let mut score = 0;
        for i in 0..BOARD_SIZE {
            if i != row {
                score += 1;
            }
            if i != col {
                score += 1;
            }
            if row + i < BOARD_SIZE && col + i < BOARD_SIZE {
                score += 1;
            }
            if row + i < BOARD_SIZE && col >= i {
                score += 1;
            }
        }
        score
    }

    /// Sums [`Self::cell_score`] over every occupied cell.
    #[must_use]
    pub fn score(self) -> u32 {
        self.occupied_cells().map(Self::cell_score).sum()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let occupied = Cell::from_row_col(row, col).is_ok_and(|c| self.is_occupied(c));
                f.write_char(if occupied { 'Q' } else { '.' })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
