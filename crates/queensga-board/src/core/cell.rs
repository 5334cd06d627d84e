use std::fmt;

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Serialize};

use crate::{BOARD_SIZE, CellOutOfRangeError};

/// A single square of the 8×8 board, stored as its index `row * 8 + col`.
///
/// The index is always in `0..64`. Cells serialize as their bare index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Cell(u8);

impl Cell {
    /// Number of cells on the board.
    pub const COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

    /// Creates a cell from its board index.
    ///
    /// # Examples
    ///
    /// ```
    /// use queensga_board::Cell;
    ///
    /// let cell = Cell::from_index(42).unwrap();
    /// assert_eq!((cell.row(), cell.col()), (5, 2));
    /// assert!(Cell::from_index(64).is_err());
    /// ```
    pub fn from_index(index: usize) -> Result<Self, CellOutOfRangeError> {
        match u8::try_from(index) {
            Ok(i) if index < Self::COUNT => Ok(Self(i)),
            _ => Err(CellOutOfRangeError::new(index)),
        }
    }

    /// Creates a cell from its row and column.
    pub fn from_row_col(row: u8, col: u8) -> Result<Self, CellOutOfRangeError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(CellOutOfRangeError::new(
                usize::from(row) * usize::from(BOARD_SIZE) + usize::from(col),
            ));
        }
        Ok(Self(row * BOARD_SIZE + col))
    }

    /// Returns an iterator over every cell in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Self)
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    #[must_use]
    pub fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }
}

impl TryFrom<u8> for Cell {
    type Error = CellOutOfRangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value.into())
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Draws a cell uniformly from the whole board.
///
/// This enables `rng.random::<Cell>()`.
impl Distribution<Cell> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell(rng.random_range(0..BOARD_SIZE * BOARD_SIZE))
    }
}
