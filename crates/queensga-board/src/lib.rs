//! Board model and fitness function for the queen placement search.
//!
//! A [`Candidate`] is an ordered list of [`Cell`]s on an 8×8 board. The
//! [`evaluator`] module turns a candidate into an integer fitness score by
//! marking the referenced cells on a [`Grid`] and summing a per-cell
//! contribution over every occupied cell.
//!
//! # Example
//!
//! ```
//! use queensga_board::{Candidate, Cell, evaluator};
//!
//! let candidate = Candidate::from_indices([0, 9, 63]).unwrap();
//! assert_eq!(candidate.len(), 3);
//! assert_eq!(candidate.cells()[1], Cell::from_row_col(1, 1).unwrap());
//!
//! let score = evaluator::evaluate(&candidate);
//! assert_eq!(score, evaluator::evaluate(&candidate));
//! ```

pub use self::core::*;

pub mod core;
pub mod evaluator;

/// Error returned when an integer does not name a cell of the 8×8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell index {index} is outside the board (expected 0..{})", Cell::COUNT)]
pub struct CellOutOfRangeError {
    index: usize,
}

impl CellOutOfRangeError {
    pub(crate) fn new(index: usize) -> Self {
        Self { index }
    }

    /// Returns the rejected index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}
