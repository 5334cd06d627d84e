pub use self::{candidate::*, cell::*, grid::*};

pub(crate) mod candidate;
pub(crate) mod cell;
pub(crate) mod grid;

/// Number of rows (and columns) of the square board.
pub const BOARD_SIZE: u8 = 8;
