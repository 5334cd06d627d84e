use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Cell, CellOutOfRangeError};

/// An ordered placement of pieces on the board.
///
/// Each element is the cell one piece is placed on. Cells may repeat; a
/// repeated cell is still a single occupied square when scored.
///
/// The `Display` form lists the cell indices separated by single spaces.
///
/// ```
/// use queensga_board::Candidate;
///
/// let candidate = Candidate::from_indices([3, 17, 3]).unwrap();
/// assert_eq!(candidate.to_string(), "3 17 3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate {
    cells: Vec<Cell>,
}

impl Candidate {
    #[must_use]
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Builds a candidate from raw cell indices, rejecting indices off the board.
    pub fn from_indices<I>(indices: I) -> Result<Self, CellOutOfRangeError>
    where
        I: IntoIterator<Item = usize>,
    {
        let cells = indices
            .into_iter()
            .map(Cell::from_index)
            .collect::<Result<_, _>>()?;
        Ok(Self { cells })
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to the placed cells, for operators that edit in place.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    #[must_use]
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell indices as plain integers.
    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().map(|c| c.index())
    }
}

impl FromIterator<Cell> for Candidate {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_indices_rejects_off_board() {
        let err = Candidate::from_indices([1, 2, 64]).unwrap_err();
        assert_eq!(err.index(), 64);
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(Candidate::default().to_string(), "");
    }

    #[test]
    fn test_serializes_as_index_list() {
        let candidate = Candidate::from_indices([0, 63, 7]).unwrap();
        let json = serde_json::to_string(&candidate).unwrap();
        assert_eq!(json, "[0,63,7]");
        let back: Candidate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, candidate);
    }

    #[test]
    fn test_indices_preserve_order() {
        let candidate = Candidate::from_indices([9, 1, 9]).unwrap();
        assert_eq!(candidate.indices().collect::<Vec<_>>(), vec![9, 1, 9]);
    }
}
