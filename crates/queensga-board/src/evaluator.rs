//! Fitness function for candidates.
//!
//! The score is a cheap proxy rather than a legality or conflict check: every
//! occupied cell earns points for the row, column and diagonal offsets that do
//! not coincide with itself, see [`Grid::cell_score`]. Higher is better and
//! the value is neither normalized nor capped.
//!
//! Placement order never matters, only which cells end up occupied.

use crate::{Candidate, Grid};

/// Scores a candidate.
///
/// # Examples
///
/// ```
/// use queensga_board::{Candidate, evaluator};
///
/// assert_eq!(evaluator::evaluate(&Candidate::default()), 0);
///
/// let corner = Candidate::from_indices([0]).unwrap();
/// assert_eq!(evaluator::evaluate(&corner), 23);
/// ```
#[must_use]
pub fn evaluate(candidate: &Candidate) -> u32 {
    Grid::from_cells(candidate.cells()).score()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Cell;

    fn candidate(indices: &[usize]) -> Candidate {
        Candidate::from_indices(indices.iter().copied()).unwrap()
    }

    #[test]
    fn test_repeated_calls_agree() {
        let c = candidate(&[5, 12, 40, 40, 63]);
        let first = evaluate(&c);
        for _ in 0..10 {
            assert_eq!(evaluate(&c), first);
        }
    }

    #[test]
    fn test_duplicates_do_not_stack() {
        assert_eq!(evaluate(&candidate(&[27, 27, 27])), evaluate(&candidate(&[27])));
    }

    #[test]
    fn test_full_board() {
        let all = Cell::all().collect::<Candidate>();
        let expected = Cell::all().map(Grid::cell_score).sum::<u32>();
        assert_eq!(evaluate(&all), expected);
        // 64 * 14 for the row/column terms plus 204 + 204 diagonal steps.
        assert_eq!(expected, 1304);
    }

    proptest! {
        #[test]
        fn prop_order_invariant(
            indices in prop::collection::vec(0usize..64, 0..20),
            rotate in 0usize..20,
        ) {
            let original = candidate(&indices);
            let mut reordered = indices.clone();
            reordered.reverse();
            if !reordered.is_empty() {
                let len = reordered.len();
                reordered.rotate_left(rotate % len);
            }
            prop_assert_eq!(evaluate(&original), evaluate(&candidate(&reordered)));
        }

        #[test]
        fn prop_score_is_sum_of_distinct_cells(indices in prop::collection::vec(0usize..64, 0..20)) {
            let mut distinct = indices.clone();
            distinct.sort_unstable();
            distinct.dedup();
            let expected = distinct
                .iter()
                .map(|&i| Grid::cell_score(Cell::from_index(i).unwrap()))
                .sum::<u32>();
            prop_assert_eq!(evaluate(&candidate(&indices)), expected);
        }
    }
}
