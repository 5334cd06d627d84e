//! Genetic operators on candidates.
//!
//! These are the building blocks used by
//! [`PopulationEvolver`](crate::genetic::PopulationEvolver):
//!
//! - **Initialization**: [`random_candidate`] places pieces uniformly at random
//! - **Crossover**: [`crossover`] joins a prefix of one parent to the suffix of another
//! - **Mutation**: [`mutate`] moves one piece to a random cell
//!
//! Every operator takes the generator explicitly, so a seeded generator
//! reproduces the same sequence of candidates.

use queensga_board::{Candidate, Cell};
use rand::Rng;

/// Generates a candidate of `len` pieces, each on a uniformly random cell.
///
/// Cells are drawn independently, so the same cell can appear more than once.
pub fn random_candidate<R>(rng: &mut R, len: usize) -> Candidate
where
    R: Rng + ?Sized,
{
    (0..len).map(|_| rng.random::<Cell>()).collect()
}

/// Single-point crossover.
///
/// Picks a point `p` uniformly in `1..len` and returns `p1[..p]` followed by
/// `p2[p..]`. Both halves are therefore non-empty.
///
/// # Panics
///
/// Panics if the parents have different lengths or fewer than two pieces.
///
/// # Examples
///
/// ```
/// use queensga_board::Candidate;
/// use queensga_search::operators;
///
/// let parent = Candidate::from_indices([1, 2, 3, 4]).unwrap();
/// let child = operators::crossover(&parent, &parent, &mut rand::rng());
/// assert_eq!(child, parent);
/// ```
pub fn crossover<R>(p1: &Candidate, p2: &Candidate, rng: &mut R) -> Candidate
where
    R: Rng + ?Sized,
{
    assert_eq!(p1.len(), p2.len(), "parents must have the same length");
    assert!(p1.len() >= 2, "crossover needs at least two pieces");
    let point = rng.random_range(1..p1.len());
    p1.cells()[..point]
        .iter()
        .chain(&p2.cells()[point..])
        .copied()
        .collect()
}

/// Moves one randomly chosen piece to a uniformly random cell, in place.
///
/// The new cell may equal the old one, in which case the candidate is
/// unchanged.
///
/// # Panics
///
/// Panics if the candidate is empty.
pub fn mutate<R>(candidate: &mut Candidate, rng: &mut R)
where
    R: Rng + ?Sized,
{
    assert!(!candidate.is_empty(), "cannot mutate an empty candidate");
    let index = rng.random_range(0..candidate.len());
    candidate.cells_mut()[index] = rng.random();
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_random_candidate_length() {
        let mut rng = rng();
        for len in [0, 1, 10, 100] {
            assert_eq!(random_candidate(&mut rng, len).len(), len);
        }
    }

    #[test]
    fn test_random_candidate_covers_board() {
        let mut rng = rng();
        let candidate = random_candidate(&mut rng, 5000);
        let mut seen = [false; Cell::COUNT];
        for cell in candidate.cells() {
            seen[usize::from(cell.index())] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_crossover_identical_parents() {
        let mut rng = rng();
        for _ in 0..50 {
            let parent = random_candidate(&mut rng, 10);
            assert_eq!(crossover(&parent, &parent, &mut rng), parent);
        }
    }

    #[test]
    fn test_crossover_takes_prefix_then_suffix() {
        let mut rng = rng();
        let p1 = Candidate::from_indices([0, 1, 2, 3, 4, 5]).unwrap();
        let p2 = Candidate::from_indices([60, 61, 62, 63, 59, 58]).unwrap();
        for _ in 0..100 {
            let child = crossover(&p1, &p2, &mut rng);
            assert_eq!(child.len(), p1.len());

            let from_p1 = child
                .cells()
                .iter()
                .zip(p1.cells())
                .take_while(|(c, p)| c == p)
                .count();
            // the point is never 0 or len, so both parents contribute
            assert!((1..p1.len()).contains(&from_p1));
            assert_eq!(child.cells()[from_p1..], p2.cells()[from_p1..]);
        }
    }

    #[test]
    fn test_crossover_uses_every_point() {
        let mut rng = rng();
        let p1 = Candidate::from_indices([0; 4]).unwrap();
        let p2 = Candidate::from_indices([63; 4]).unwrap();
        let mut points = [false; 4];
        for _ in 0..200 {
            let child = crossover(&p1, &p2, &mut rng);
            let point = child.indices().take_while(|&i| i == 0).count();
            points[point] = true;
        }
        assert_eq!(points, [false, true, true, true]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_crossover_length_mismatch() {
        let p1 = Candidate::from_indices([0, 1, 2]).unwrap();
        let p2 = Candidate::from_indices([0, 1]).unwrap();
        let _ = crossover(&p1, &p2, &mut rng());
    }

    #[test]
    #[should_panic(expected = "at least two")]
    fn test_crossover_single_piece() {
        let p = Candidate::from_indices([7]).unwrap();
        let _ = crossover(&p, &p, &mut rng());
    }

    #[test]
    fn test_mutate_changes_at_most_one_position() {
        let mut rng = rng();
        for _ in 0..200 {
            let original = random_candidate(&mut rng, 10);
            let mut mutated = original.clone();
            mutate(&mut mutated, &mut rng);
            assert_eq!(mutated.len(), original.len());
            let changed = original
                .cells()
                .iter()
                .zip(mutated.cells())
                .filter(|(a, b)| a != b)
                .count();
            assert!(changed <= 1);
            assert!(mutated.indices().all(|i| usize::from(i) < Cell::COUNT));
        }
    }

    #[test]
    fn test_mutate_eventually_moves_a_piece() {
        let mut rng = rng();
        let original = Candidate::from_indices([0; 3]).unwrap();
        let moved = (0..20).any(|_| {
            let mut c = original.clone();
            mutate(&mut c, &mut rng);
            c != original
        });
        assert!(moved);
    }

    #[test]
    #[should_panic(expected = "empty candidate")]
    fn test_mutate_empty() {
        mutate(&mut Candidate::default(), &mut rng());
    }
}
