//! Population, truncation selection and generational replacement.
//!
//! # Algorithm Overview
//!
//! Each generation goes through the same cycle:
//!
//! 1. **Selection** - Score every candidate and keep the `num_best` highest
//!    ([`Population::select`])
//! 2. **Reproduction** - Draw two parents uniformly (with replacement) from the
//!    survivors and recombine them with single-point crossover
//! 3. **Mutation** - With probability `mutation_rate`, move one piece of the child
//! 4. **Replacement** - Repeat until the new population is full, then discard the
//!    old one entirely
//!
//! # No Elitism
//!
//! Survivors are only used as parents; none of them is copied into the next
//! generation. A child equals its parent only when both parents are the same
//! individual (or identical) and no mutation happens, so the best candidate
//! seen so far can disappear from one generation to the next. This is a known
//! property of the search and is kept intentionally.

use queensga_board::{Candidate, evaluator};
use rand::Rng;

use crate::operators;

/// A candidate together with its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    candidate: Candidate,
    score: u32,
}

impl Individual {
    /// Scores `candidate` and wraps it.
    #[must_use]
    pub fn evaluate(candidate: Candidate) -> Self {
        let score = evaluator::evaluate(&candidate);
        Self { candidate, score }
    }

    #[must_use]
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    #[must_use]
    pub fn into_candidate(self) -> Candidate {
        self.candidate
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }
}

/// One generation of candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    candidates: Vec<Candidate>,
}

impl Population {
    /// Creates `count` random candidates of `candidate_length` pieces each.
    #[must_use]
    pub fn random<R>(count: usize, candidate_length: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let candidates = (0..count)
            .map(|_| operators::random_candidate(rng, candidate_length))
            .collect();
        Self { candidates }
    }

    #[must_use]
    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns the `count` highest-scoring candidates, best first.
    ///
    /// Candidates with equal scores keep their population order. Scores are
    /// recomputed on every call.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the population size.
    ///
    /// # Examples
    ///
    /// ```
    /// use queensga_board::Candidate;
    /// use queensga_search::genetic::Population;
    ///
    /// let population = Population::from_candidates(vec![
    ///     Candidate::from_indices([63]).unwrap(),
    ///     Candidate::from_indices([0]).unwrap(),
    /// ]);
    /// let best = population.select(1);
    /// assert_eq!(best[0].candidate().indices().collect::<Vec<_>>(), [0]);
    /// assert_eq!(best[0].score(), 23);
    /// ```
    #[must_use]
    pub fn select(&self, count: usize) -> Vec<Individual> {
        assert!(
            count <= self.candidates.len(),
            "cannot select {count} candidates from a population of {}",
            self.candidates.len()
        );
        let mut ranked = self
            .candidates
            .iter()
            .enumerate()
            .map(|(i, c)| (evaluator::evaluate(c), i))
            .collect::<Vec<_>>();
        // stable: ties stay in population order
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked
            .into_iter()
            .take(count)
            .map(|(score, i)| Individual {
                candidate: self.candidates[i].clone(),
                score,
            })
            .collect()
    }
}

/// Builds the next generation from the survivors of the current one.
#[derive(Debug, Clone)]
pub struct PopulationEvolver {
    /// Probability of mutating each child
    pub mutation_rate: f64,
}

impl PopulationEvolver {
    /// Breeds a new population of `population_size` children from `parents`.
    ///
    /// For each child, draws are made in a fixed order (first parent, second
    /// parent, crossover point, mutation roll, then the mutated position and
    /// cell) so that a seeded generator always yields the same population.
    ///
    /// # Panics
    ///
    /// Panics if `parents` is empty, or if the parents are shorter than two
    /// pieces.
    #[must_use]
    pub fn evolve<R>(&self, parents: &[Individual], population_size: usize, rng: &mut R) -> Population
    where
        R: Rng + ?Sized,
    {
        assert!(!parents.is_empty(), "no parents to breed from");
        let mut candidates = Vec::with_capacity(population_size);
        while candidates.len() < population_size {
            let p1 = &parents[rng.random_range(0..parents.len())];
            let p2 = &parents[rng.random_range(0..parents.len())];
            let mut child = operators::crossover(&p1.candidate, &p2.candidate, rng);
            if rng.random_bool(self.mutation_rate) {
                operators::mutate(&mut child, rng);
            }
            candidates.push(child);
        }
        Population { candidates }
    }
}
