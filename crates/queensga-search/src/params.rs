//! Run parameters for the genetic search.

use serde::{Deserialize, Serialize};

/// Parameters of a search run.
///
/// Missing fields take their [`Default`] value when deserialized, so a
/// configuration file only needs to list what it changes.
///
/// # Candidate length
///
/// When `candidate_length` is `None`, candidates hold `num_best` pieces. This
/// ties the size of a candidate to the number of survivors per generation,
/// which is almost certainly unintended but matches how the search has always
/// been run. Set `candidate_length` to decouple them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Number of candidates in every generation
    pub population_size: usize,
    /// Number of evolution steps; zero only scores the initial population
    pub generations: usize,
    /// Number of top candidates kept as parents each generation
    pub num_best: usize,
    /// Pieces per candidate; defaults to `num_best`
    pub candidate_length: Option<usize>,
    /// Probability that a freshly recombined child is mutated
    pub mutation_rate: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            population_size: 1000,
            generations: 1000,
            num_best: 10,
            candidate_length: None,
            mutation_rate: 0.1,
        }
    }
}

/// Reasons a [`SearchParams`] cannot be run.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParamsError {
    #[display("population size must be at least 1")]
    EmptyPopulation,
    #[display("number of survivors must be at least 1")]
    NoSurvivors,
    #[display("cannot keep {num_best} survivors out of a population of {population_size}")]
    TooManySurvivors {
        num_best: usize,
        population_size: usize,
    },
    #[display("candidate length must be at least 1")]
    EmptyCandidate,
    #[display("candidate length {candidate_length} is too short for crossover (need at least 2)")]
    CandidateTooShort { candidate_length: usize },
    #[display("mutation rate {rate} is not a probability in [0, 1]")]
    InvalidMutationRate { rate: f64 },
}

impl SearchParams {
    /// Effective number of pieces per candidate.
    ///
    /// ```
    /// use queensga_search::params::SearchParams;
    ///
    /// let mut params = SearchParams::default();
    /// assert_eq!(params.candidate_length(), params.num_best);
    /// params.candidate_length = Some(8);
    /// assert_eq!(params.candidate_length(), 8);
    /// ```
    #[must_use]
    pub fn candidate_length(&self) -> usize {
        self.candidate_length.unwrap_or(self.num_best)
    }

    /// Checks that a search with these parameters can run to completion.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.population_size == 0 {
            return Err(ParamsError::EmptyPopulation);
        }
        if self.num_best == 0 {
            return Err(ParamsError::NoSurvivors);
        }
        if self.num_best > self.population_size {
            return Err(ParamsError::TooManySurvivors {
                num_best: self.num_best,
                population_size: self.population_size,
            });
        }
        let candidate_length = self.candidate_length();
        if candidate_length == 0 {
            return Err(ParamsError::EmptyCandidate);
        }
        // crossover picks a point strictly inside the candidate
        if self.generations > 0 && candidate_length < 2 {
            return Err(ParamsError::CandidateTooShort { candidate_length });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ParamsError::InvalidMutationRate {
                rate: self.mutation_rate,
            });
        }
        Ok(())
    }
}
