//! The generational search loop.

use rand::Rng;

use crate::{
    genetic::{Individual, Population, PopulationEvolver},
    params::{ParamsError, SearchParams},
};

/// Scores of the survivors of one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    /// Zero-based generation number
    pub generation: usize,
    pub best: u32,
    pub worst: u32,
    pub mean: f64,
}

impl GenerationSummary {
    fn from_survivors(generation: usize, survivors: &[Individual]) -> Self {
        let best = survivors.first().map_or(0, Individual::score);
        let worst = survivors.last().map_or(0, Individual::score);
        let sum = survivors.iter().map(|s| f64::from(s.score())).sum::<f64>();
        #[expect(clippy::cast_precision_loss)]
        let mean = sum / survivors.len().max(1) as f64;
        Self {
            generation,
            best,
            worst,
            mean,
        }
    }
}

/// A validated search configuration, ready to run.
///
/// ```
/// use queensga_search::{params::SearchParams, search::GeneticSearch, seed::SearchSeed};
///
/// let params = SearchParams {
///     population_size: 50,
///     generations: 20,
///     num_best: 5,
///     candidate_length: Some(8),
///     mutation_rate: 0.1,
/// };
/// let search = GeneticSearch::new(params).unwrap();
/// let mut rng = SearchSeed::from_bytes([7; 16]).to_rng();
/// let best = search.run(&mut rng, |_| {});
/// assert_eq!(best.candidate().len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSearch {
    params: SearchParams,
}

impl GeneticSearch {
    pub fn new(params: SearchParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Runs the search to completion and returns the best candidate of the
    /// final population.
    ///
    /// Exactly `generations` generations are run; there is no early stop.
    /// `on_generation` is called once per generation with the scores of its
    /// survivors and never influences the result.
    pub fn run<R, F>(&self, rng: &mut R, mut on_generation: F) -> Individual
    where
        R: Rng + ?Sized,
        F: FnMut(&GenerationSummary),
    {
        let SearchParams {
            population_size,
            generations,
            num_best,
            candidate_length: _,
            mutation_rate,
        } = self.params;
        let evolver = PopulationEvolver { mutation_rate };

        let mut population =
            Population::random(population_size, self.params.candidate_length(), rng);
        for generation in 0..generations {
            let survivors = population.select(num_best);
            on_generation(&GenerationSummary::from_survivors(generation, &survivors));
            population = evolver.evolve(&survivors, population_size, rng);
        }

        let mut best = population.select(1);
        assert_eq!(best.len(), 1);
        best.swap_remove(0)
    }
}
