//! Genetic search for high-scoring queen placements.
//!
//! This crate evolves [`Candidate`](queensga_board::Candidate)s, ordered lists
//! of occupied cells on an 8×8 board, to maximize the score computed by
//! [`queensga_board::evaluator`].
//!
//! # How the Search Works
//!
//! 1. **Population** - Create `population_size` random candidates
//! 2. **Selection** - Keep the `num_best` highest-scoring candidates
//! 3. **Reproduction** - Refill the population with single-point crossover of
//!    random survivor pairs, mutating some children
//! 4. **Repeat** - Run exactly `generations` generations
//! 5. **Result** - Report the best candidate of the final population
//!
//! # Architecture
//!
//! ```text
//! SearchParams ──validate──▶ GeneticSearch::run
//!                                ↓ owns
//!                            Population ──select──▶ survivors (Individual)
//!                                ↑                      ↓
//!                                └──── PopulationEvolver::evolve
//!                                        (operators::crossover / mutate)
//! ```
//!
//! All randomness comes from one generator passed in by the caller. Seeding
//! it from a [`SearchSeed`](seed::SearchSeed) makes a run reproducible.
//!
//! # Example
//!
//! ```
//! use queensga_search::{params::SearchParams, search::GeneticSearch, seed::SearchSeed};
//!
//! let params = SearchParams {
//!     population_size: 100,
//!     generations: 10,
//!     ..SearchParams::default()
//! };
//! let search = GeneticSearch::new(params).unwrap();
//! let mut rng = SearchSeed::from_bytes([1; 16]).to_rng();
//! let best = search.run(&mut rng, |summary| {
//!     eprintln!("generation {}: best {}", summary.generation, summary.best);
//! });
//! println!("{} => {}", best.candidate(), best.score());
//! ```
//!
//! # Current Limitations
//!
//! - **No elitism**: the best candidate can be lost between generations, see
//!   [`genetic`]
//! - **No convergence detection**: the loop always runs the configured number
//!   of generations
//! - **Fixed rates**: mutation probability does not adapt during a run

pub mod genetic;
pub mod operators;
pub mod params;
pub mod search;
pub mod seed;
