use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use chrono::Utc;
use queensga_search::{
    genetic::Individual,
    params::SearchParams,
    search::{GenerationSummary, GeneticSearch},
    seed::SearchSeed,
};
use rand::Rng as _;

use crate::{schema::run_report::RunReport, util};

const DEFAULT_PROGRESS_INTERVAL: usize = 100;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvolveArg {
    /// JSON file with search parameters; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of candidates per generation [default: 1000]
    #[arg(long)]
    population_size: Option<usize>,
    /// Number of generations to run [default: 1000]
    #[arg(long)]
    generations: Option<usize>,
    /// Number of survivors kept as parents each generation [default: 10]
    #[arg(long)]
    num_best: Option<usize>,
    /// Pieces per candidate [default: same as --num-best]
    #[arg(long)]
    candidate_length: Option<usize>,
    /// Probability of mutating each child [default: 0.1]
    #[arg(long)]
    mutation_rate: Option<f64>,
    /// Random seed as 32 hex digits [default: random]
    #[arg(long)]
    seed: Option<SearchSeed>,
    /// Write a JSON run report to this file
    #[arg(long)]
    output: Option<PathBuf>,
    /// Print progress to stderr every N generations (0 disables)
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: usize,
}

impl EvolveArg {
    /// Layers command-line flags over the config file over the defaults.
    fn search_params(&self) -> anyhow::Result<SearchParams> {
        let mut params = match &self.config {
            Some(path) => util::read_json_file::<SearchParams, _>("search config", path)?,
            None => SearchParams::default(),
        };
        if let Some(v) = self.population_size {
            params.population_size = v;
        }
        if let Some(v) = self.generations {
            params.generations = v;
        }
        if let Some(v) = self.num_best {
            params.num_best = v;
        }
        if let Some(v) = self.candidate_length {
            params.candidate_length = Some(v);
        }
        if let Some(v) = self.mutation_rate {
            params.mutation_rate = v;
        }
        Ok(params)
    }
}

pub(crate) fn run(arg: &EvolveArg) -> anyhow::Result<()> {
    let params = arg.search_params()?;
    let search = GeneticSearch::new(params).context("Invalid search parameters")?;
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let params = search.params();

    eprintln!("Seed: {seed}");
    eprintln!(
        "Population: {}, Generations: {}, Survivors: {}, Candidate length: {}, Mutation rate: {}",
        params.population_size,
        params.generations,
        params.num_best,
        params.candidate_length(),
        params.mutation_rate,
    );

    let mut rng = seed.to_rng();
    let best = search.run(&mut rng, |summary| {
        if should_report(summary.generation, params.generations, arg.progress_interval) {
            eprintln!("{}", format_progress(summary));
        }
    });

    write_result(&mut io::stdout().lock(), &best).context("Failed to write result")?;
    eprintln!("Search completed.");

    if let Some(path) = &arg.output {
        let report = RunReport {
            finished_at: Utc::now(),
            seed,
            params: params.clone(),
            best: best.candidate().clone(),
            score: best.score(),
        };
        util::save_json(&report, path)?;
        eprintln!("Report saved to {}", path.display());
    }

    Ok(())
}

fn should_report(generation: usize, generations: usize, interval: usize) -> bool {
    interval > 0 && (generation % interval == 0 || generation + 1 == generations)
}

fn format_progress(summary: &GenerationSummary) -> String {
    format!(
        "Generation #{}: best {}, mean {:.1}, worst {}",
        summary.generation, summary.best, summary.mean, summary.worst
    )
}

fn write_result<W>(writer: &mut W, best: &Individual) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(writer, "{}", best.candidate())?;
    writeln!(writer, "Evaluation: {}", best.score())?;
    writer.flush()
}
