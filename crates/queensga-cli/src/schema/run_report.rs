use chrono::{DateTime, Utc};
use queensga_board::Candidate;
use queensga_search::{params::SearchParams, seed::SearchSeed};
use serde::{Deserialize, Serialize};

/// Summary of a finished run, written with `--output`.
///
/// Re-running with the same `seed` and `params` reproduces `best`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunReport {
    pub finished_at: DateTime<Utc>,
    pub seed: SearchSeed,
    pub params: SearchParams,
    pub best: Candidate,
    pub score: u32,
}
