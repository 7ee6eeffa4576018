//! Benchmark command
//!
//! Cracks a random sample of secrets and measures throughput.

use crate::core::Code;
use crate::solver::Solver;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Benchmark parameters
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of distinct secrets to sample (capped at the board size)
    pub count: usize,
    /// Fixed seed for a reproducible sample
    pub seed: Option<u64>,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count, seed: None }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Pick `count` distinct secrets from the solver's board
#[must_use]
pub fn sample_secrets(solver: &Solver, config: &BenchmarkConfig) -> Vec<Code> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    solver
        .universe()
        .choose_multiple(&mut rng, config.count)
        .cloned()
        .collect()
}

/// Run benchmark on a random sample of secrets
pub fn run_benchmark(solver: &Solver, config: &BenchmarkConfig) -> BenchmarkResult {
    let secrets = sample_secrets(solver, config);

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut failed = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for secret in &secrets {
        let Ok(guesses) = solver.crack(secret) else {
            failed += 1;
            continue;
        };

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_games = secrets.len();
    let solved = total_games - failed;
    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        total_games,
        failed,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        games_per_second: if seconds > 0.0 {
            total_games as f64 / seconds
        } else {
            0.0
        },
    }
}
