//! Test all secrets - the tournament
//!
//! Cracks every code on the board and reports worst case, mean and standard
//! deviation of the guesses needed.

use crate::core::{Code, GameConfig, enumerate_all_codes};
use crate::error::SolveError;
use crate::output::formatters::{code_label, histogram_bar};
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How to run the tournament
#[derive(Debug, Clone, Copy)]
pub struct TestAllOptions {
    /// Stop after this many secrets (odometer order)
    pub limit: Option<usize>,
    /// Crack secrets on the rayon thread pool
    pub parallel: bool,
    /// Draw a progress bar
    pub show_progress: bool,
}

impl Default for TestAllOptions {
    fn default() -> Self {
        Self {
            limit: None,
            parallel: true,
            show_progress: true,
        }
    }
}

/// Result of cracking a single secret
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub secret: Code,
    pub result: Result<usize, SolveError>,
}

/// Statistics over every game of a tournament
#[derive(Debug)]
pub struct TestAllStatistics {
    pub config: GameConfig,
    pub expected_games: usize,
    pub games_run: usize,
    pub solved: usize,
    pub failures: Vec<SolveError>,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_guesses: usize,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// First secret (in odometer order) that needed `max_guesses`
    pub worst_code: Option<Code>,
    pub average_guesses: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_deviation: f64,
    pub total_time: Duration,
}

impl TestAllStatistics {
    /// Aggregate per-secret outcomes
    ///
    /// Failed games are kept in `failures` and left out of every guess
    /// statistic.
    #[must_use]
    pub fn from_outcomes(
        config: GameConfig,
        outcomes: &[GameOutcome],
        expected_games: usize,
        total_time: Duration,
    ) -> Self {
        let mut guess_distribution = BTreeMap::new();
        let mut failures = Vec::new();
        let mut counts = Vec::with_capacity(outcomes.len());
        let mut max_guesses = 0;
        let mut worst_code = None;

        for outcome in outcomes {
            match &outcome.result {
                Ok(guesses) => {
                    counts.push(*guesses);
                    *guess_distribution.entry(*guesses).or_insert(0) += 1;
                    if *guesses > max_guesses {
                        max_guesses = *guesses;
                        worst_code = Some(outcome.secret.clone());
                    }
                }
                Err(err) => failures.push(err.clone()),
            }
        }

        let solved = counts.len();
        let total_guesses: usize = counts.iter().sum();
        let average_guesses = if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        };

        let std_deviation = if solved > 1 {
            let squares: f64 = counts
                .iter()
                .map(|&n| (n as f64 - average_guesses).powi(2))
                .sum();
            (squares / (solved as f64 - 1.0)).sqrt()
        } else {
            0.0
        };

        Self {
            config,
            expected_games,
            games_run: outcomes.len(),
            solved,
            failures,
            guess_distribution,
            total_guesses,
            max_guesses,
            min_guesses: counts.iter().copied().min().unwrap_or(0),
            worst_code,
            average_guesses,
            std_deviation,
            total_time,
        }
    }

    /// `(games run, games expected)` when they differ
    #[must_use]
    pub const fn count_mismatch(&self) -> Option<(usize, usize)> {
        if self.games_run == self.expected_games {
            None
        } else {
            Some((self.games_run, self.expected_games))
        }
    }
}

/// Run the solver against every secret on its board (or the first `limit`)
#[must_use]
pub fn run_test_all(solver: &Solver, options: TestAllOptions) -> TestAllStatistics {
    let config = *solver.config();
    let secrets: Vec<Code> = enumerate_all_codes(&config)
        .take(options.limit.unwrap_or(usize::MAX))
        .collect();

    let pb = if options.show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };
    pb.set_message("cracking");

    let crack = |secret: Code| {
        let result = solver.crack(&secret);
        pb.inc(1);
        GameOutcome { secret, result }
    };

    let start = Instant::now();
    let outcomes: Vec<GameOutcome> = if options.parallel {
        secrets.into_par_iter().map(crack).collect()
    } else {
        secrets.into_iter().map(crack).collect()
    };
    let total_time = start.elapsed();

    pb.finish_with_message("Complete!");

    TestAllStatistics::from_outcomes(config, &outcomes, config.universe_size(), total_time)
}

/// Print tournament statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    let config = &stats.config;

    if let Some((ran, expected)) = stats.count_mismatch() {
        eprintln!(
            "{}",
            format!("⚠ We ran {ran} games, but expected {expected} games").yellow()
        );
    }

    println!("\n{}", "═".repeat(70));
    println!(" Tournament Results ");
    println!("{}", "═".repeat(70));

    println!(
        "\nThis game had {} pegs of {} colors ({} permutations)",
        config.peg_count(),
        config.color_count(),
        config.universe_size()
    );

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Codes cracked:       {}", stats.solved);
    if !stats.failures.is_empty() {
        println!(
            "  Unsolved:            {}",
            stats.failures.len().to_string().red().bold()
        );
        for failure in stats.failures.iter().take(5) {
            eprintln!("    {}", failure.to_string().red());
        }
    }
    match &stats.worst_code {
        Some(code) => println!(
            "  Max guesses:         {}  ({} for example)",
            stats.max_guesses.to_string().yellow().bold(),
            code_label(code, config)
        ),
        None => println!("  Max guesses:         {}", stats.max_guesses),
    }
    println!(
        "  Avg guesses used:    {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("  Standard deviation:  {:.3}", stats.std_deviation);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if stats.games_run > 0 {
        println!(
            "  Time per code:       {:.3}ms",
            stats.total_time.as_secs_f64() * 1000.0 / stats.games_run as f64
        );
    }

    println!("\n📈 {}", "Distribution of Guesses".bright_cyan().bold());
    let max_count = stats
        .guess_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1);
    for (guesses, count) in stats.guess_distribution.iter().rev() {
        let percentage = *count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = histogram_bar(*count, max_count, 40);
        println!("  {guesses:2} guesses: {bar} {count:6} ({percentage:5.1}%)");
    }

    println!(
        "\nWe cracked {} codes total",
        stats.guess_distribution.values().sum::<usize>()
    );
}
