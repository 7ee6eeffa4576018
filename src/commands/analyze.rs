//! Guess analysis command
//!
//! Shows how a guess splits the whole board by score: how many score classes
//! it creates, the largest class, and how many candidates remain on average.

use crate::core::{Code, Score};
use crate::error::CodeError;
use crate::solver::Solver;
use rustc_hash::FxHashMap;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub total_candidates: usize,
    /// Score classes, most black pegs first
    pub partitions: Vec<(Score, usize)>,
    pub largest_partition: usize,
    pub expected_remaining: f64,
}

/// Partition the solver's board by the score each code gives `guess`
///
/// `guess` defaults to the solver's opening.
///
/// # Errors
///
/// Returns an error if `guess` does not parse as a code on the solver's board.
pub fn analyze_guess(guess: Option<&str>, solver: &Solver) -> Result<AnalysisResult, CodeError> {
    let guess = match guess {
        Some(text) => Code::parse(text, solver.config())?,
        None => solver.opening().clone(),
    };

    let mut counts: FxHashMap<Score, usize> = FxHashMap::default();
    for candidate in solver.universe() {
        *counts
            .entry(Score::calculate(candidate, &guess))
            .or_insert(0) += 1;
    }

    let mut partitions: Vec<(Score, usize)> = counts.into_iter().collect();
    partitions.sort_unstable_by(|(a, _), (b, _)| b.cmp(a));

    let total_candidates = solver.universe().len();
    let largest_partition = partitions.iter().map(|&(_, n)| n).max().unwrap_or(0);

    // A secret lands in a class of size n with probability n / total
    let expected_remaining = if total_candidates > 0 {
        partitions.iter().map(|&(_, n)| (n * n) as f64).sum::<f64>() / total_candidates as f64
    } else {
        0.0
    };

    Ok(AnalysisResult {
        guess,
        total_candidates,
        partitions,
        largest_partition,
        expected_remaining,
    })
}
