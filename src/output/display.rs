//! Display functions for command results

use super::formatters::{code_label, create_progress_bar, histogram_bar, score_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::GameConfig;
use colored::Colorize;

/// Print the result of cracking a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let config = &result.config;
    let peg_count = config.peg_count();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Cracking: {}",
        code_label(&result.secret, config).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nGuess {}: {} {}  {}",
            i + 1,
            code_label(&step.guess, config),
            score_pegs(step.score, peg_count),
            step.score.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Info gained: {:.3} bits ({:.1}x reduction)",
                step.information_gained(),
                step.candidates_before as f64 / step.candidates_after.max(1) as f64
            );
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Cracked in {} {}!",
            result.guesses.len(),
            if result.guesses.len() == 1 {
                "guess"
            } else {
                "guesses"
            }
        )
        .green()
        .bold()
    );
}

/// Print how a guess partitions the board
pub fn print_analysis_result(result: &AnalysisResult, config: &GameConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        code_label(&result.guess, config).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!("   Score classes:   {}", result.partitions.len());
    println!(
        "   Worst case:      {} candidates remain",
        result.largest_partition.to_string().yellow()
    );
    println!(
        "   Expected:        {:.1} candidates remain",
        result.expected_remaining
    );

    println!("\n📈 {}", "Score classes:".bright_cyan().bold());
    for (score, count) in &result.partitions {
        let bar = create_progress_bar(
            *count as f64,
            result.largest_partition as f64,
            30,
        );
        println!(
            "   {} {:>6}  {} {count:6}",
            score_pegs(*score, config.peg_count()),
            score.to_string(),
            bar.green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_games);
    if result.failed > 0 {
        println!(
            "   Unsolved:         {}",
            result.failed.to_string().red().bold()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (guess_count, count) in &result.distribution {
        let pct = (*count as f64 / result.total_games.max(1) as f64) * 100.0;
        let bar = histogram_bar(*count, max_count, 40);
        println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
