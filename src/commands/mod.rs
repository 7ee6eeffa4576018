//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use solve::{GuessStep, SolveResult, solve_code};
pub use test_all::{
    GameOutcome, TestAllOptions, TestAllStatistics, print_test_all_statistics, run_test_all,
};
