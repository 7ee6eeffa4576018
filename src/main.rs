//! Mastermind Solver - CLI
//!
//! Runs the baby Knuth code breaker against every secret on a board and
//! reports worst case, average and standard deviation of guesses.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        BenchmarkConfig, TestAllOptions, analyze_guess, print_test_all_statistics, run_benchmark,
        run_test_all, solve_code,
    },
    core::{Code, GameConfig},
    output::{
        formatters::code_label, print_analysis_result, print_benchmark_result, print_solve_result,
    },
    solver::Solver,
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind code breaker benchmarking Knuth's consistent-candidate strategy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pegs per code
    #[arg(short, long, global = true, default_value_t = 4)]
    pegs: usize,

    /// Number of peg colors (colors^pegs may not exceed 2^24 codes)
    #[arg(short, long, global = true, default_value_t = 6)]
    colors: u8,

    /// Override the opening guess (letters like RRGG or digits like 1122)
    #[arg(short, long, global = true)]
    opening: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Crack every possible secret and report statistics (default)
    Run {
        /// Only test the first N secrets
        #[arg(short, long)]
        limit: Option<usize>,

        /// Crack secrets one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,
    },

    /// Crack a specific secret and show each guess
    Solve {
        /// The secret code
        code: String,

        /// Show candidate counts and information gained per guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Crack a random sample of secrets and measure throughput
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show how a guess partitions the board (defaults to the opening)
    Analyze {
        /// Guess to analyze
        code: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.pegs, cli.colors).context("invalid board")?;
    let solver = build_solver(config, cli.opening.as_deref())?;

    // Default to the full tournament if no command given
    let command = cli.command.unwrap_or(Commands::Run {
        limit: None,
        sequential: false,
    });

    match command {
        Commands::Run { limit, sequential } => {
            run_test_all_command(&solver, limit, sequential);
            Ok(())
        }
        Commands::Solve { code, verbose } => run_solve_command(&solver, &code, verbose),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&solver, count, seed);
            Ok(())
        }
        Commands::Analyze { code } => run_analyze_command(&solver, code.as_deref()),
    }
}

fn build_solver(config: GameConfig, opening: Option<&str>) -> Result<Solver> {
    match opening {
        Some(text) => {
            let opening = Code::parse(text, &config)
                .with_context(|| format!("invalid opening guess '{text}'"))?;
            Ok(Solver::with_opening(config, opening)?)
        }
        None => Ok(Solver::new(config)),
    }
}

fn run_test_all_command(solver: &Solver, limit: Option<usize>, sequential: bool) {
    let config = solver.config();

    println!("\n{}", "═".repeat(70));
    println!(" Mastermind: baby Knuth against every code ");
    println!("{}", "═".repeat(70));
    println!(
        "\nPlaying all codes in a {}-color, {}-peg game",
        config.color_count(),
        config.peg_count()
    );
    println!("Opening guess: {}", code_label(solver.opening(), config));
    println!();

    let options = TestAllOptions {
        limit,
        parallel: !sequential,
        ..TestAllOptions::default()
    };
    let stats = run_test_all(solver, options);
    print_test_all_statistics(&stats);
}

fn run_solve_command(solver: &Solver, code: &str, verbose: bool) -> Result<()> {
    let result = solve_code(code, solver).with_context(|| format!("cannot crack '{code}'"))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(solver: &Solver, count: usize, seed: Option<u64>) {
    match seed {
        Some(seed) => println!("Running benchmark on {count} random codes (seed {seed})..."),
        None => println!("Running benchmark on {count} random codes..."),
    }

    let result = run_benchmark(solver, &BenchmarkConfig { count, seed });
    print_benchmark_result(&result);
}

fn run_analyze_command(solver: &Solver, code: Option<&str>) -> Result<()> {
    let result = analyze_guess(code, solver).context("cannot analyze guess")?;
    print_analysis_result(&result, solver.config());
    Ok(())
}
