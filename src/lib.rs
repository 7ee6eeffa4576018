//! Mastermind Solver
//!
//! Benchmarks Knuth's "baby" code breaker: open with a fixed guess, keep every
//! code consistent with the scores seen so far, and guess the first one left.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, GameConfig, Score};
//! use mastermind_solver::solver::Solver;
//!
//! let config = GameConfig::new(4, 6).unwrap();
//! let solver = Solver::new(config);
//!
//! let secret = Code::parse("GGRR", &config).unwrap();
//! let guesses = solver.crack(&secret).unwrap();
//! assert!(guesses > 1);
//!
//! let score = Score::calculate(&secret, solver.opening());
//! assert_eq!(score, Score::new(0, 4));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
