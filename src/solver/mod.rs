//! Mastermind solving
//!
//! The baby Knuth engine and the opening book it starts from.

mod engine;
mod opening;

pub use engine::{Game, Solver, Turn};
pub use opening::{OpeningBook, run_opening};
