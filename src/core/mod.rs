//! Core domain types for Mastermind
//!
//! Board configuration, codes, odometer enumeration and scoring. Everything
//! here is pure and deterministic.

mod code;
mod config;
mod enumerate;
mod score;

pub use code::{Code, PALETTE, color_symbol};
pub use config::GameConfig;
pub use enumerate::{CodeEnumerator, enumerate_all_codes, is_max_code, next_code};
pub use score::Score;
