//! Opening guesses
//!
//! The first guess is fixed per board shape. Knuth's `1122` for four pegs and
//! `111223` for six are built in; other shapes fall back to ascending color
//! runs, and any shape can be overridden.

use crate::core::{Code, GameConfig};
use crate::error::CodeError;
use rustc_hash::FxHashMap;

/// Built-in openings by peg count
const PRESETS: &[(usize, &[u8])] = &[(4, &[1, 1, 2, 2]), (6, &[1, 1, 1, 2, 2, 3])];

/// Table of opening guesses keyed by `(pegs, colors)`
#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    overrides: FxHashMap<(usize, u8), Code>,
}

impl OpeningBook {
    /// An empty book: presets and the run rule only
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening for one board shape
    ///
    /// Returns the opening previously stored for that shape, if any.
    ///
    /// # Errors
    /// Returns `CodeError` if `opening` is not a legal code on `config`.
    pub fn insert(&mut self, config: &GameConfig, opening: Code) -> Result<Option<Code>, CodeError> {
        opening.validate(config)?;
        Ok(self
            .overrides
            .insert((config.peg_count(), config.color_count()), opening))
    }

    /// Opening guess for a board
    ///
    /// Lookup order: explicit entry, built-in preset (when the board has
    /// enough colors), then [`run_opening`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    /// use mastermind_solver::solver::OpeningBook;
    ///
    /// let book = OpeningBook::default();
    /// let opening = book.opening(&GameConfig::CLASSIC);
    /// assert_eq!(opening.pegs(), &[1, 1, 2, 2]);
    /// ```
    #[must_use]
    pub fn opening(&self, config: &GameConfig) -> Code {
        if let Some(code) = self
            .overrides
            .get(&(config.peg_count(), config.color_count()))
        {
            return code.clone();
        }

        PRESETS
            .iter()
            .find(|(pegs, preset)| {
                *pegs == config.peg_count()
                    && preset.iter().all(|&color| color <= config.color_count())
            })
            .map_or_else(
                || run_opening(config),
                |(_, preset)| Code::from_pegs(preset.to_vec()),
            )
    }
}

/// Ascending color runs covering the board
///
/// Uses `min(colors, ceil(pegs / 2))` distinct colors, each repeated
/// `ceil(pegs / distinct)` times, the last run cut short to fit.
#[must_use]
pub fn run_opening(config: &GameConfig) -> Code {
    let pegs = config.peg_count();
    let distinct = usize::from(config.color_count()).min(pegs.div_ceil(2));
    let run = pegs.div_ceil(distinct);

    Code::from_pegs((0..pegs).map(|i| (i / run) as u8 + 1).collect())
}
