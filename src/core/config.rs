//! Game shape: how many pegs a code has and how many colors each peg can take

use crate::error::ConfigError;

/// Validated `(pegs, colors)` pair
///
/// Built once and passed explicitly to the enumerator, scorer and solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    peg_count: usize,
    color_count: u8,
    universe_size: usize,
}

impl GameConfig {
    /// Largest supported peg count (consumed pegs are tracked in a `u64` mask)
    pub const MAX_PEGS: usize = 64;

    /// Largest board the solver will enumerate (8 pegs of 8 colors)
    pub const MAX_UNIVERSE: usize = 1 << 24;

    /// Pressman's classic board: 4 pegs, 6 colors
    pub const CLASSIC: Self = Self {
        peg_count: 4,
        color_count: 6,
        universe_size: 1296,
    };

    /// Create a new game shape
    ///
    /// # Errors
    /// Returns `ConfigError` if either count is zero, the peg count exceeds
    /// [`GameConfig::MAX_PEGS`], `colors^pegs` overflows `usize`, or the board
    /// holds more than [`GameConfig::MAX_UNIVERSE`] codes.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    ///
    /// let config = GameConfig::new(4, 6).unwrap();
    /// assert_eq!(config.universe_size(), 1296);
    ///
    /// assert!(GameConfig::new(0, 6).is_err());
    /// ```
    pub fn new(peg_count: usize, color_count: u8) -> Result<Self, ConfigError> {
        if peg_count == 0 {
            return Err(ConfigError::ZeroPegs);
        }
        if color_count == 0 {
            return Err(ConfigError::ZeroColors);
        }
        if peg_count > Self::MAX_PEGS {
            return Err(ConfigError::TooManyPegs {
                pegs: peg_count,
                max: Self::MAX_PEGS,
            });
        }

        let universe_size = usize::from(color_count)
            .checked_pow(peg_count as u32)
            .ok_or(ConfigError::UniverseOverflow {
                pegs: peg_count,
                colors: color_count,
            })?;
        if universe_size > Self::MAX_UNIVERSE {
            return Err(ConfigError::UniverseTooLarge {
                size: universe_size,
                max: Self::MAX_UNIVERSE,
            });
        }

        Ok(Self {
            peg_count,
            color_count,
            universe_size,
        })
    }

    /// Pegs per code
    #[inline]
    #[must_use]
    pub const fn peg_count(&self) -> usize {
        self.peg_count
    }

    /// Highest legal peg value (colors are `1..=color_count`)
    #[inline]
    #[must_use]
    pub const fn color_count(&self) -> u8 {
        self.color_count
    }

    /// Number of distinct codes, `colors^pegs`
    #[inline]
    #[must_use]
    pub const fn universe_size(&self) -> usize {
        self.universe_size
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}
