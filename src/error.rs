//! Error types for configuration, code handling and solving

use crate::core::Code;

/// Errors raised while building or validating a code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("code must have exactly {expected} pegs, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("{color} is not a valid color (expected 1..={max})")]
    InvalidColor { color: u32, max: u8 },

    #[error("unrecognized peg symbol '{0}'")]
    InvalidSymbol(char),
}

/// Errors raised when a game shape cannot be played
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("a code needs at least one peg")]
    ZeroPegs,

    #[error("a game needs at least one color")]
    ZeroColors,

    #[error("{pegs} pegs requested, at most {max} are supported")]
    TooManyPegs { pegs: usize, max: usize },

    #[error("{colors}^{pegs} codes do not fit in memory addressing")]
    UniverseOverflow { pegs: usize, colors: u8 },

    #[error("{size} codes is too many to enumerate (at most {max})")]
    UniverseTooLarge { size: usize, max: usize },
}

/// Errors raised while cracking a secret
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("invalid secret: {0}")]
    InvalidCode(#[from] CodeError),

    #[error("no candidates remaining for {secret} after {guesses} guesses")]
    Unsolvable { secret: Code, guesses: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_error_display() {
        let err = CodeError::InvalidColor { color: 7, max: 6 };
        assert_eq!(err.to_string(), "7 is not a valid color (expected 1..=6)");

        let err = CodeError::WrongLength {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "code must have exactly 4 pegs, got 3");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::UniverseOverflow {
            pegs: 40,
            colors: 200,
        };
        assert_eq!(
            err.to_string(),
            "200^40 codes do not fit in memory addressing"
        );

        let err = ConfigError::UniverseTooLarge {
            size: 1 << 30,
            max: 1 << 24,
        };
        assert_eq!(
            err.to_string(),
            "1073741824 codes is too many to enumerate (at most 16777216)"
        );
    }

    #[test]
    fn solve_error_wraps_code_error() {
        let err: SolveError = CodeError::InvalidSymbol('z').into();
        assert_eq!(err.to_string(), "invalid secret: unrecognized peg symbol 'z'");
    }
}
