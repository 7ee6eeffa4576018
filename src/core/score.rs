//! Mastermind scoring
//!
//! A score counts black pegs (right color, right position) and white pegs
//! (right color, wrong position). Every peg of either code is consumed at
//! most once, so duplicates never count twice.

use super::{Code, GameConfig};
use crate::error::CodeError;
use std::fmt;

/// Black and white peg counts for one guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(black: usize, white: usize) -> Self {
        Self { black, white }
    }

    /// All pegs black: the guess is the secret
    #[inline]
    #[must_use]
    pub const fn perfect(peg_count: usize) -> Self {
        Self::new(peg_count, 0)
    }

    /// Check if every one of `peg_count` pegs scored black
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, peg_count: usize) -> bool {
        self.black == peg_count
    }

    /// Score `guess` against `secret`
    ///
    /// Neither code is modified; consumed pegs are tracked in position masks.
    ///
    /// # Algorithm
    /// 1. Black pass: each position where both codes agree scores black and
    ///    consumes both pegs
    /// 2. White pass: for each unconsumed secret peg, the first unconsumed
    ///    guess peg of the same color (lowest position) scores white and both
    ///    pegs are consumed
    ///
    /// # Panics
    /// Panics in debug mode if the codes differ in length or exceed 64 pegs
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig, Score};
    ///
    /// let config = GameConfig::CLASSIC;
    /// let secret = Code::new(vec![2, 2, 1, 1], &config).unwrap();
    /// let guess = Code::new(vec![1, 1, 2, 2], &config).unwrap();
    ///
    /// assert_eq!(Score::calculate(&secret, &guess), Score::new(0, 4));
    /// ```
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Code) -> Self {
        let secret = secret.pegs();
        let guess = guess.pegs();
        debug_assert_eq!(secret.len(), guess.len(), "codes must have equal length");
        debug_assert!(secret.len() <= GameConfig::MAX_PEGS);

        let mut secret_used = 0u64;
        let mut guess_used = 0u64;
        let mut black = 0;
        let mut white = 0;

        // First pass: blacks
        for (i, (s, g)) in secret.iter().zip(guess).enumerate() {
            if s == g {
                black += 1;
                secret_used |= 1u64 << i;
                guess_used |= 1u64 << i;
            }
        }

        // Second pass: whites from whatever is left
        for (i, &s) in secret.iter().enumerate() {
            if secret_used & (1u64 << i) != 0 {
                continue;
            }
            let matched = guess
                .iter()
                .enumerate()
                .find(|&(j, &g)| guess_used & (1u64 << j) == 0 && g == s)
                .map(|(j, _)| j);
            if let Some(j) = matched {
                white += 1;
                secret_used |= 1u64 << i;
                guess_used |= 1u64 << j;
            }
        }

        Self { black, white }
    }

    /// Score two codes after checking both against the board
    ///
    /// # Errors
    /// Returns `CodeError` if either code has the wrong length or a color
    /// outside `1..=color_count`.
    pub fn checked(config: &GameConfig, secret: &Code, guess: &Code) -> Result<Self, CodeError> {
        secret.validate(config)?;
        guess.validate(config)?;
        Ok(Self::calculate(secret, guess))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B {}W", self.black, self.white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enumerate_all_codes;

    fn code(pegs: &[u8]) -> Code {
        Code::from_pegs(pegs.to_vec())
    }

    #[test]
    fn score_no_match() {
        let score = Score::calculate(&code(&[1, 1, 2, 2]), &code(&[3, 3, 4, 4]));
        assert_eq!(score, Score::new(0, 0));
    }

    #[test]
    fn score_identical_is_perfect() {
        let c = code(&[1, 2, 3, 4]);
        let score = Score::calculate(&c, &c);
        assert_eq!(score, Score::perfect(4));
        assert!(score.is_perfect(4));
    }

    #[test]
    fn score_reversed_pairs_all_white() {
        let score = Score::calculate(&code(&[2, 2, 1, 1]), &code(&[1, 1, 2, 2]));
        assert_eq!(score, Score::new(0, 4));
        assert!(!score.is_perfect(4));
    }

    #[test]
    fn score_black_takes_priority_over_white() {
        // The shared 1 in position 0 is black; the guess's second 1 finds nothing left
        let score = Score::calculate(&code(&[1, 2, 3, 4]), &code(&[1, 1, 5, 5]));
        assert_eq!(score, Score::new(1, 0));
    }

    #[test]
    fn score_duplicates_in_guess_count_once() {
        let score = Score::calculate(&code(&[1, 2, 3, 4]), &code(&[5, 1, 1, 1]));
        assert_eq!(score, Score::new(0, 1));
    }

    #[test]
    fn score_duplicates_in_secret_count_once() {
        let score = Score::calculate(&code(&[1, 1, 1, 2]), &code(&[3, 3, 2, 1]));
        assert_eq!(score, Score::new(0, 2));
    }

    #[test]
    fn score_mixed() {
        // 1 black (the 6 at position 3), whites for 1 and 2
        let score = Score::calculate(&code(&[1, 2, 3, 6]), &code(&[2, 1, 4, 6]));
        assert_eq!(score, Score::new(1, 2));
    }

    #[test]
    fn score_does_not_modify_codes() {
        let secret = code(&[1, 1, 2, 2]);
        let guess = code(&[2, 1, 1, 3]);
        let _ = Score::calculate(&secret, &guess);
        assert_eq!(secret.pegs(), &[1, 1, 2, 2]);
        assert_eq!(guess.pegs(), &[2, 1, 1, 3]);
    }

    #[test]
    fn score_totals_symmetric_and_bounded() {
        let config = GameConfig::new(3, 4).unwrap();
        let codes: Vec<Code> = enumerate_all_codes(&config).collect();

        for a in &codes {
            for b in &codes {
                let ab = Score::calculate(a, b);
                let ba = Score::calculate(b, a);
                assert_eq!(ab, ba, "{a} vs {b}");
                assert!(ab.black + ab.white <= 3);
            }
        }
    }

    #[test]
    fn checked_rejects_invalid_codes() {
        let config = GameConfig::CLASSIC;
        let good = code(&[1, 1, 2, 2]);
        let bad = code(&[1, 1, 2, 7]);
        let short = code(&[1, 1, 2]);

        assert_eq!(
            Score::checked(&config, &good, &bad),
            Err(CodeError::InvalidColor { color: 7, max: 6 })
        );
        assert!(matches!(
            Score::checked(&config, &short, &good),
            Err(CodeError::WrongLength { .. })
        ));
        assert_eq!(Score::checked(&config, &good, &good), Ok(Score::perfect(4)));
    }

    #[test]
    fn score_display() {
        assert_eq!(Score::new(2, 1).to_string(), "2B 1W");
    }
}
