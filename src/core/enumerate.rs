//! Odometer enumeration of every code on a board
//!
//! Codes are ordered like a mechanical odometer: the last peg cycles fastest
//! through `1..=color_count` and carries into the peg before it. The all-max
//! code rolls over to the all-ones code, so enumeration seeds at all-max and
//! steps once before yielding anything.

use super::{Code, GameConfig};
use std::iter::FusedIterator;

/// Advance `pegs` to the next code in odometer order
///
/// `1266 -> 1311` and `6666 -> 1111` on a 6-color board.
pub fn next_code(pegs: &mut [u8], color_count: u8) {
    for peg in pegs.iter_mut().rev() {
        if *peg < color_count {
            *peg += 1;
            return;
        }
        *peg = 1;
    }
}

/// True iff every peg holds the highest color (the last code enumerated)
#[must_use]
pub fn is_max_code(code: &Code, color_count: u8) -> bool {
    code.pegs().iter().all(|&peg| peg == color_count)
}

/// Iterator over all `colors^pegs` codes in odometer order
///
/// Starts at all-ones and ends after yielding the all-max code.
#[derive(Debug, Clone)]
pub struct CodeEnumerator {
    current: Code,
    color_count: u8,
    remaining: usize,
    finished: bool,
}

impl CodeEnumerator {
    /// Create a fresh enumeration for a board
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            current: Code::filled(config.color_count(), config.peg_count()),
            color_count: config.color_count(),
            remaining: config.universe_size(),
            finished: false,
        }
    }
}

impl Iterator for CodeEnumerator {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        if self.finished {
            return None;
        }

        next_code(self.current.pegs_mut(), self.color_count);
        self.remaining = self.remaining.saturating_sub(1);
        self.finished = is_max_code(&self.current, self.color_count);

        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished { 0 } else { self.remaining };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CodeEnumerator {}

impl FusedIterator for CodeEnumerator {}

/// Enumerate every code of a board
///
/// # Examples
/// ```
/// use mastermind_solver::core::{GameConfig, enumerate_all_codes};
///
/// let config = GameConfig::new(2, 3).unwrap();
/// let codes: Vec<String> = enumerate_all_codes(&config).map(|c| c.to_string()).collect();
/// assert_eq!(codes, ["11", "12", "13", "21", "22", "23", "31", "32", "33"]);
/// ```
#[must_use]
pub fn enumerate_all_codes(config: &GameConfig) -> CodeEnumerator {
    CodeEnumerator::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn next_code_increments_last_peg() {
        let mut pegs = [1, 1, 1, 1];
        next_code(&mut pegs, 6);
        assert_eq!(pegs, [1, 1, 1, 2]);
    }

    #[test]
    fn next_code_carries() {
        let mut pegs = [1, 2, 6, 6];
        next_code(&mut pegs, 6);
        assert_eq!(pegs, [1, 3, 1, 1]);
    }

    #[test]
    fn next_code_wraps_max_to_ones() {
        let mut pegs = [6, 6, 6, 6];
        next_code(&mut pegs, 6);
        assert_eq!(pegs, [1, 1, 1, 1]);
    }

    #[test]
    fn single_color_board_has_one_code() {
        let config = GameConfig::new(3, 1).unwrap();
        let codes: Vec<Code> = enumerate_all_codes(&config).collect();
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[0].pegs(), &[1, 1, 1]);
    }

    #[test]
    fn is_max_code_detects_terminal() {
        let config = GameConfig::CLASSIC;
        let max = Code::new(vec![6, 6, 6, 6], &config).unwrap();
        let almost = Code::new(vec![6, 6, 5, 6], &config).unwrap();
        assert!(is_max_code(&max, 6));
        assert!(!is_max_code(&almost, 6));
    }

    #[test]
    fn enumeration_is_complete_and_unique() {
        for (pegs, colors) in [(1, 1), (1, 6), (2, 3), (3, 4), (4, 6), (5, 2)] {
            let config = GameConfig::new(pegs, colors).unwrap();
            let codes: Vec<Code> = enumerate_all_codes(&config).collect();

            assert_eq!(codes.len(), config.universe_size(), "{pegs} pegs, {colors} colors");

            let unique: FxHashSet<&Code> = codes.iter().collect();
            assert_eq!(unique.len(), codes.len());

            for code in &codes {
                assert_eq!(code.len(), pegs);
                assert!(code.pegs().iter().all(|&p| (1..=colors).contains(&p)));
            }
        }
    }

    #[test]
    fn enumeration_starts_at_ones_and_ends_at_max() {
        let config = GameConfig::CLASSIC;
        let codes: Vec<Code> = enumerate_all_codes(&config).collect();

        assert_eq!(codes.first().unwrap().pegs(), &[1, 1, 1, 1]);
        assert_eq!(codes.last().unwrap().pegs(), &[6, 6, 6, 6]);
        assert_eq!(codes.iter().filter(|c| is_max_code(c, 6)).count(), 1);
    }

    #[test]
    fn enumeration_is_deterministic() {
        let config = GameConfig::new(3, 5).unwrap();
        let first: Vec<Code> = enumerate_all_codes(&config).collect();
        let second: Vec<Code> = enumerate_all_codes(&config).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn enumeration_reports_exact_size() {
        let config = GameConfig::new(2, 3).unwrap();
        let mut codes = enumerate_all_codes(&config);
        assert_eq!(codes.len(), 9);

        codes.next();
        assert_eq!(codes.len(), 8);

        let rest: Vec<Code> = codes.by_ref().collect();
        assert_eq!(rest.len(), 8);
        assert_eq!(codes.len(), 0);
        assert!(codes.next().is_none());
    }
}
