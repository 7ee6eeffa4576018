//! Code solving command
//!
//! Cracks one secret and returns the solution path.

use crate::core::{Code, GameConfig, Score};
use crate::error::SolveError;
use crate::solver::Solver;

/// Result of cracking one secret
pub struct SolveResult {
    pub config: GameConfig,
    pub secret: Code,
    pub guesses: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

impl GuessStep {
    /// Bits of information the score revealed, `log2(before / after)`
    #[must_use]
    pub fn information_gained(&self) -> f64 {
        if self.candidates_after == 0 {
            return 0.0;
        }
        (self.candidates_before as f64 / self.candidates_after as f64).log2()
    }
}

/// Crack the secret written as `secret` (letters, digits or separated numbers)
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not parse as a code on the solver's board
/// - The candidate pool empties before the secret is found
pub fn solve_code(secret: &str, solver: &Solver) -> Result<SolveResult, SolveError> {
    let config = *solver.config();
    let secret = Code::parse(secret, &config)?;
    let game = solver.play(&secret)?;

    let guesses = game
        .turns
        .into_iter()
        .map(|turn| GuessStep {
            guess: turn.guess,
            score: turn.score,
            candidates_before: turn.candidates_before,
            candidates_after: turn.candidates_after,
        })
        .collect();

    Ok(SolveResult {
        config,
        secret,
        guesses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodeError;

    #[test]
    fn solve_opening_secret() {
        let solver = Solver::new(GameConfig::CLASSIC);
        let result = solve_code("RRGG", &solver).unwrap();

        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].guess, result.secret);
        assert_eq!(result.guesses[0].candidates_after, 1);
    }

    #[test]
    fn solve_records_history() {
        let solver = Solver::new(GameConfig::CLASSIC);
        let result = solve_code("BYWK", &solver).unwrap();

        assert!(result.guesses.len() > 1);
        assert_eq!(result.guesses.last().unwrap().guess, result.secret);
        assert!(
            result
                .guesses
                .last()
                .unwrap()
                .score
                .is_perfect(result.config.peg_count())
        );

        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.information_gained() >= 0.0);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let solver = Solver::new(GameConfig::CLASSIC);

        assert!(matches!(
            solve_code("RRG", &solver),
            Err(SolveError::InvalidCode(CodeError::WrongLength { .. }))
        ));
        assert!(matches!(
            solve_code("1127", &solver),
            Err(SolveError::InvalidCode(CodeError::InvalidColor { color: 7, .. }))
        ));
    }

    #[test]
    fn information_gained_for_opening() {
        let step = GuessStep {
            guess: Code::new(vec![1, 1, 2, 2], &GameConfig::CLASSIC).unwrap(),
            score: Score::new(0, 0),
            candidates_before: 1296,
            candidates_after: 256,
        };
        let expected = (1296.0_f64 / 256.0).log2();
        assert!((step.information_gained() - expected).abs() < 1e-12);
    }
}
