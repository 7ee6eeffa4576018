//! Baby Knuth code breaker
//!
//! Plays a fixed opening, keeps every code that would have produced the
//! observed score, and keeps guessing the first survivor until a guess
//! scores all black.

use super::opening::OpeningBook;
use crate::core::{Code, GameConfig, Score, enumerate_all_codes};
use crate::error::{CodeError, SolveError};

/// One guess of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Borrowed view of a turn, turned into an owned [`Turn`] only when recorded
struct Step<'a> {
    guess: &'a Code,
    score: Score,
    candidates_before: usize,
    candidates_after: usize,
}

impl Step<'_> {
    fn to_turn(&self) -> Turn {
        Turn {
            guess: self.guess.clone(),
            score: self.score,
            candidates_before: self.candidates_before,
            candidates_after: self.candidates_after,
        }
    }
}

/// Full record of cracking one secret
#[derive(Debug, Clone)]
pub struct Game {
    pub secret: Code,
    pub turns: Vec<Turn>,
}

impl Game {
    /// Number of guesses used, the opening included
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.turns.len()
    }

    /// The guess that scored all black
    #[must_use]
    pub fn final_guess(&self) -> Option<&Code> {
        self.turns.last().map(|turn| &turn.guess)
    }
}

/// Main Mastermind solver
///
/// Holds the board, the opening guess and every code on the board. The
/// universe is read-only, so one solver can crack many secrets in parallel.
pub struct Solver {
    config: GameConfig,
    opening: Code,
    universe: Vec<Code>,
}

impl Solver {
    /// Create a solver using the default opening book
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_book(config, &OpeningBook::default())
    }

    /// Create a solver taking its opening from `book`
    #[must_use]
    pub fn with_book(config: GameConfig, book: &OpeningBook) -> Self {
        Self {
            opening: book.opening(&config),
            universe: enumerate_all_codes(&config).collect(),
            config,
        }
    }

    /// Create a solver with an explicit opening guess
    ///
    /// # Errors
    /// Returns `CodeError` if `opening` is not a legal code on `config`.
    pub fn with_opening(config: GameConfig, opening: Code) -> Result<Self, CodeError> {
        opening.validate(&config)?;
        Ok(Self {
            opening,
            universe: enumerate_all_codes(&config).collect(),
            config,
        })
    }

    /// Board this solver plays on
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// First guess of every game
    #[must_use]
    pub const fn opening(&self) -> &Code {
        &self.opening
    }

    /// Every code on the board, in odometer order
    #[must_use]
    pub fn universe(&self) -> &[Code] {
        &self.universe
    }

    /// Crack `secret` and return the number of guesses used
    ///
    /// # Errors
    /// - `SolveError::InvalidCode` if `secret` is not a legal code
    /// - `SolveError::Unsolvable` if no candidate survives a guess
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig};
    /// use mastermind_solver::solver::Solver;
    ///
    /// let solver = Solver::new(GameConfig::CLASSIC);
    /// let secret = Code::parse("RRGG", solver.config()).unwrap();
    /// assert_eq!(solver.crack(&secret).unwrap(), 1);
    /// ```
    pub fn crack(&self, secret: &Code) -> Result<usize, SolveError> {
        self.run(secret, |_| {})
    }

    /// Crack `secret`, recording every guess, its score and the pool sizes
    ///
    /// # Errors
    /// Same as [`Solver::crack`].
    pub fn play(&self, secret: &Code) -> Result<Game, SolveError> {
        let mut turns = Vec::new();
        self.run(secret, |step| turns.push(step.to_turn()))?;
        Ok(Game {
            secret: secret.clone(),
            turns,
        })
    }

    fn run(&self, secret: &Code, mut on_step: impl FnMut(Step<'_>)) -> Result<usize, SolveError> {
        secret.validate(&self.config)?;
        let peg_count = self.config.peg_count();

        let mut target = Score::calculate(secret, &self.opening);
        let mut guesses = 1;

        // Codes that, as the secret, would have scored the opening the same way
        let mut pool: Vec<&Code> = self
            .universe
            .iter()
            .filter(|&candidate| Score::calculate(candidate, &self.opening) == target)
            .collect();

        on_step(Step {
            guess: &self.opening,
            score: target,
            candidates_before: self.universe.len(),
            candidates_after: pool.len(),
        });

        while !target.is_perfect(peg_count) {
            let Some(&guess) = pool.first() else {
                return Err(SolveError::Unsolvable {
                    secret: secret.clone(),
                    guesses,
                });
            };

            target = Score::calculate(secret, guess);
            guesses += 1;

            let candidates_before = pool.len();
            pool = pool
                .into_iter()
                .filter(|&candidate| Score::calculate(candidate, guess) == target)
                .collect();

            on_step(Step {
                guess,
                score: target,
                candidates_before,
                candidates_after: pool.len(),
            });

            if pool.is_empty() {
                return Err(SolveError::Unsolvable {
                    secret: secret.clone(),
                    guesses,
                });
            }
        }

        Ok(guesses)
    }
}
