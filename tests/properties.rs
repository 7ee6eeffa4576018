//! Property-based tests for scoring and solving.

use proptest::prelude::*;

use mastermind_solver::core::{Code, GameConfig, Score};
use mastermind_solver::solver::Solver;
use std::sync::LazyLock;

static CLASSIC: LazyLock<Solver> = LazyLock::new(|| Solver::new(GameConfig::CLASSIC));

/// Strategy: a legal code on the classic board (4 pegs, colors 1-6).
fn code_strategy() -> impl Strategy<Value = Code> {
    prop::collection::vec(1..=6u8, 4)
        .prop_map(|pegs| Code::new(pegs, &GameConfig::CLASSIC).unwrap())
}

proptest! {
    // 1. Black + white never exceeds the peg count
    #[test]
    fn score_bounded(a in code_strategy(), b in code_strategy()) {
        let score = Score::calculate(&a, &b);
        prop_assert!(score.black + score.white <= 4, "{a} vs {b}: {score}");
    }

    // 2. A code scored against itself is all black
    #[test]
    fn score_identity(a in code_strategy()) {
        prop_assert_eq!(Score::calculate(&a, &a), Score::perfect(4));
    }

    // 3. Swapping secret and guess keeps both totals
    #[test]
    fn score_symmetric(a in code_strategy(), b in code_strategy()) {
        prop_assert_eq!(Score::calculate(&a, &b), Score::calculate(&b, &a));
    }

    // 4. Scoring is deterministic and leaves the codes intact
    #[test]
    fn score_pure(a in code_strategy(), b in code_strategy()) {
        let (a0, b0) = (a.clone(), b.clone());
        let first = Score::calculate(&a, &b);
        let second = Score::calculate(&a, &b);
        prop_assert_eq!(first, second);
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
    }

    // 5. Black count never exceeds the positions that agree
    #[test]
    fn black_counts_positions(a in code_strategy(), b in code_strategy()) {
        let agreeing = a.pegs().iter().zip(b.pegs()).filter(|(x, y)| x == y).count();
        prop_assert_eq!(Score::calculate(&a, &b).black, agreeing);
    }

    // 6. Every secret is cracked, and the last guess is the secret
    #[test]
    fn solver_cracks_secret(secret in code_strategy()) {
        let game = CLASSIC.play(&secret).unwrap();
        prop_assert!(game.guess_count() >= 1);
        prop_assert!(game.guess_count() <= 8);
        prop_assert_eq!(game.final_guess(), Some(&secret));
        prop_assert_eq!(CLASSIC.crack(&secret).unwrap(), game.guess_count());
    }

    // 7. Out-of-range colors never reach the scorer
    #[test]
    fn invalid_colors_rejected(pegs in prop::collection::vec(0..=12u8, 4)) {
        let legal = pegs.iter().all(|p| (1..=6).contains(p));
        prop_assert_eq!(Code::new(pegs, &GameConfig::CLASSIC).is_ok(), legal);
    }
}
