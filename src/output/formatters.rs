//! Formatting utilities for terminal output

use crate::core::{Code, GameConfig, PALETTE, Score};

/// Format a score as key pegs: `●` black, `○` white, `·` empty
#[must_use]
pub fn score_pegs(score: Score, peg_count: usize) -> String {
    let empty = peg_count.saturating_sub(score.black + score.white);
    format!(
        "{}{}{}",
        "●".repeat(score.black),
        "○".repeat(score.white),
        "·".repeat(empty)
    )
}

/// Color letters followed by the numeric form, e.g. `RRGG (1122)`
///
/// Boards without letters get the dashed numbers alone. Falls back to the
/// numeric form if the code cannot be rendered.
#[must_use]
pub fn code_label(code: &Code, config: &GameConfig) -> String {
    match code.render(config) {
        Ok(numbers) if usize::from(config.color_count()) > PALETTE.len() => numbers,
        Ok(letters) => format!("{letters} ({code})"),
        Err(_) => code.to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        (((value / max) * width as f64) as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Histogram bar scaled to the largest bucket; non-empty buckets get at least one block
#[must_use]
pub fn histogram_bar(count: usize, max_count: usize, width: usize) -> String {
    let filled = if max_count == 0 {
        0
    } else {
        (count * width / max_count)
            .max(usize::from(count > 0))
            .min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_pegs_mixed() {
        assert_eq!(score_pegs(Score::new(1, 2), 4), "●○○·");
    }

    #[test]
    fn score_pegs_perfect() {
        assert_eq!(score_pegs(Score::perfect(4), 4), "●●●●");
    }

    #[test]
    fn score_pegs_empty() {
        assert_eq!(score_pegs(Score::new(0, 0), 3), "···");
    }

    #[test]
    fn code_label_classic() {
        let config = GameConfig::CLASSIC;
        let code = Code::new(vec![1, 1, 2, 2], &config).unwrap();
        assert_eq!(code_label(&code, &config), "RRGG (1122)");
    }

    #[test]
    fn code_label_large_board() {
        let config = GameConfig::new(3, 12).unwrap();
        let code = Code::new(vec![1, 12, 3], &config).unwrap();
        assert_eq!(code_label(&code, &config), "1-12-3");

        // Small pegs on a large board keep the dashes and no compact duplicate
        let code = Code::new(vec![1, 2, 3], &config).unwrap();
        assert_eq!(code_label(&code, &config), "1-2-3");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn histogram_bar_small_bucket_visible() {
        assert_eq!(histogram_bar(1, 1000, 10), "█░░░░░░░░░");
        assert_eq!(histogram_bar(0, 1000, 4), "░░░░");
        assert_eq!(histogram_bar(1000, 1000, 4), "████");
    }
}
