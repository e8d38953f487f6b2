//! Guess evaluation: two tries per round.
//!
//! The evaluator only decides outcomes; what happens next (disabling
//! controls, scheduling the next round) is the controller's business.

use serde::{Deserialize, Serialize};

/// Outcome of one submitted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The selected label matched the target category.
    Correct,
    /// First wrong guess; one more is allowed.
    FirstMiss,
    /// Second wrong guess; the round is over.
    Exhausted,
}

/// Tracks guesses within one round's awaiting-guess state.
///
/// ## Example
///
/// ```
/// use picture_quiz::guess::{GuessEvaluator, GuessOutcome};
///
/// let mut eval = GuessEvaluator::new();
/// assert_eq!(eval.evaluate("Wrong", "Right"), GuessOutcome::FirstMiss);
/// assert_eq!(eval.evaluate("Right", "Right"), GuessOutcome::Correct);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessEvaluator {
    guesses: u8,
}

impl GuessEvaluator {
    /// Create a fresh evaluator (zero guesses used).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset at round start.
    pub fn reset(&mut self) {
        self.guesses = 0;
    }

    /// Guesses consumed so far. Never exceeds 2.
    #[must_use]
    pub fn guesses(&self) -> u8 {
        self.guesses
    }

    /// Evaluate a selected label against the target label.
    ///
    /// Exact string match decides correctness — the catalog guarantees
    /// labels are unique, so a label identifies one category.
    pub fn evaluate(&mut self, selected: &str, target_label: &str) -> GuessOutcome {
        self.guesses = self.guesses.saturating_add(1).min(2);

        if selected == target_label {
            GuessOutcome::Correct
        } else if self.guesses == 1 {
            GuessOutcome::FirstMiss
        } else {
            GuessOutcome::Exhausted
        }
    }
}
