//! Round phase and step-result vocabulary.
//!
//! The controller is a stepped state machine. Every input (start, dwell tick,
//! guess) returns a [`StepResult`] telling the host event loop what to do
//! next; there are no timers inside the engine.

use std::time::Duration;

use crate::error::RoundError;

/// How a resolved round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The player named the target category.
    Correct,
    /// Two misses; the round ended without a correct guess.
    Exhausted,
}

/// The phases of one round.
///
/// `Idle → Sweeping → Sampling → AwaitingGuess → Resolved → Idle` (restart),
/// with an abort edge back to `Idle` from the animating phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No round active.
    Idle,
    /// Deterministic once-through of every catalog asset. `next` indexes the
    /// next sweep position to present.
    Sweeping { next: usize },
    /// Fixed-count randomized presentation from the per-round shuffle.
    Sampling { step: usize },
    /// Target shown; waiting on guesses.
    AwaitingGuess,
    /// Round over; next round pending on the host's auto-advance timer.
    Resolved(Resolution),
}

impl Phase {
    /// True during the committed timed phases (sweep and sample).
    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self, Phase::Sweeping { .. } | Phase::Sampling { .. })
    }
}

/// What the host event loop should do after feeding the controller.
///
/// The host keeps at most one outstanding timer: each `Dwell` or `NextRound`
/// replaces whatever timer was pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// A dwell is running; call `tick` after this delay.
    Dwell(Duration),
    /// The target is shown; feed guesses.
    AwaitingGuess,
    /// First miss; still awaiting a second guess.
    GuessAgain,
    /// Round resolved; request a start after this delay to auto-advance.
    NextRound(Duration),
    /// Input was ignored (re-entrancy guard, or nothing to do).
    Ignored,
    /// Round aborted to idle; the start control has been re-offered.
    Aborted(RoundError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animating_phases() {
        assert!(Phase::Sweeping { next: 0 }.is_animating());
        assert!(Phase::Sampling { step: 3 }.is_animating());
        assert!(!Phase::Idle.is_animating());
        assert!(!Phase::AwaitingGuess.is_animating());
        assert!(!Phase::Resolved(Resolution::Correct).is_animating());
    }
}
