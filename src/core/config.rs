//! Round timing configuration and user-facing message strings.
//!
//! The reference pacing:
//!
//! - Sweep dwell: 150ms per asset
//! - Sample dwell: 100ms per step, 15 steps
//! - Auto-advance: 3000ms after a correct guess, 2000ms after a second miss
//!
//! Hosts tune these via the builder; tests shrink the dwells to zero.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing and messaging for one round controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// How long each asset stays visible during the sweep phase.
    pub sweep_dwell: Duration,

    /// How long each asset stays visible during the sample phase.
    pub sample_dwell: Duration,

    /// Number of randomized sample steps after the sweep.
    pub sample_steps: usize,

    /// Delay before the next round auto-starts after a correct guess.
    pub correct_advance: Duration,

    /// Delay before the next round auto-starts after a second miss.
    pub miss_advance: Duration,

    /// Messages emitted to the presentation sink.
    pub messages: RoundMessages,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            sweep_dwell: Duration::from_millis(150),
            sample_dwell: Duration::from_millis(100),
            sample_steps: 15,
            correct_advance: Duration::from_millis(3000),
            miss_advance: Duration::from_millis(2000),
            messages: RoundMessages::default(),
        }
    }
}

impl RoundConfig {
    /// Create a configuration with the reference pacing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sweep dwell time.
    #[must_use]
    pub fn with_sweep_dwell(mut self, dwell: Duration) -> Self {
        self.sweep_dwell = dwell;
        self
    }

    /// Set the sample dwell time.
    #[must_use]
    pub fn with_sample_dwell(mut self, dwell: Duration) -> Self {
        self.sample_dwell = dwell;
        self
    }

    /// Set the number of sample steps.
    #[must_use]
    pub fn with_sample_steps(mut self, steps: usize) -> Self {
        self.sample_steps = steps;
        self
    }

    /// Set the auto-advance delays (correct, second miss).
    #[must_use]
    pub fn with_advance_delays(mut self, correct: Duration, miss: Duration) -> Self {
        self.correct_advance = correct;
        self.miss_advance = miss;
        self
    }

    /// Replace the message strings.
    #[must_use]
    pub fn with_messages(mut self, messages: RoundMessages) -> Self {
        self.messages = messages;
        self
    }
}

/// User-facing strings the controller sends to the presentation sink.
///
/// The sink receives these verbatim; localize by replacing the struct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundMessages {
    /// Shown while the slideshow is rolling.
    pub rolling: String,
    /// Shown on a correct guess.
    pub correct: String,
    /// Shown after the first wrong guess.
    pub first_miss: String,
    /// Shown after the second wrong guess.
    pub exhausted: String,
    /// Shown when a round aborts because nothing was presentable.
    pub load_error: String,
    /// Start-control label offered after a resolved round.
    pub next_label: String,
    /// Start-control label offered after an aborted round.
    pub retry_label: String,
}

impl Default for RoundMessages {
    fn default() -> Self {
        Self {
            rolling: "Rolling the pictures...".to_string(),
            correct: "That's right, well done!".to_string(),
            first_miss: "Not quite, try again!".to_string(),
            exhausted: "Wrong again, better luck next round!".to_string(),
            load_error: "Some pictures failed to load, please retry".to_string(),
            next_label: "Next round".to_string(),
            retry_label: "Try again".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_pacing() {
        let config = RoundConfig::default();
        assert_eq!(config.sweep_dwell, Duration::from_millis(150));
        assert_eq!(config.sample_dwell, Duration::from_millis(100));
        assert_eq!(config.sample_steps, 15);
        assert_eq!(config.correct_advance, Duration::from_millis(3000));
        assert_eq!(config.miss_advance, Duration::from_millis(2000));
    }

    #[test]
    fn test_builder() {
        let config = RoundConfig::new()
            .with_sweep_dwell(Duration::ZERO)
            .with_sample_dwell(Duration::ZERO)
            .with_sample_steps(3)
            .with_advance_delays(Duration::from_secs(1), Duration::from_secs(1));

        assert_eq!(config.sweep_dwell, Duration::ZERO);
        assert_eq!(config.sample_steps, 3);
        assert_eq!(config.correct_advance, Duration::from_secs(1));
        assert_eq!(config.miss_advance, Duration::from_secs(1));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = RoundConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
