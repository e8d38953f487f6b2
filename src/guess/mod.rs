//! Guess evaluation: compares a selected label to the round target and
//! decides Correct / FirstMiss / Exhausted.

pub mod evaluator;

pub use evaluator::{GuessEvaluator, GuessOutcome};
