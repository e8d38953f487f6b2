//! Round orchestration: the phase state machine and its controller.
//!
//! `Idle → Sweeping → Sampling → AwaitingGuess → Resolved → Idle`, driven by
//! a host event loop that honors the [`StepResult`] each input returns.

pub mod controller;
pub mod phase;

pub use controller::{RoundController, Target};
pub use phase::{Phase, Resolution, StepResult};
