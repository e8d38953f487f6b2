//! Core building blocks: deterministic RNG and round configuration.
//!
//! These are game-agnostic in the sense that nothing here knows about
//! catalogs, caches, or guesses — only sequencing primitives.

pub mod config;
pub mod rng;

pub use config::{RoundConfig, RoundMessages};
pub use rng::GameRng;
