//! # picture-quiz
//!
//! Round engine for a picture-guessing game: a slideshow cycles through a
//! deck of images, settles on one, and the player names its category from
//! multiple-choice options.
//!
//! ## Design Principles
//!
//! 1. **Display-Agnostic**: The engine never touches a screen. It emits
//!    commands through the `PresentationSink` trait; hosts render them.
//!
//! 2. **Host-Driven Time**: No timers inside the engine. Every input returns
//!    a `StepResult` telling the host when to call back, so rounds are fully
//!    steppable in tests.
//!
//! 3. **Fail Soft**: A missing asset is skipped, a partial preload is a
//!    warning, and only a fully empty cache aborts a round — always back to
//!    a re-offered start control, never a dead end.
//!
//! ## Architecture
//!
//! - **Coverage then noise**: each round sweeps every catalog asset once in
//!   catalog order (the player is guaranteed to see the eventual target),
//!   then plays a fixed number of randomized sample steps so the target's
//!   position gives nothing away.
//!
//! - **Preload gate**: every asset is fetched concurrently and joined before
//!   the start control is offered; gameplay reads a frozen cache.
//!
//! ## Modules
//!
//! - `core`: Deterministic RNG and round configuration
//! - `catalog`: Categories, asset references, numbered-file discovery
//! - `preload`: Asset sources, cache, fire-and-join preload
//! - `round`: Phase state machine and round controller
//! - `guess`: Two-guess evaluation
//! - `sink`: Presentation command surface
//! - `session`: Load gating and input-event dispatch
//! - `error`: Failure taxonomy

pub mod catalog;
pub mod core;
pub mod error;
pub mod guess;
pub mod preload;
pub mod round;
pub mod session;
pub mod sink;

// Re-export commonly used types
pub use crate::core::{GameRng, RoundConfig, RoundMessages};

pub use crate::catalog::{AssetRef, Catalog, Category, CategoryId};

pub use crate::preload::{preload, AssetHandle, AssetSource, FsSource, MemorySource, PreloadCache};

pub use crate::round::{Phase, Resolution, RoundController, StepResult, Target};

pub use crate::guess::{GuessEvaluator, GuessOutcome};

pub use crate::sink::{NullSink, PresentationSink, RecordingSink, SinkCommand};

pub use crate::session::{GameSession, InputEvent, PreloadReport, SessionConfig};

pub use crate::error::{AssetError, PartialPreload, RoundError};
