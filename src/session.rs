//! Game session: ties catalog, preload, and the round controller together.
//!
//! The session is what a host embeds. It owns the catalog and the preload
//! cache, gates the start control on preload completion, and routes input
//! events to the controller. Gameplay stays single-threaded: the host runs
//! an event loop, keeps at most one outstanding timer, and feeds
//! [`InputEvent::TimerElapsed`] back in when it fires.
//!
//! ```no_run
//! use picture_quiz::catalog::Catalog;
//! use picture_quiz::preload::FsSource;
//! use picture_quiz::session::{GameSession, InputEvent, SessionConfig};
//! use picture_quiz::sink::NullSink;
//!
//! let mut catalog = Catalog::new();
//! let compose = catalog.register_auto("compose", "Composition", "images/compose");
//! catalog.set_files(compose, ["1.png", "2.png", "3.png"]);
//! catalog.register_auto("size", "Sizing", "images/size"); // filled by the probe
//!
//! let mut session = GameSession::new(catalog, SessionConfig::default(), 42);
//! let mut sink = NullSink;
//! let source = FsSource::new("assets");
//!
//! let report = session.load(&source, &mut sink, |done, total| {
//!     eprintln!("loaded {done}/{total}");
//! });
//! assert!(report.loaded > 0 || report.total == 0);
//!
//! // Host event loop from here on:
//! let _ = session.handle(InputEvent::StartRequested, &mut sink);
//! ```

use log::{debug, info, warn};

use crate::catalog::{probe_numbered, Catalog};
use crate::core::{GameRng, RoundConfig};
use crate::error::AssetError;
use crate::preload::{preload, AssetSource, PreloadCache};
use crate::round::{RoundController, StepResult};
use crate::sink::PresentationSink;

/// Session-level configuration: round pacing plus load-time knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Round timing and messages.
    pub round: RoundConfig,

    /// Label on the start control when it is first offered.
    pub start_label: String,

    /// Extension probed for categories registered without files.
    pub probe_ext: String,

    /// Probe attempt cap per category.
    pub probe_cap: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            round: RoundConfig::default(),
            start_label: "Start".to_string(),
            probe_ext: "png".to_string(),
            probe_cap: crate::catalog::DEFAULT_PROBE_CAP,
        }
    }
}

impl SessionConfig {
    /// Replace the round configuration.
    #[must_use]
    pub fn with_round(mut self, round: RoundConfig) -> Self {
        self.round = round;
        self
    }

    /// Set the initial start-control label.
    #[must_use]
    pub fn with_start_label(mut self, label: impl Into<String>) -> Self {
        self.start_label = label.into();
        self
    }
}

/// Input events from the host UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// The start control was activated.
    StartRequested,
    /// An option control was activated with this label.
    Guess(String),
    /// The host's single outstanding timer fired.
    TimerElapsed,
}

/// Summary of a completed load.
#[derive(Debug)]
pub struct PreloadReport {
    /// Assets that loaded into the cache.
    pub loaded: usize,
    /// Assets the catalog named.
    pub total: usize,
    /// Resolved path and cause for each asset that failed.
    pub failures: Vec<(String, AssetError)>,
}

impl PreloadReport {
    /// True when some assets failed to load.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// What the pending host timer means when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PendingTimer {
    None,
    Dwell,
    NextRound,
}

/// One game session: catalog + cache + controller.
///
/// Input before [`GameSession::load`] completes is ignored — the start
/// control is not offered until the preload settles.
pub struct GameSession {
    catalog: Catalog,
    config: SessionConfig,
    rng: GameRng,
    controller: RoundController,
    cache: Option<PreloadCache>,
    pending: PendingTimer,
}

impl GameSession {
    /// Create a session over a catalog. `seed` fixes the round sequence.
    #[must_use]
    pub fn new(catalog: Catalog, config: SessionConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let controller = RoundController::new(config.round.clone(), rng.fork());
        Self {
            catalog,
            config,
            rng,
            controller,
            cache: None,
            pending: PendingTimer::None,
        }
    }

    /// The catalog (possibly extended by the probe after `load`).
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The round controller.
    #[must_use]
    pub fn controller(&self) -> &RoundController {
        &self.controller
    }

    /// True once the preload has settled and gameplay may start.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.cache.is_some()
    }

    /// Probe unpopulated categories, preload every asset, and offer the
    /// start control.
    ///
    /// Blocks until every fetch settles. Always leaves the session ready:
    /// partial failure is reported, not fatal.
    pub fn load<S>(
        &mut self,
        source: &S,
        sink: &mut dyn PresentationSink,
        progress: impl FnMut(usize, usize),
    ) -> PreloadReport
    where
        S: AssetSource + ?Sized,
    {
        for id in self.catalog.unpopulated() {
            probe_numbered(
                &mut self.catalog,
                id,
                source,
                &self.config.probe_ext,
                self.config.probe_cap,
            );
        }

        let report = match preload(&self.catalog, source, progress) {
            Ok(cache) => {
                let report = PreloadReport {
                    loaded: cache.len(),
                    total: cache.len(),
                    failures: Vec::new(),
                };
                info!("preload complete: {} assets", cache.len());
                self.cache = Some(cache);
                report
            }
            Err(partial) => {
                warn!("{partial}");
                let report = PreloadReport {
                    loaded: partial.cache.len(),
                    total: partial.total,
                    failures: partial.failures,
                };
                self.cache = Some(partial.cache);
                report
            }
        };

        sink.show_start_control(&self.config.start_label);
        report
    }

    /// Route one input event to the controller.
    ///
    /// `TimerElapsed` is interpreted against the last returned delay: a dwell
    /// advances the animation, a next-round delay starts the next round.
    pub fn handle(&mut self, event: InputEvent, sink: &mut dyn PresentationSink) -> StepResult {
        let Some(cache) = &self.cache else {
            debug!("input ignored before load completes");
            return StepResult::Ignored;
        };

        let result = match event {
            InputEvent::StartRequested => self.controller.start(&self.catalog, cache, sink),
            InputEvent::Guess(label) => self.controller.submit_guess(&label, &self.catalog, sink),
            InputEvent::TimerElapsed => match self.pending {
                PendingTimer::Dwell => self.controller.tick(&self.catalog, cache, sink),
                PendingTimer::NextRound => self.controller.start(&self.catalog, cache, sink),
                PendingTimer::None => {
                    debug!("timer fired with nothing pending");
                    StepResult::Ignored
                }
            },
        };

        self.pending = match &result {
            StepResult::Dwell(_) => PendingTimer::Dwell,
            StepResult::NextRound(_) => PendingTimer::NextRound,
            StepResult::AwaitingGuess | StepResult::Aborted(_) => PendingTimer::None,
            // A rejected input leaves whatever timer was pending untouched.
            StepResult::GuessAgain | StepResult::Ignored => self.pending,
        };

        result
    }

    /// Replace the controller, e.g. to change pacing between rounds.
    ///
    /// Only allowed while no round is animating.
    pub fn reset_controller(&mut self, config: RoundConfig) -> bool {
        if self.controller.is_animating() {
            return false;
        }
        self.controller = RoundController::new(config, self.rng.fork());
        true
    }
}
