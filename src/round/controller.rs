//! The round controller: one state machine per game session.
//!
//! A round is a committed sequence of timed steps:
//!
//! 1. **Sweep** — every catalog asset exactly once, catalog order, so the
//!    player is guaranteed to have seen the eventual target at least once.
//! 2. **Sample** — a fixed number of further steps drawn from a per-round
//!    shuffle, so the target's category cannot be inferred from sweep
//!    position.
//! 3. **Resolution** — a uniform random category, then a uniform random
//!    asset within it, becomes the round target; options appear.
//!
//! The controller owns all round-transient state (target, guess count,
//! animating flag). There are no timers here: each step returns a
//! [`StepResult`] and the host calls back when the dwell elapses.

use log::{debug, warn};

use crate::catalog::{AssetRef, Catalog, CategoryId};
use crate::core::{GameRng, RoundConfig};
use crate::error::RoundError;
use crate::guess::{GuessEvaluator, GuessOutcome};
use crate::preload::PreloadCache;
use crate::sink::PresentationSink;

use super::phase::{Phase, Resolution, StepResult};

/// The round's correct answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    /// Category the shown asset belongs to.
    pub category: CategoryId,
    /// Answer label a guess must match.
    pub label: String,
    /// The asset left on the image surface.
    pub asset: AssetRef,
}

/// Round state machine. One active round at a time; the `is_animating` flag
/// is the only re-entrancy guard and is cleared only at terminal states
/// (awaiting-guess reached, or abort).
#[derive(Clone, Debug)]
pub struct RoundController {
    config: RoundConfig,
    rng: GameRng,
    phase: Phase,
    is_animating: bool,
    sweep: Vec<AssetRef>,
    sample_order: Vec<AssetRef>,
    target: Option<Target>,
    evaluator: GuessEvaluator,
}

impl RoundController {
    /// Create a controller in the idle state.
    #[must_use]
    pub fn new(config: RoundConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            phase: Phase::Idle,
            is_animating: false,
            sweep: Vec::new(),
            sample_order: Vec::new(),
            target: None,
            evaluator: GuessEvaluator::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while the sweep/sample animation is committed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// The round target, once resolution has happened.
    #[must_use]
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    /// Guesses consumed in the current round.
    #[must_use]
    pub fn guesses(&self) -> u8 {
        self.evaluator.guesses()
    }

    /// Begin a round: reset transient state, hide the start control, and
    /// present the first sweep step.
    ///
    /// No-op while a round is already animating — overlapping rounds are
    /// rejected, not queued.
    pub fn start(
        &mut self,
        catalog: &Catalog,
        cache: &PreloadCache,
        sink: &mut dyn PresentationSink,
    ) -> StepResult {
        if self.is_animating {
            debug!("start ignored: a round is already animating");
            return StepResult::Ignored;
        }

        self.is_animating = true;
        self.evaluator.reset();
        self.target = None;

        sink.hide_start_control();
        sink.set_message(&self.config.messages.rolling);
        for cat in catalog.iter() {
            sink.set_option_enabled(cat.id, true);
        }
        sink.hide_options();

        self.sweep = catalog.all_asset_refs();
        debug!("round start: {} assets in rotation", self.sweep.len());

        if !self.sweep.iter().any(|r| cache.contains(&r.path)) {
            return self.abort(sink);
        }

        self.phase = Phase::Sweeping { next: 0 };
        self.step(catalog, cache, sink)
    }

    /// A dwell timer elapsed; present the next scheduled step.
    ///
    /// Ignored outside the animating phases.
    pub fn tick(
        &mut self,
        catalog: &Catalog,
        cache: &PreloadCache,
        sink: &mut dyn PresentationSink,
    ) -> StepResult {
        if !self.phase.is_animating() {
            debug!("tick ignored outside animation");
            return StepResult::Ignored;
        }
        self.step(catalog, cache, sink)
    }

    /// Submit a guess while the round awaits one.
    ///
    /// Ignored while animating and outside the awaiting-guess phase.
    pub fn submit_guess(
        &mut self,
        selected: &str,
        catalog: &Catalog,
        sink: &mut dyn PresentationSink,
    ) -> StepResult {
        if self.is_animating {
            debug!("guess ignored while animating");
            return StepResult::Ignored;
        }
        if self.phase != Phase::AwaitingGuess {
            debug!("guess ignored: no round awaiting a guess");
            return StepResult::Ignored;
        }
        let Some(target) = self.target.clone() else {
            warn!("awaiting-guess phase with no target; ignoring guess");
            return StepResult::Ignored;
        };

        match self.evaluator.evaluate(selected, &target.label) {
            GuessOutcome::Correct => {
                sink.celebrate();
                sink.set_message(&self.config.messages.correct);
                for cat in catalog.iter() {
                    sink.set_option_enabled(cat.id, false);
                }
                sink.hide_options();
                sink.show_start_control(&self.config.messages.next_label);
                self.phase = Phase::Resolved(Resolution::Correct);
                StepResult::NextRound(self.config.correct_advance)
            }
            GuessOutcome::FirstMiss => {
                sink.set_message(&self.config.messages.first_miss);
                if let Some(cat) = catalog.find_by_label(selected) {
                    sink.set_option_enabled(cat.id, false);
                }
                StepResult::GuessAgain
            }
            GuessOutcome::Exhausted => {
                sink.set_message(&self.config.messages.exhausted);
                sink.hide_options();
                sink.show_start_control(&self.config.messages.next_label);
                self.phase = Phase::Resolved(Resolution::Exhausted);
                StepResult::NextRound(self.config.miss_advance)
            }
        }
    }

    /// Present whatever the current phase schedules next.
    fn step(
        &mut self,
        catalog: &Catalog,
        cache: &PreloadCache,
        sink: &mut dyn PresentationSink,
    ) -> StepResult {
        loop {
            match self.phase {
                Phase::Sweeping { next } => {
                    let mut i = next;
                    while let Some(asset) = self.sweep.get(i) {
                        if cache.contains(&asset.path) {
                            let asset = asset.clone();
                            debug!("sweep {}/{}: {}", i + 1, self.sweep.len(), asset.path);
                            sink.show_image(&asset);
                            self.phase = Phase::Sweeping { next: i + 1 };
                            return StepResult::Dwell(self.config.sweep_dwell);
                        }
                        warn!("skipping unloaded asset {}", asset.path);
                        i += 1;
                    }
                    // Sweep complete; build the per-round sample order from
                    // the assets that actually loaded.
                    let mut order: Vec<AssetRef> = self
                        .sweep
                        .iter()
                        .filter(|r| cache.contains(&r.path))
                        .cloned()
                        .collect();
                    if order.is_empty() {
                        return self.abort(sink);
                    }
                    self.rng.shuffle(&mut order);
                    debug!("sampling from {} presentable assets", order.len());
                    self.sample_order = order;
                    self.phase = Phase::Sampling { step: 0 };
                }
                Phase::Sampling { step } => {
                    if step >= self.config.sample_steps {
                        return self.resolve_target(catalog, cache, sink);
                    }
                    let idx = step % self.sample_order.len();
                    let asset = self.sample_order[idx].clone();
                    debug!(
                        "sample {}/{}: {}",
                        step + 1,
                        self.config.sample_steps,
                        asset.path
                    );
                    sink.show_image(&asset);
                    self.phase = Phase::Sampling { step: step + 1 };
                    return StepResult::Dwell(self.config.sample_dwell);
                }
                // step() is only entered from start() or an animating tick.
                Phase::Idle | Phase::AwaitingGuess | Phase::Resolved(_) => {
                    return StepResult::Ignored;
                }
            }
        }
    }

    /// Pick the round target and open the guess phase.
    fn resolve_target(
        &mut self,
        catalog: &Catalog,
        cache: &PreloadCache,
        sink: &mut dyn PresentationSink,
    ) -> StepResult {
        // Uniform over categories first, then uniform within the category,
        // so small categories are as likely to be the answer as large ones.
        let candidates: Vec<&crate::catalog::Category> =
            catalog.iter().filter(|c| !c.is_empty()).collect();
        let Some(&category) = self.rng.choose(&candidates) else {
            return self.abort(sink);
        };

        let idx = self.rng.gen_range_usize(0..category.files.len());
        let file = category.files[idx].clone();
        let asset = AssetRef {
            category: category.id,
            path: category.asset_path(&file),
            file,
        };

        if !cache.contains(&asset.path) {
            warn!("target asset {} missing from cache", asset.path);
        }
        debug!("target: {}", asset.path);

        sink.set_message("");
        sink.show_image(&asset);
        sink.show_options();

        self.target = Some(Target {
            category: category.id,
            label: category.label.clone(),
            asset,
        });
        self.is_animating = false;
        self.phase = Phase::AwaitingGuess;
        StepResult::AwaitingGuess
    }

    /// Abort to idle: error message, start control re-offered.
    fn abort(&mut self, sink: &mut dyn PresentationSink) -> StepResult {
        warn!("aborting round: no presentable asset in the cache");
        sink.set_message(&self.config.messages.load_error);
        sink.show_start_control(&self.config.messages.retry_label);
        self.is_animating = false;
        self.phase = Phase::Idle;
        self.target = None;
        StepResult::Aborted(RoundError::NoPresentableAssets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preload::{preload, MemorySource};
    use crate::sink::{RecordingSink, SinkCommand};
    use std::time::Duration;

    fn small_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let a = catalog.register_auto("a", "Label A", "images/a");
        catalog.set_files(a, ["a1.png", "a2.png"]);
        let b = catalog.register_auto("b", "Label B", "images/b");
        catalog.set_files(b, ["b1.png"]);
        catalog
    }

    fn full_source(catalog: &Catalog) -> MemorySource {
        let mut source = MemorySource::new();
        for r in catalog.all_asset_refs() {
            source.insert(r.path, b"img".as_slice());
        }
        source
    }

    fn controller() -> RoundController {
        RoundController::new(RoundConfig::default(), GameRng::new(42))
    }

    /// Drive start + ticks until the controller stops asking for dwells.
    fn run_animation(
        ctrl: &mut RoundController,
        catalog: &Catalog,
        cache: &PreloadCache,
        sink: &mut RecordingSink,
    ) -> StepResult {
        let mut result = ctrl.start(catalog, cache, sink);
        while matches!(result, StepResult::Dwell(_)) {
            result = ctrl.tick(catalog, cache, sink);
        }
        result
    }

    #[test]
    fn test_sweep_covers_catalog_in_order() {
        let catalog = small_catalog();
        let cache = preload(&catalog, &full_source(&catalog), |_, _| {}).unwrap();
        let mut ctrl = controller();
        let mut sink = RecordingSink::new();

        let result = run_animation(&mut ctrl, &catalog, &cache, &mut sink);
        assert_eq!(result, StepResult::AwaitingGuess);

        let shown = sink.shown_images();
        // 3 sweep steps + 15 sample steps + 1 target.
        assert_eq!(shown.len(), 3 + 15 + 1);
        assert_eq!(
            &shown[..3],
            &["images/a/a1.png", "images/a/a2.png", "images/b/b1.png"]
        );
    }

    #[test]
    fn test_sample_steps_draw_from_catalog() {
        let catalog = small_catalog();
        let cache = preload(&catalog, &full_source(&catalog), |_, _| {}).unwrap();
        let mut ctrl = controller();
        let mut sink = RecordingSink::new();

        run_animation(&mut ctrl, &catalog, &cache, &mut sink);

        let all_paths: Vec<String> = catalog.all_asset_refs().into_iter().map(|r| r.path).collect();
        let shown = sink.shown_images();
        for path in &shown[3..3 + 15] {
            assert!(all_paths.iter().any(|p| p == path), "unknown sample {path}");
        }
    }

    #[test]
    fn test_dwell_durations() {
        let catalog = small_catalog();
        let cache = preload(&catalog, &full_source(&catalog), |_, _| {}).unwrap();
        let mut ctrl = controller();
        let mut sink = RecordingSink::new();

        let first = ctrl.start(&catalog, &cache, &mut sink);
        assert_eq!(first, StepResult::Dwell(Duration::from_millis(150)));

        let mut result = first;
        let mut sweep_dwells = 0;
        let mut sample_dwells = 0;
        while let StepResult::Dwell(d) = result {
            if d == Duration::from_millis(150) {
                sweep_dwells += 1;
            } else if d == Duration::from_millis(100) {
                sample_dwells += 1;
            }
            result = ctrl.tick(&catalog, &cache, &mut sink);
        }

        assert_eq!(sweep_dwells, 3);
        assert_eq!(sample_dwells, 15);
    }

    #[test]
    fn test_reentrancy_guard() {
        let catalog = small_catalog();
        let cache = preload(&catalog, &full_source(&catalog), |_, _| {}).unwrap();
        let mut ctrl = controller();
        let mut sink = RecordingSink::new();

        let _ = ctrl.start(&catalog, &cache, &mut sink);
        assert!(ctrl.is_animating());
        let before = sink.commands.len();

        let second = ctrl.start(&catalog, &cache, &mut sink);
        assert_eq!(second, StepResult::Ignored);
        assert_eq!(sink.commands.len(), before, "no commands on rejected start");
        assert_eq!(ctrl.phase(), Phase::Sweeping { next: 1 });
    }

    #[test]
    fn test_missing_assets_are_skipped() {
        let catalog = small_catalog();
        // Only load two of three assets.
        let source = MemorySource::new()
            .with_asset("images/a/a1.png", b"x")
            .with_asset("images/b/b1.png", b"x");
        let cache = preload(&catalog, &source, |_, _| {}).unwrap_err().cache;
        let mut ctrl = controller();
        let mut sink = RecordingSink::new();

        let result = run_animation(&mut ctrl, &catalog, &cache, &mut sink);
        assert_eq!(result, StepResult::AwaitingGuess);

        let shown = sink.shown_images();
        // Sweep shows only the loaded pair, still in catalog order.
        assert_eq!(&shown[..2], &["images/a/a1.png", "images/b/b1.png"]);
        // Sample steps never present the unloaded asset.
        for path in &shown[2..2 + 15] {
            assert_ne!(*path, "images/a/a2.png");
        }
    }

    #[test]
    fn test_all_assets_missing_aborts() {
        let catalog = small_catalog();
        let cache = PreloadCache::new();
        let mut ctrl = controller();
        let mut sink = RecordingSink::new();

        let result = ctrl.start(&catalog, &cache, &mut sink);
        assert_eq!(result, StepResult::Aborted(RoundError::NoPresentableAssets));
        assert_eq!(ctrl.phase(), Phase::Idle);
        assert!(!ctrl.is_animating());
        assert!(sink
            .commands
            .iter()
            .any(|c| matches!(c, SinkCommand::ShowStartControl(_))));
    }

    #[test]
    fn test_restart_after_abort() {
        let catalog = small_catalog();
        let empty = PreloadCache::new();
        let mut ctrl = controller();
        let mut sink = RecordingSink::new();

        let _ = ctrl.start(&catalog, &empty, &mut sink);

        let cache = preload(&catalog, &full_source(&catalog), |_, _| {}).unwrap();
        let result = run_animation(&mut ctrl, &catalog, &cache, &mut sink);
        assert_eq!(result, StepResult::AwaitingGuess);
    }

    #[test]
    fn test_correct_guess_flow() {
        let catalog = small_catalog();
        let cache = preload(&catalog, &full_source(&catalog), |_, _| {}).unwrap();
        let mut ctrl = controller();
        let mut sink = RecordingSink::new();

        run_animation(&mut ctrl, &catalog, &cache, &mut sink);
        let label = ctrl.target().unwrap().label.clone();
        sink.clear();

        let result = ctrl.submit_guess(&label, &catalog, &mut sink);
        assert_eq!(result, StepResult::NextRound(Duration::from_millis(3000)));
        assert_eq!(ctrl.phase(), Phase::Resolved(Resolution::Correct));
        assert_eq!(sink.celebrations(), 1);
    }

    #[test]
    fn test_two_misses_exhaust() {
        let catalog = small_catalog();
        let cache = preload(&catalog, &full_source(&catalog), |_, _| {}).unwrap();
        let mut ctrl = controller();
        let mut sink = RecordingSink::new();

        run_animation(&mut ctrl, &catalog, &cache, &mut sink);
        let target = ctrl.target().unwrap().label.clone();
        let wrong: Vec<String> = catalog
            .iter()
            .filter(|c| c.label != target)
            .map(|c| c.label.clone())
            .collect();
        sink.clear();

        let first = ctrl.submit_guess(&wrong[0], &catalog, &mut sink);
        assert_eq!(first, StepResult::GuessAgain);
        assert_eq!(ctrl.phase(), Phase::AwaitingGuess);

        let second = ctrl.submit_guess(&wrong[0], &catalog, &mut sink);
        assert_eq!(second, StepResult::NextRound(Duration::from_millis(2000)));
        assert_eq!(ctrl.phase(), Phase::Resolved(Resolution::Exhausted));
        assert_eq!(sink.celebrations(), 0);
        assert!(sink.commands.contains(&SinkCommand::HideOptions));
    }

    #[test]
    fn test_guess_during_animation_is_ignored() {
        let catalog = small_catalog();
        let cache = preload(&catalog, &full_source(&catalog), |_, _| {}).unwrap();
        let mut ctrl = controller();
        let mut sink = RecordingSink::new();

        let _ = ctrl.start(&catalog, &cache, &mut sink);
        assert!(ctrl.is_animating());

        let result = ctrl.submit_guess("Label A", &catalog, &mut sink);
        assert_eq!(result, StepResult::Ignored);
        assert_eq!(ctrl.guesses(), 0);
    }

    #[test]
    fn test_guess_when_idle_is_ignored() {
        let catalog = small_catalog();
        let mut ctrl = controller();
        let mut sink = RecordingSink::new();

        let result = ctrl.submit_guess("Label A", &catalog, &mut sink);
        assert_eq!(result, StepResult::Ignored);
    }

    #[test]
    fn test_first_miss_disables_only_selected_option() {
        let catalog = small_catalog();
        let cache = preload(&catalog, &full_source(&catalog), |_, _| {}).unwrap();
        let mut ctrl = controller();
        let mut sink = RecordingSink::new();

        run_animation(&mut ctrl, &catalog, &cache, &mut sink);
        let target = ctrl.target().unwrap().label.clone();
        let wrong = catalog
            .iter()
            .find(|c| c.label != target)
            .map(|c| (c.id, c.label.clone()))
            .unwrap();
        sink.clear();

        let _ = ctrl.submit_guess(&wrong.1, &catalog, &mut sink);
        assert_eq!(
            sink.commands
                .iter()
                .filter(|c| matches!(c, SinkCommand::SetOptionEnabled(_, false)))
                .count(),
            1
        );
        assert!(sink
            .commands
            .contains(&SinkCommand::SetOptionEnabled(wrong.0, false)));
    }

    #[test]
    fn test_target_comes_from_catalog() {
        let catalog = small_catalog();
        let cache = preload(&catalog, &full_source(&catalog), |_, _| {}).unwrap();
        let mut ctrl = controller();
        let mut sink = RecordingSink::new();

        run_animation(&mut ctrl, &catalog, &cache, &mut sink);
        let target = ctrl.target().unwrap();
        let category = catalog.get(target.category).unwrap();
        assert_eq!(category.label, target.label);
        assert!(category.files.contains(&target.asset.file));
    }
}
