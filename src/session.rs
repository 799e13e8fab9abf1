//! Drawing session: owns the collector, the surface and the best score, and
//! turns stroke effects into live and final signals.
//!
//! Everything runs inside `Session::handle`, one event at a time. Scoring is
//! synchronous, so a signal is always complete when `handle` returns.

use crate::config::SessionParams;
use crate::feedback::{Feedback, FeedbackTable};
use crate::geometry::SurfaceDimensions;
use crate::input::InputEvent;
use crate::scorer::{ClosureCheck, ScoreDetails, Scorer};
use crate::storage::BestScoreStore;
use crate::stroke::{Effect, FinishedStroke, StrokeCollector, StrokeEvent};
use tracing::{debug, info, warn};

/// Highest final score on this device. Unset reads as zero and it never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BestScore(Option<f64>);

impl BestScore {
    /// Non-finite or negative values are treated as unset.
    pub fn new(value: Option<f64>) -> Self {
        Self(value.filter(|v| v.is_finite() && *v >= 0.0))
    }

    pub fn unset() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<f64> {
        self.0
    }

    pub fn value(&self) -> f64 {
        self.0.unwrap_or(0.0)
    }

    /// Takes `score` if it strictly beats the current best.
    pub fn offer(&mut self, score: f64) -> bool {
        if score.is_finite() && score > self.value() {
            self.0 = Some(score);
            true
        } else {
            false
        }
    }
}

/// Compares a closed stroke's score against the best and picks the feedback.
pub fn judge(best: &mut BestScore, table: &FeedbackTable, score: f64) -> Feedback {
    if best.offer(score) {
        Feedback::NewHighScore
    } else {
        Feedback::Tier(table.lookup(score))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FinalResult {
    /// Start and end are too far apart; no score is given.
    Unclosed(ClosureCheck),
    Scored {
        score: f64,
        details: ScoreDetails,
        closure: ClosureCheck,
        is_new_best: bool,
        feedback: Feedback,
    },
}

impl FinalResult {
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Scored { .. })
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Scored { score, .. } => Some(*score),
            Self::Unclosed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// A new stroke began; the previous trace should be wiped.
    Started,
    Live(f64),
    Final(FinalResult),
    Cleared,
    Resized(SurfaceDimensions),
}

pub struct Session<S: BestScoreStore> {
    scorer: Scorer,
    params: SessionParams,
    surface: SurfaceDimensions,
    collector: StrokeCollector,
    best: BestScore,
    store: S,
    feedback: FeedbackTable,
}

impl<S: BestScoreStore> Session<S> {
    /// Reads the best score once. A failed read starts from zero.
    pub fn new(scorer: Scorer, params: SessionParams, surface: SurfaceDimensions, store: S) -> Self {
        let best = match store.load() {
            Ok(value) => BestScore::new(value),
            Err(e) => {
                warn!("Could not read best score, starting from zero: {}", e);
                BestScore::unset()
            }
        };
        info!("Session ready. Best score: {:.2}", best.value());

        Self {
            collector: StrokeCollector::new(params.live_min_points),
            scorer,
            params,
            surface,
            best,
            store,
            feedback: FeedbackTable::default(),
        }
    }

    pub fn with_feedback(mut self, table: FeedbackTable) -> Self {
        self.feedback = table;
        self
    }

    pub fn handle(&mut self, event: InputEvent) -> Option<Signal> {
        if let InputEvent::Resize(dims) = event {
            return self.resize(dims);
        }
        let stroke_event = StrokeEvent::from_input(&event)?;

        match self.collector.apply(stroke_event) {
            Effect::Ignored | Effect::Appended => None,
            Effect::Started => Some(Signal::Started),
            Effect::Cleared => Some(Signal::Cleared),
            Effect::Sampled { count } => {
                if !self.scorer.has_enough_points(count) {
                    return None;
                }
                let score = self.scorer.score(self.collector.points(), self.surface.center());
                debug!("Live score {:.2} over {} points", score, count);
                Some(Signal::Live(score))
            }
            Effect::Finished(stroke) => self.finalize(stroke).map(Signal::Final),
        }
    }

    /// Feeds a whole event sequence, collecting every emitted signal.
    pub fn run<I>(&mut self, events: I) -> Vec<Signal>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        events.into_iter().filter_map(|e| self.handle(e)).collect()
    }

    /// Closure check, score and best-score bookkeeping for a released stroke.
    pub fn finalize(&mut self, stroke: FinishedStroke) -> Option<FinalResult> {
        if !self.scorer.has_enough_points(stroke.len()) {
            debug!("Dropping stroke with {} points", stroke.len());
            return None;
        }

        let center = self.surface.center();
        let closure = self.scorer.check_closure(stroke.points(), center);
        if !closure.closed {
            info!(
                "Stroke not closed: gap {:.2} exceeds {:.2}",
                closure.gap, closure.threshold
            );
            return Some(FinalResult::Unclosed(closure));
        }

        let details = self.scorer.score_details(stroke.points(), center);
        let score = details.score;
        let feedback = judge(&mut self.best, &self.feedback, score);
        let is_new_best = feedback == Feedback::NewHighScore;

        if is_new_best {
            info!("New best score: {:.2}", score);
            // Best effort: the in-session result stands either way
            if let Err(e) = self.store.save(score) {
                warn!("Could not persist best score: {}", e);
            }
        } else {
            info!("Final score {:.2}: {}", score, feedback.message());
        }

        Some(FinalResult::Scored {
            score,
            details,
            closure,
            is_new_best,
            feedback,
        })
    }

    fn resize(&mut self, dims: SurfaceDimensions) -> Option<Signal> {
        if let Err(e) = dims.validate() {
            warn!("Ignoring resize: {}", e);
            return None;
        }
        if self.collector.is_drawing() {
            debug!("Resize discards the stroke in progress");
        }
        self.collector.apply(StrokeEvent::Clear);
        self.surface = dims;
        Some(Signal::Resized(dims))
    }

    /// Score of the stroke in progress, if it is long enough for live feedback.
    ///
    /// Both the live gate and the scorer's minimum must be met.
    pub fn live_score(&self) -> Option<f64> {
        let points = self.collector.points();
        if self.collector.is_drawing()
            && points.len() >= self.params.live_min_points
            && self.scorer.has_enough_points(points.len())
        {
            Some(self.scorer.score(points, self.surface.center()))
        } else {
            None
        }
    }

    pub fn best(&self) -> BestScore {
        self.best
    }

    pub fn surface(&self) -> SurfaceDimensions {
        self.surface
    }

    pub fn collector(&self) -> &StrokeCollector {
        &self.collector
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
