use crate::feedback::FeedbackTable;
use crate::geometry::StrokeFile;
use crate::scorer::{ClosureCheck, ScoreDetails, Scorer};
use crate::session::{FinalResult, Signal};
use serde::{Deserialize, Serialize};

/// Wire form of a final result: `{ closed, score, isNewBest, message, .. }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub closed: bool,
    pub score: Option<f64>,
    pub is_new_best: bool,
    pub message: Option<String>,
    pub closure: ClosureCheck,
    pub details: Option<ScoreDetails>,
}

impl From<&FinalResult> for EvaluationResult {
    fn from(result: &FinalResult) -> Self {
        match result {
            FinalResult::Unclosed(closure) => Self {
                closed: false,
                score: None,
                is_new_best: false,
                message: None,
                closure: *closure,
                details: None,
            },
            FinalResult::Scored {
                score,
                details,
                closure,
                is_new_best,
                feedback,
            } => Self {
                closed: true,
                score: Some(*score),
                is_new_best: *is_new_best,
                message: Some(feedback.message().to_string()),
                closure: *closure,
                details: Some(*details),
            },
        }
    }
}

/// Service: one-shot evaluation of a recorded stroke, without touching any best score.
///
/// Short strokes are reported as unclosed with zeroed details.
pub fn evaluate_stroke(
    scorer: &Scorer,
    feedback: &FeedbackTable,
    stroke: &StrokeFile,
) -> crate::error::CfResult<EvaluationResult> {
    let center = stroke.surface()?.center();
    let details = scorer.score_details(&stroke.points, center);
    let closure = scorer.check_closure(&stroke.points, center);
    let closed = closure.closed && scorer.has_enough_points(stroke.points.len());

    Ok(EvaluationResult {
        closed,
        score: closed.then_some(details.score),
        is_new_best: false,
        message: closed.then(|| feedback.lookup(details.score).to_string()),
        closure,
        details: Some(details),
    })
}

/// Tally of a replayed event log.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReplaySummary {
    pub strokes_started: usize,
    pub live_updates: usize,
    pub scored: usize,
    pub unclosed: usize,
    pub new_bests: usize,
    pub clears: usize,
    pub resizes: usize,
    pub best_final: Option<f64>,
}

impl ReplaySummary {
    pub fn from_signals(signals: &[Signal]) -> Self {
        let mut summary = Self::default();
        for signal in signals {
            match signal {
                Signal::Started => summary.strokes_started += 1,
                Signal::Live(_) => summary.live_updates += 1,
                Signal::Cleared => summary.clears += 1,
                Signal::Resized(_) => summary.resizes += 1,
                Signal::Final(FinalResult::Unclosed(_)) => summary.unclosed += 1,
                Signal::Final(FinalResult::Scored {
                    score, is_new_best, ..
                }) => {
                    summary.scored += 1;
                    if *is_new_best {
                        summary.new_bests += 1;
                    }
                    summary.best_final = Some(summary.best_final.map_or(*score, |b| b.max(*score)));
                }
            }
        }
        summary
    }
}
