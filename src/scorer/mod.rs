pub mod angular;
pub mod closure;
pub mod radial;
pub mod types;

pub use self::types::{ClosureCheck, ScoreDetails};
use crate::config::ScoringWeights;
use crate::consts::MAX_SCORE;
use crate::error::CfResult;
use crate::geometry::Point;

/// Circularity scorer. Stateless apart from its validated weights.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> CfResult<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    #[inline(always)]
    pub fn has_enough_points(&self, count: usize) -> bool {
        count >= self.weights.min_points
    }

    /// Accuracy in `[0, 100]` of `points` as a circle around `center`.
    pub fn score(&self, points: &[Point], center: Point) -> f64 {
        self.score_details(points, center).score
    }

    /// Full breakdown of the score. Short or degenerate strokes report zero.
    pub fn score_details(&self, points: &[Point], center: Point) -> ScoreDetails {
        let w = &self.weights;
        let mut details = ScoreDetails {
            point_count: points.len(),
            ..Default::default()
        };
        if !self.has_enough_points(points.len()) {
            return details;
        }

        let profile = radial::radial_profile(points, center);
        details.avg_radius = profile.avg_radius;
        details.mean_deviation = profile.mean_deviation;
        if profile.avg_radius < w.degenerate_radius {
            return details;
        }

        details.radial_score = radial::radial_score(&profile, w.radial_tolerance);
        details.total_angle = angular::total_sweep(points, center);
        details.coverage = angular::coverage(details.total_angle);

        let combined = w.radial_weight * details.radial_score + w.coverage_weight * details.coverage;
        details.score = (combined * MAX_SCORE).clamp(0.0, MAX_SCORE);
        details
    }

    pub fn check_closure(&self, points: &[Point], center: Point) -> ClosureCheck {
        closure::check_closure(
            points,
            center,
            self.weights.closure_floor,
            self.weights.closure_ratio,
        )
    }
}

/// Scores a stroke with the default weights.
pub fn score(points: &[Point], center: Point) -> f64 {
    Scorer::default().score(points, center)
}
