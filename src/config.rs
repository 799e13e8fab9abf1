use crate::consts::{
    BEST_SCORE_KEY, CLOSURE_FLOOR, CLOSURE_RATIO, COVERAGE_WEIGHT, DEFAULT_CHALLENGE_URL,
    DEFAULT_DISPLAY_DECIMALS, DEFAULT_LIVE_MIN_POINTS, DEGENERATE_RADIUS, MIN_SCORING_POINTS,
    RADIAL_TOLERANCE, RADIAL_WEIGHT,
};
use crate::error::{CfResult, CircleForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub session: SessionParams,
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === BLEND ===
    #[arg(long, default_value_t = RADIAL_WEIGHT)]
    pub radial_weight: f64,
    #[arg(long, default_value_t = COVERAGE_WEIGHT)]
    pub coverage_weight: f64,

    // === RADIAL ===
    // Mean deviation equal to this fraction of the radius scores zero
    #[arg(long, default_value_t = RADIAL_TOLERANCE)]
    pub radial_tolerance: f64,
    #[arg(long, default_value_t = DEGENERATE_RADIUS)]
    pub degenerate_radius: f64,
    #[arg(long, default_value_t = MIN_SCORING_POINTS)]
    pub min_points: usize,

    // === CLOSURE ===
    #[arg(long, default_value_t = CLOSURE_FLOOR)]
    pub closure_floor: f64,
    #[arg(long, default_value_t = CLOSURE_RATIO)]
    pub closure_ratio: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            radial_weight: RADIAL_WEIGHT,
            coverage_weight: COVERAGE_WEIGHT,
            radial_tolerance: RADIAL_TOLERANCE,
            degenerate_radius: DEGENERATE_RADIUS,
            min_points: MIN_SCORING_POINTS,
            closure_floor: CLOSURE_FLOOR,
            closure_ratio: CLOSURE_RATIO,
        }
    }
}

impl ScoringWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights: Self = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    /// Rejects weight sets that would make the score meaningless or unstable.
    pub fn validate(&self) -> CfResult<()> {
        let reals = [
            ("radial_weight", self.radial_weight),
            ("coverage_weight", self.coverage_weight),
            ("radial_tolerance", self.radial_tolerance),
            ("degenerate_radius", self.degenerate_radius),
            ("closure_floor", self.closure_floor),
            ("closure_ratio", self.closure_ratio),
        ];
        for (name, value) in reals {
            if !value.is_finite() || value < 0.0 {
                return Err(CircleForgeError::Validation(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }
        if self.radial_tolerance == 0.0 {
            return Err(CircleForgeError::Validation(
                "radial_tolerance must be greater than zero".to_string(),
            ));
        }
        if self.radial_weight + self.coverage_weight == 0.0 {
            return Err(CircleForgeError::Validation(
                "radial_weight and coverage_weight cannot both be zero".to_string(),
            ));
        }
        if self.min_points < MIN_SCORING_POINTS {
            return Err(CircleForgeError::Validation(format!(
                "min_points must be at least {} (got {})",
                MIN_SCORING_POINTS, self.min_points
            )));
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(radial_weight, "radial_weight");
        update_if_present!(coverage_weight, "coverage_weight");

        update_if_present!(radial_tolerance, "radial_tolerance");
        update_if_present!(degenerate_radius, "degenerate_radius");
        update_if_present!(min_points, "min_points");

        update_if_present!(closure_floor, "closure_floor");
        update_if_present!(closure_ratio, "closure_ratio");
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionParams {
    #[arg(long, default_value_t = DEFAULT_LIVE_MIN_POINTS)]
    pub live_min_points: usize,
    #[arg(long, default_value_t = DEFAULT_DISPLAY_DECIMALS)]
    pub display_decimals: usize,
    #[arg(long, default_value = BEST_SCORE_KEY)]
    pub best_score_key: String,
    #[arg(long, default_value = DEFAULT_CHALLENGE_URL)]
    pub challenge_url: String,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            live_min_points: DEFAULT_LIVE_MIN_POINTS,
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
            best_score_key: BEST_SCORE_KEY.to_string(),
            challenge_url: DEFAULT_CHALLENGE_URL.to_string(),
        }
    }
}
