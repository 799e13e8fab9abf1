/// Minimum number of points before a stroke has a measurable shape.
pub const MIN_SCORING_POINTS: usize = 3;

/// Minimum number of points before a live score is emitted while drawing.
pub const DEFAULT_LIVE_MIN_POINTS: usize = 3;

/// Average radius below which a stroke is treated as collapsed onto the center.
pub const DEGENERATE_RADIUS: f64 = 1e-3;

/// Relative radius wobble that still earns partial radial credit.
pub const RADIAL_TOLERANCE: f64 = 0.3;

/// Share of the final score given to radius consistency.
pub const RADIAL_WEIGHT: f64 = 0.7;

/// Share of the final score given to angular sweep.
pub const COVERAGE_WEIGHT: f64 = 0.3;

/// Absolute floor (surface units) of the start/end closure gap.
pub const CLOSURE_FLOOR: f64 = 20.0;

/// Closure gap allowed as a fraction of the average radius.
pub const CLOSURE_RATIO: f64 = 0.1;

/// Upper end of the score scale.
pub const MAX_SCORE: f64 = 100.0;

/// Storage key of the persisted best score.
pub const BEST_SCORE_KEY: &str = "bestScore";

/// Decimal places used when a score is shown to the player.
pub const DEFAULT_DISPLAY_DECIMALS: usize = 2;

/// Link appended to the shared challenge text.
pub const DEFAULT_CHALLENGE_URL: &str = "https://neal.fun/perfect-circle/";
