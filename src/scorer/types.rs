use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub point_count: usize,

    // Radial
    pub avg_radius: f64,
    pub mean_deviation: f64,
    pub radial_score: f64, // 0..=1

    // Angular
    pub total_angle: f64, // radians
    pub coverage: f64,    // 0..=1

    // Top-line (0..=100)
    pub score: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosureCheck {
    pub gap: f64,
    pub threshold: f64,
    pub closed: bool,
}
