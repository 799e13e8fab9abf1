use crate::geometry::Point;

/// Distance statistics of a stroke around a fixed center.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RadialProfile {
    pub avg_radius: f64,
    pub mean_deviation: f64,
}

/// Arithmetic mean of the point distances to `center`. Zero for an empty stroke.
pub fn average_radius(points: &[Point], center: Point) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let total: f64 = points.iter().map(|p| p.distance_to(center)).sum();
    total / points.len() as f64
}

pub fn radial_profile(points: &[Point], center: Point) -> RadialProfile {
    if points.is_empty() {
        return RadialProfile::default();
    }
    let radii: Vec<f64> = points.iter().map(|p| p.distance_to(center)).collect();
    let n = radii.len() as f64;
    let avg_radius = radii.iter().sum::<f64>() / n;
    let mean_deviation = radii.iter().map(|r| (r - avg_radius).abs()).sum::<f64>() / n;

    RadialProfile {
        avg_radius,
        mean_deviation,
    }
}

/// `1 - deviation / (tolerance * radius)`, floored at zero.
///
/// The caller guarantees a non-degenerate radius.
pub fn radial_score(profile: &RadialProfile, tolerance: f64) -> f64 {
    (1.0 - profile.mean_deviation / (profile.avg_radius * tolerance)).max(0.0)
}
