use crate::geometry::Point;
use std::f64::consts::{PI, TAU};

/// Bearings of every point around `center`, phase-unwrapped so that
/// consecutive samples never differ by more than π.
pub fn unwrap_angles(points: &[Point], center: Point) -> Vec<f64> {
    let mut unwrapped = Vec::with_capacity(points.len());
    let mut prev_raw = match points.first() {
        Some(p) => p.bearing_from(center),
        None => return unwrapped,
    };
    let mut acc = prev_raw;
    unwrapped.push(acc);

    for p in &points[1..] {
        let raw = p.bearing_from(center);
        let mut d = raw - prev_raw;
        if d > PI {
            d -= TAU;
        } else if d < -PI {
            d += TAU;
        }
        acc += d;
        unwrapped.push(acc);
        prev_raw = raw;
    }
    unwrapped
}

/// Absolute angle swept between the first and last sample, in radians.
pub fn total_sweep(points: &[Point], center: Point) -> f64 {
    let unwrapped = unwrap_angles(points, center);
    match (unwrapped.first(), unwrapped.last()) {
        (Some(first), Some(last)) => (last - first).abs(),
        _ => 0.0,
    }
}

/// Fraction of a full revolution, capped at one.
#[inline(always)]
pub fn coverage(total_angle: f64) -> f64 {
    (total_angle / TAU).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_unit_circle(theta: f64) -> Point {
        Point::new(theta.cos(), theta.sin())
    }

    #[test]
    fn test_unwrap_crosses_branch_cut() {
        // 170° -> -170° is a +20° step, not -340°
        let center = Point::new(0.0, 0.0);
        let points = [
            on_unit_circle(170f64.to_radians()),
            on_unit_circle(-170f64.to_radians()),
        ];
        let sweep = total_sweep(&points, center);
        assert!((sweep - 20f64.to_radians()).abs() < 1e-9, "sweep {}", sweep);
    }

    #[test]
    fn test_clockwise_sweep_is_positive() {
        let center = Point::new(0.0, 0.0);
        let points: Vec<Point> = (0..=8)
            .map(|i| on_unit_circle(-(i as f64) * PI / 8.0))
            .collect();
        let sweep = total_sweep(&points, center);
        assert!((sweep - PI).abs() < 1e-9);
    }

    #[test]
    fn test_back_and_forth_cancels() {
        let center = Point::new(0.0, 0.0);
        let points = [
            on_unit_circle(0.0),
            on_unit_circle(1.0),
            on_unit_circle(2.0),
            on_unit_circle(1.0),
            on_unit_circle(0.0),
        ];
        assert!(total_sweep(&points, center) < 1e-12);
    }

    #[test]
    fn test_coverage_caps_at_one() {
        assert_eq!(coverage(3.0 * TAU), 1.0);
        assert!((coverage(PI) - 0.5).abs() < 1e-12);
        assert_eq!(coverage(0.0), 0.0);
    }

    #[test]
    fn test_empty_and_single() {
        let center = Point::new(0.0, 0.0);
        assert!(unwrap_angles(&[], center).is_empty());
        assert_eq!(total_sweep(&[Point::new(1.0, 1.0)], center), 0.0);
    }
}
