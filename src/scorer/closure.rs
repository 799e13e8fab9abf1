use super::radial::average_radius;
use super::types::ClosureCheck;
use crate::geometry::Point;

/// Decides whether the stroke ends close enough to where it started.
///
/// The allowed gap grows with the stroke (`ratio * avgR`) but never drops
/// below `floor`. A gap exactly equal to the threshold still counts as closed.
pub fn check_closure(points: &[Point], center: Point, floor: f64, ratio: f64) -> ClosureCheck {
    let avg_radius = average_radius(points, center);
    let threshold = floor.max(avg_radius * ratio);

    let (first, last) = match (points.first(), points.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => {
            return ClosureCheck {
                gap: 0.0,
                threshold,
                closed: false,
            }
        }
    };

    let gap = first.distance_to(last);
    ClosureCheck {
        gap,
        threshold,
        closed: gap <= threshold,
    }
}
