//! Reference strokes with known circularity, used to audit the scorer.

use crate::geometry::{Point, SurfaceDimensions};
use std::f64::consts::{PI, TAU};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownShape {
    Circle,
    DoubleLoop,
    Jittered,
    Wobbly,
    Ellipse,
    Square,
    HalfArc,
    QuarterArc,
    OpenCircle,
    Spiral,
    Line,
}

/// Radius of the reference shapes as a fraction of the shorter surface side.
const SHAPE_RADIUS_RATIO: f64 = 0.35;

impl KnownShape {
    /// Samples the shape on `surface`, centered on the surface center.
    ///
    /// `rng` only matters for `Jittered`; every other shape is deterministic.
    pub fn generate(
        &self,
        surface: SurfaceDimensions,
        samples: usize,
        rng: &mut fastrand::Rng,
    ) -> Vec<Point> {
        let c = surface.center();
        let r = surface.width.min(surface.height) * SHAPE_RADIUS_RATIO;
        let n = samples.max(2);

        match self {
            Self::Circle => arc(c, r, n, 0.0, TAU),
            Self::DoubleLoop => arc(c, r, n, 0.0, 2.0 * TAU),
            Self::HalfArc => arc(c, r, n, 0.0, PI),
            Self::QuarterArc => arc(c, r, n, 0.0, PI / 2.0),
            Self::OpenCircle => arc(c, r, n, 0.0, 1.75 * PI),
            Self::Ellipse => polar(c, n, TAU, |t| {
                Point::new(r * t.cos(), 0.6 * r * t.sin())
            }),
            Self::Wobbly => polar(c, n, TAU, |t| {
                let rr = r * (1.0 + 0.15 * (5.0 * t).sin());
                Point::new(rr * t.cos(), rr * t.sin())
            }),
            Self::Spiral => polar(c, n, TAU, |t| {
                let rr = r * (0.5 + 0.5 * t / TAU);
                Point::new(rr * t.cos(), rr * t.sin())
            }),
            Self::Square => square(c, r, n),
            Self::Line => (0..n)
                .map(|i| {
                    let t = i as f64 / (n - 1) as f64;
                    Point::new(c.x - r + 2.0 * r * t, c.y - r / 2.0)
                })
                .collect(),
            Self::Jittered => {
                let amp = 0.02 * r;
                arc(c, r, n, 0.0, TAU)
                    .into_iter()
                    .map(|p| {
                        Point::new(
                            p.x + (rng.f64() * 2.0 - 1.0) * amp,
                            p.y + (rng.f64() * 2.0 - 1.0) * amp,
                        )
                    })
                    .collect()
            }
        }
    }
}

/// `samples` points on a circular arc, both endpoints included.
pub fn arc(center: Point, radius: f64, samples: usize, start: f64, sweep: f64) -> Vec<Point> {
    if samples == 0 {
        return Vec::new();
    }
    if samples == 1 {
        return vec![Point::new(
            center.x + radius * start.cos(),
            center.y + radius * start.sin(),
        )];
    }
    (0..samples)
        .map(|i| {
            let t = start + sweep * i as f64 / (samples - 1) as f64;
            Point::new(center.x + radius * t.cos(), center.y + radius * t.sin())
        })
        .collect()
}

fn polar<F>(center: Point, samples: usize, sweep: f64, f: F) -> Vec<Point>
where
    F: Fn(f64) -> Point,
{
    (0..samples)
        .map(|i| {
            let offset = f(sweep * i as f64 / (samples - 1) as f64);
            Point::new(center.x + offset.x, center.y + offset.y)
        })
        .collect()
}

/// Closed square outline with half-side `half`, walked clockwise from the top-left corner.
fn square(center: Point, half: f64, samples: usize) -> Vec<Point> {
    let corners = [
        Point::new(center.x - half, center.y - half),
        Point::new(center.x + half, center.y - half),
        Point::new(center.x + half, center.y + half),
        Point::new(center.x - half, center.y + half),
    ];
    (0..samples)
        .map(|i| {
            let t = 4.0 * i as f64 / (samples - 1) as f64;
            let side = (t.floor() as usize).min(3);
            let frac = t - side as f64;
            let a = corners[side];
            let b = corners[(side + 1) % 4];
            Point::new(a.x + (b.x - a.x) * frac, a.y + (b.y - a.y) * frac)
        })
        .collect()
}

pub fn get_all_shapes(
    surface: SurfaceDimensions,
    samples: usize,
    seed: u64,
) -> Vec<(KnownShape, Vec<Point>)> {
    let mut rng = fastrand::Rng::with_seed(seed);
    KnownShape::iter()
        .map(|shape| (shape, shape.generate(surface, samples, &mut rng)))
        .collect()
}
