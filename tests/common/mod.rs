#![allow(dead_code)]

use circleforge::geometry::{Point, SurfaceDimensions};
use circleforge::input::{InputEvent, InputSource};
use circleforge::shapes;
use std::f64::consts::TAU;

pub const EPS: f64 = 1e-9;

pub fn surface() -> SurfaceDimensions {
    SurfaceDimensions::new(800.0, 600.0).unwrap()
}

/// Closed circle around the surface center, first and last samples coincide.
pub fn closed_circle(surface: SurfaceDimensions, radius: f64, samples: usize) -> Vec<Point> {
    shapes::arc(surface.center(), radius, samples, 0.0, TAU)
}

/// Down on the first point, a move per remaining point, then up.
pub fn stroke_events(points: &[Point], source: InputSource) -> Vec<InputEvent> {
    let mut events = Vec::with_capacity(points.len() + 1);
    if let Some((&first, rest)) = points.split_first() {
        events.push(InputEvent::Down { source, at: first });
        events.extend(rest.iter().map(|&at| InputEvent::Move { source, at }));
        events.push(InputEvent::Up { source });
    }
    events
}

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {} ± {}, got {}",
        expected,
        tol,
        actual
    );
}
