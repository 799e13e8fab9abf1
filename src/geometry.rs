use crate::error::{CfResult, CircleForgeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A sampled pointer location in surface-local pixels (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Four-quadrant bearing of this point as seen from `center`, in (-π, π].
    #[inline(always)]
    pub fn bearing_from(&self, center: Point) -> f64 {
        (self.y - center.y).atan2(self.x - center.x)
    }

    /// Moves the point along its ray from `center` by factor `k`.
    pub fn scaled_about(&self, center: Point, k: f64) -> Point {
        Point {
            x: center.x + (self.x - center.x) * k,
            y: center.y + (self.y - center.y) * k,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Current size of the drawing area. The scorer measures against its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDimensions {
    pub width: f64,
    pub height: f64,
}

impl SurfaceDimensions {
    pub fn new(width: f64, height: f64) -> CfResult<Self> {
        let dims = Self { width, height };
        dims.validate()?;
        Ok(dims)
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn validate(&self) -> CfResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(CircleForgeError::Validation(format!(
                "Surface dimensions must be finite (got {}x{})",
                self.width, self.height
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(CircleForgeError::Validation(format!(
                "Surface dimensions must be positive (got {}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for SurfaceDimensions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// A recorded stroke together with the surface it was drawn on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeFile {
    pub width: f64,
    pub height: f64,
    pub points: Vec<Point>,
}

impl StrokeFile {
    pub fn new(surface: SurfaceDimensions, points: Vec<Point>) -> Self {
        Self {
            width: surface.width,
            height: surface.height,
            points,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> CfResult<Self> {
        let stroke: StrokeFile = serde_json::from_str(content)?;
        stroke.surface()?;
        if let Some(i) = stroke.points.iter().position(|p| !p.is_finite()) {
            return Err(CircleForgeError::Validation(format!(
                "Point #{} has a non-finite coordinate",
                i
            )));
        }
        Ok(stroke)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> CfResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn surface(&self) -> CfResult<SurfaceDimensions> {
        SurfaceDimensions::new(self.width, self.height)
    }
}
