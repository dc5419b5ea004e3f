//! Hexagon vertex computation
//!
//! Pure coordinate geometry with no dependency on any windowing toolkit.

use serde::Deserialize;
use thiserror::Error;

/// "long-leg" : "short-leg" (1:2)
pub const LONG_SHORT_RATIO: f32 = 1.0 / 2.0;
/// "long-leg" : "short-start" (1:4)
pub const SHORT_START_RATIO: f32 = 1.0 / 4.0;
/// "half-width" : "short-leg" (0.86:1). Approximate on purpose, not sqrt(3)/2.
pub const HALF_WIDTH_RATIO: f32 = 0.86;

pub const HEXAGON_VERTEX_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Both coordinates exactly zero
    pub fn is_null(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Six vertices, clockwise starting from the top one
pub type Polygon = [Point2D; HEXAGON_VERTEX_COUNT];

/// Why a hexagon could not be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("drawing surface is not valid for this frame")]
    NullContext,
    #[error("hexagon center is missing or not finite")]
    InvalidCenter,
    #[error("hexagon size must be positive")]
    NonPositiveSize,
}

/// How a supplied center is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterRule {
    /// Only an absent center is invalid; the origin is an ordinary point.
    #[default]
    Explicit,
    /// The origin doubles as "no center" and is rejected.
    NullSentinel,
}

impl CenterRule {
    pub fn accept(self, center: Option<Point2D>) -> Option<Point2D> {
        match (self, center) {
            (_, Some(c)) if !c.is_finite() => None,
            (CenterRule::NullSentinel, Some(c)) if c.is_null() => None,
            (_, c) => c,
        }
    }
}

/// A validated center and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexagonSpec {
    center: Point2D,
    size: f32,
}

impl HexagonSpec {
    pub fn with_rule(
        center: Option<Point2D>,
        size: f32,
        rule: CenterRule,
    ) -> Result<Self, GeometryError> {
        let center = rule.accept(center).ok_or(GeometryError::InvalidCenter)?;
        // NaN fails this comparison too
        if !(size > 0.0 && size.is_finite()) {
            return Err(GeometryError::NonPositiveSize);
        }
        Ok(Self { center, size })
    }

    /// Pointed-top hexagon, long axis vertical. Each vertex is stepped from
    /// the previous one, so rounding follows the same path on every call.
    pub fn vertices(&self) -> Polygon {
        let size = self.size;
        let half_height = size / 2.0;
        let across = (size * LONG_SHORT_RATIO) * HALF_WIDTH_RATIO;
        let short_start = size * SHORT_START_RATIO;
        let long_leg = size * LONG_SHORT_RATIO;

        let mut pts = [Point2D::ORIGIN; HEXAGON_VERTEX_COUNT];

        let mut x = self.center.x;
        let mut y = self.center.y - half_height;
        pts[0] = Point2D::new(x, y);

        // Top-right
        x += across;
        y += short_start;
        pts[1] = Point2D::new(x, y);

        // Bottom-right
        y += long_leg;
        pts[2] = Point2D::new(x, y);

        // Bottom
        x -= across;
        y += short_start;
        pts[3] = Point2D::new(x, y);

        // Bottom-left
        x -= across;
        y -= short_start;
        pts[4] = Point2D::new(x, y);

        // Top-left
        y -= long_leg;
        pts[5] = Point2D::new(x, y);

        pts
    }
}
