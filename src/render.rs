//! Hexagon renderer - turns a center and size into one closed-polygon draw call

use crate::constants::HEXAGON_PEN_WIDTH;
use crate::geometry::{CenterRule, GeometryError, HexagonSpec, Point2D, Polygon};

/// Straight (non-premultiplied) RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const BLACK: Self = Self([0, 0, 0, 255]);
}

/// Outline style for a polygon; polygons are never filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Rgba,
    pub width: f32,
}

impl Pen {
    /// Solid black outline, no fill
    pub const HEXAGON: Self = Self {
        color: Rgba::BLACK,
        width: HEXAGON_PEN_WIDTH,
    };
}

/// Frame-scoped target for draw commands.
///
/// Implemented by the toolkit adapter; the renderer only borrows it.
pub trait DrawSurface {
    /// `false` when the surface cannot accept draw commands this frame.
    fn is_valid(&self) -> bool {
        true
    }

    fn begin_frame(&mut self) {}

    fn end_frame(&mut self) {}

    /// Draw `points` as a closed polygon; the last point joins the first.
    fn draw_closed_polygon(&mut self, points: &[Point2D], pen: Pen);
}

/// Compute the hexagon and submit it to `surface`. Nothing is drawn on error.
pub fn render<S: DrawSurface + ?Sized>(
    surface: &mut S,
    center: Option<Point2D>,
    size: f32,
    rule: CenterRule,
) -> Result<Polygon, GeometryError> {
    if !surface.is_valid() {
        return Err(GeometryError::NullContext);
    }
    let spec = HexagonSpec::with_rule(center, size, rule)?;
    let polygon = spec.vertices();
    surface.draw_closed_polygon(&polygon, Pen::HEXAGON);
    Ok(polygon)
}
