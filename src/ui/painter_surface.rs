//! `DrawSurface` on top of an egui painter

use crate::geometry::Point2D;
use crate::render::{DrawSurface, Pen};
use crate::theme;
use eframe::egui;
use eframe::egui::epaint::PathShape;

/// Buffers shapes between `begin_frame` and `end_frame`, then hands them to the painter.
/// Points are relative to `origin` (the top-left of the painted area).
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    pending: Vec<egui::Shape>,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self {
            painter,
            origin,
            pending: Vec::new(),
        }
    }

    fn to_screen(&self, p: Point2D) -> egui::Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn is_valid(&self) -> bool {
        let clip = self.painter.clip_rect();
        clip.is_finite() && clip.is_positive()
    }

    fn begin_frame(&mut self) {
        self.pending.clear();
    }

    fn end_frame(&mut self) {
        self.painter.extend(self.pending.drain(..));
    }

    fn draw_closed_polygon(&mut self, points: &[Point2D], pen: Pen) {
        let points: Vec<egui::Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        let stroke = egui::Stroke::new(pen.width, theme::color32(pen.color));
        self.pending.push(PathShape::closed_line(points, stroke).into());
    }
}
