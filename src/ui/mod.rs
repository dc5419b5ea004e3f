//! UI module - egui side of the drawing seam

pub mod painter_surface;
