//! Centralized theme constants for Hexagon Draw Test

use crate::render::Rgba;
use egui::Color32;

// =============================================================================
// COLORS
// =============================================================================
/// Light canvas so the black outline stays visible
pub const BG_CANVAS: Color32 = Color32::from_rgb(0xef, 0xef, 0xef);

pub fn color32(Rgba([r, g, b, a]): Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        panel_fill: BG_CANVAS,
        window_fill: BG_CANVAS,
        ..egui::Visuals::light()
    });
}
