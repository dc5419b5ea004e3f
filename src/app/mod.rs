//! App module - window state and the per-frame repaint hook

pub mod frame;

use crate::settings::Settings;
use crate::theme;
use crate::ui::painter_surface::PainterSurface;
use eframe::egui;
use frame::{FrameOrchestrator, FrameOutcome, RedrawRequest};
use tracing::{debug, info};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) orchestrator: FrameOrchestrator,
    pub(crate) frames_drawn: u64,
    pub(crate) frames_skipped: u64,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        Self::with_context(&cc.egui_ctx, settings)
    }

    pub(crate) fn with_context(ctx: &egui::Context, settings: Settings) -> Self {
        theme::apply_visuals(ctx);
        debug!(
            policy = ?settings.on_invalid_geometry,
            center_rule = ?settings.center_rule,
            "Frame orchestrator configured"
        );
        Self {
            orchestrator: FrameOrchestrator::new(settings.on_invalid_geometry, settings.center_rule),
            frames_drawn: 0,
            frames_skipped: 0,
        }
    }

    /// Paint the canvas panel. The panel's rect is the viewport the hexagon is centered in.
    pub(crate) fn show_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::BG_CANVAS))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let request = RedrawRequest::new(rect.width(), rect.height());
                let mut surface = PainterSurface::new(ui.painter(), rect.min);
                match self.orchestrator.redraw(request, &mut surface) {
                    FrameOutcome::Drawn(_) => self.frames_drawn += 1,
                    FrameOutcome::Skipped(reason) => {
                        self.frames_skipped += 1;
                        debug!(%reason, skipped = self.frames_skipped, "Frame skipped");
                    }
                }
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_canvas(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(
            drawn = self.frames_drawn,
            skipped = self.frames_skipped,
            "Application shutting down"
        );
    }
}
