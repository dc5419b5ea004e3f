//! Per-redraw orchestration: center the hexagon, scope the surface, apply the failure policy

use crate::constants::HEXAGON_SIZE;
use crate::geometry::{CenterRule, GeometryError, Point2D, Polygon};
use crate::render::{render, DrawSurface};
use crate::settings::FailurePolicy;
use std::ops::{Deref, DerefMut};
use thiserror::Error;
use tracing::{error, info, trace};

/// A "repaint requested" notification carrying the viewport size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RedrawRequest {
    width: f32,
    height: f32,
}

impl RedrawRequest {
    /// `None` for sizes no frame can be drawn into (minimised, zero, NaN).
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        (usable(width) && usable(height)).then_some(Self { width, height })
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameSkip {
    #[error("redraw request is missing or has no usable viewport")]
    InvalidRequest,
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    Drawn(Polygon),
    Skipped(FrameSkip),
}

/// Holds a surface for one frame; `end_frame` runs on drop, whatever the exit path.
pub struct FrameGuard<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawSurface + ?Sized> FrameGuard<'a, S> {
    pub fn begin(surface: &'a mut S) -> Self {
        surface.begin_frame();
        Self { surface }
    }
}

impl<S: DrawSurface + ?Sized> Deref for FrameGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> DerefMut for FrameGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for FrameGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.end_frame();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameOrchestrator {
    pub policy: FailurePolicy,
    pub center_rule: CenterRule,
    /// Reason the previous frame was skipped, if it was
    last_skip: Option<FrameSkip>,
}

impl FrameOrchestrator {
    pub fn new(policy: FailurePolicy, center_rule: CenterRule) -> Self {
        Self { policy, center_rule, last_skip: None }
    }

    /// Record a skip; `true` only when it starts a new run of skipped frames.
    fn note_skip(&mut self, skip: FrameSkip) -> bool {
        self.last_skip.replace(skip) != Some(skip)
    }

    /// Draw one frame. An absent request is skipped without touching the surface.
    pub fn redraw<S: DrawSurface + ?Sized>(
        &mut self,
        request: Option<RedrawRequest>,
        surface: &mut S,
    ) -> FrameOutcome {
        let Some(request) = request else {
            let skip = FrameSkip::InvalidRequest;
            if self.note_skip(skip) {
                error!("Redraw request has no usable viewport, skipping frames");
            } else {
                trace!("Still no usable viewport");
            }
            return FrameOutcome::Skipped(skip);
        };

        let center = request.center();
        let result = {
            let mut frame = FrameGuard::begin(surface);
            render(&mut *frame, Some(center), HEXAGON_SIZE, self.center_rule)
        };
        match result {
            Ok(polygon) => {
                if let Some(skip) = self.last_skip.take() {
                    info!(after = %skip, "Drawing resumed");
                }
                trace!(x = center.x, y = center.y, "Hexagon drawn");
                FrameOutcome::Drawn(polygon)
            }
            Err(e) => self.on_geometry_error(e),
        }
    }

    /// Under `Abort` this panics rather than aborting, so unwinding drops the
    /// log writer guard and the error line reaches the log file.
    fn on_geometry_error(&mut self, e: GeometryError) -> FrameOutcome {
        match self.policy {
            FailurePolicy::SkipFrame => {
                let skip = FrameSkip::Geometry(e);
                if self.note_skip(skip) {
                    error!(error = %e, "Hexagon geometry rejected, skipping frames");
                } else {
                    trace!(error = %e, "Hexagon geometry still rejected");
                }
                FrameOutcome::Skipped(skip)
            }
            FailurePolicy::Abort => {
                error!(error = %e, "Hexagon geometry rejected, aborting");
                panic!("Hexagon geometry rejected: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::RecordingSurface;

    fn close(a: Point2D, b: Point2D) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn centers_on_viewport_midpoint() {
        let mut surface = RecordingSurface::default();
        let outcome = FrameOrchestrator::default().redraw(RedrawRequest::new(768.0, 768.0), &mut surface);

        let FrameOutcome::Drawn(v) = &outcome else { panic!("expected a drawn frame, got {outcome:?}") };
        assert_eq!(v[0], Point2D::new(384.0, 256.0));
        assert!(close(v[3], Point2D::new(384.0, 512.0)));
        assert_eq!(surface.polygons.len(), 1);
        assert_eq!((surface.begun, surface.ended), (1, 1));
    }

    #[test]
    fn resize_recenters_without_rescaling() {
        let mut orchestrator = FrameOrchestrator::default();
        let mut surface = RecordingSurface::default();

        let FrameOutcome::Drawn(small) = orchestrator.redraw(RedrawRequest::new(768.0, 768.0), &mut surface)
        else {
            panic!("first frame not drawn")
        };
        let FrameOutcome::Drawn(large) = orchestrator.redraw(RedrawRequest::new(1024.0, 1024.0), &mut surface)
        else {
            panic!("second frame not drawn")
        };

        assert_eq!(large[0], Point2D::new(512.0, 384.0));
        assert!(close(large[3], Point2D::new(512.0, 640.0)));
        for (a, b) in small.iter().zip(large.iter()) {
            assert!(close(Point2D::new(a.x + 128.0, a.y + 128.0), *b));
        }
    }

    #[test]
    fn non_square_viewport_uses_each_half() {
        let request = RedrawRequest::new(1000.0, 600.0).unwrap();
        assert_eq!(request.center(), Point2D::new(500.0, 300.0));
    }

    #[test]
    fn missing_request_skips_without_touching_surface() {
        let mut surface = RecordingSurface::default();
        let outcome = FrameOrchestrator::default().redraw(None, &mut surface);
        assert_eq!(outcome, FrameOutcome::Skipped(FrameSkip::InvalidRequest));
        assert_eq!((surface.begun, surface.ended), (0, 0));
        assert!(surface.polygons.is_empty());
    }

    #[test]
    fn unusable_viewports_are_rejected() {
        assert!(RedrawRequest::new(0.0, 768.0).is_none());
        assert!(RedrawRequest::new(768.0, -1.0).is_none());
        assert!(RedrawRequest::new(f32::NAN, 768.0).is_none());
        assert!(RedrawRequest::new(f32::INFINITY, 768.0).is_none());
    }

    #[test]
    fn invalid_surface_skips_and_still_ends_frame() {
        let mut surface = RecordingSurface { invalid: true, ..Default::default() };
        let outcome = FrameOrchestrator::default().redraw(RedrawRequest::new(768.0, 768.0), &mut surface);
        assert_eq!(outcome, FrameOutcome::Skipped(FrameSkip::Geometry(GeometryError::NullContext)));
        assert_eq!((surface.begun, surface.ended), (1, 1));
        assert!(surface.polygons.is_empty());
    }

    #[test]
    fn guard_ends_frame_on_early_exit() {
        let mut surface = RecordingSurface::default();
        {
            let _frame = FrameGuard::begin(&mut surface);
        }
        assert_eq!((surface.begun, surface.ended), (1, 1));
    }

    #[test]
    #[should_panic(expected = "Hexagon geometry rejected")]
    fn abort_policy_panics_on_invalid_surface() {
        let mut surface = RecordingSurface { invalid: true, ..Default::default() };
        FrameOrchestrator::new(FailurePolicy::Abort, CenterRule::Explicit)
            .redraw(RedrawRequest::new(768.0, 768.0), &mut surface);
    }

    #[test]
    fn abort_policy_ends_frame_before_unwinding() {
        let mut surface = RecordingSurface { invalid: true, ..Default::default() };
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            FrameOrchestrator::new(FailurePolicy::Abort, CenterRule::Explicit)
                .redraw(RedrawRequest::new(768.0, 768.0), &mut surface)
        }));
        assert!(result.is_err());
        assert_eq!((surface.begun, surface.ended), (1, 1));
        assert!(surface.polygons.is_empty());
    }

    #[test]
    fn repeated_skips_reported_once_per_run() {
        let mut orchestrator = FrameOrchestrator::default();
        assert!(orchestrator.note_skip(FrameSkip::InvalidRequest));
        assert!(!orchestrator.note_skip(FrameSkip::InvalidRequest));
        assert!(orchestrator.note_skip(FrameSkip::Geometry(GeometryError::NullContext)));

        let mut surface = RecordingSurface::default();
        orchestrator.redraw(None, &mut surface);
        orchestrator.redraw(None, &mut surface);
        assert_eq!(orchestrator.last_skip, Some(FrameSkip::InvalidRequest));

        let outcome = orchestrator.redraw(RedrawRequest::new(768.0, 768.0), &mut surface);
        assert!(matches!(outcome, FrameOutcome::Drawn(_)));
        assert_eq!(orchestrator.last_skip, None);
        assert!(orchestrator.note_skip(FrameSkip::InvalidRequest));
    }
}
