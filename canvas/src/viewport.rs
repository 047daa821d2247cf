//! Viewport controller: the only writer of the [`Camera`].
//!
//! Turns pan-button drags into incremental pans, wheel ticks into
//! anchor-preserving zoom steps, and recenter requests into a fresh offset.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::camera::{Camera, Point, Size, ZoomDirection};
use crate::config::ZoomLimits;

/// Context of an in-progress canvas pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSession {
    /// Screen position of the previous pointer sample; deltas are measured from here.
    pub last_screen: Point,
    /// Camera offset when the pan began.
    pub anchor_offset: Point,
}

/// Owns the camera and applies every transform change.
#[derive(Debug, Clone, Default)]
pub struct ViewportController {
    camera: Camera,
    limits: ZoomLimits,
}

impl ViewportController {
    /// Identity camera, with the initial scale saturated into `limits`.
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        let mut camera = Camera::default();
        camera.clamp_scale(&limits);
        Self { camera, limits }
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn limits(&self) -> &ZoomLimits {
        &self.limits
    }

    /// Start a pan with the pointer at `screen`.
    #[must_use]
    pub fn begin_pan(&self, screen: Point) -> PanSession {
        PanSession { last_screen: screen, anchor_offset: self.camera.offset() }
    }

    /// Pan by the movement since the previous sample, then make `screen` the
    /// new sample. Returns whether the camera moved.
    pub fn pan_to(&mut self, session: &mut PanSession, screen: Point) -> bool {
        let dx = screen.x - session.last_screen.x;
        let dy = screen.y - session.last_screen.y;
        session.last_screen = screen;
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        self.camera.pan(dx, dy);
        tracing::trace!(dx, dy, "pan");
        true
    }

    /// Log the net movement of a finished pan.
    pub fn end_pan(&self, session: &PanSession) {
        let offset = self.camera.offset();
        tracing::debug!(
            dx = offset.x - session.anchor_offset.x,
            dy = offset.y - session.anchor_offset.y,
            "pan finished"
        );
    }

    /// Apply one wheel tick at `pointer`. Only the sign of `dy` matters.
    /// Returns whether the scale changed.
    pub fn zoom(&mut self, pointer: Point, dy: f64) -> bool {
        let Some(direction) = ZoomDirection::from_wheel_dy(dy) else {
            return false;
        };
        let changed = self.camera.zoom_at_point(pointer, direction, &self.limits);
        tracing::trace!(?direction, scale = self.camera.scale(), changed, "zoom");
        changed
    }

    /// Center `content` in `viewport` at the current scale.
    pub fn recenter(&mut self, viewport: Size, content: Size) {
        self.camera.recenter(viewport, content);
        let offset = self.camera.offset();
        tracing::debug!(x = offset.x, y = offset.y, "recentered");
    }
}
