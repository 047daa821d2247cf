//! Transform state: pan offset and scale of the content layer.
//!
//! The content layer is drawn as `translate(offset) scale(scale)` with its
//! transform origin at the top-left corner, so a content-local point `c`
//! appears on screen at `c * scale + offset`.
//!
//! Only [`crate::viewport`] mutates a [`Camera`]; everyone else gets a copy or
//! a shared reference and can only read it.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::config::ZoomLimits;

/// A point in either screen or content space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a box, in whatever space the caller is working in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Zoom direction of a single wheel tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Direction implied by a vertical wheel delta. Scrolling up zooms in.
    /// A zero delta carries no direction.
    #[must_use]
    pub fn from_wheel_dy(dy: f64) -> Option<Self> {
        if dy < 0.0 {
            Some(Self::In)
        } else if dy > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    fn sign(self) -> f64 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }
}

/// Pan/zoom state of the canvas.
///
/// `offset` is the screen position (CSS pixels, relative to the canvas
/// container) of the content origin. `scale` is the zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    offset_x: f64,
    offset_y: f64,
    scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: 1.0 }
    }
}

impl Camera {
    #[must_use]
    pub fn new(offset: Point, scale: f64) -> Self {
        Self { offset_x: offset.x, offset_y: offset.y, scale }
    }

    /// Screen position of the content origin.
    #[must_use]
    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Convert a screen-space point to content-local coordinates.
    #[must_use]
    pub fn screen_to_content(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset_x) / self.scale,
            y: (screen.y - self.offset_y) / self.scale,
        }
    }

    /// Convert a content-local point to screen coordinates.
    #[must_use]
    pub fn content_to_screen(&self, content: Point) -> Point {
        Point {
            x: content.x * self.scale + self.offset_x,
            y: content.y * self.scale + self.offset_y,
        }
    }

    /// Convert a screen-space distance to a content-space distance.
    #[must_use]
    pub fn screen_dist_to_content(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }

    /// Translate the content by a screen-space delta. Unbounded.
    pub(crate) fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Step the scale one tick in `direction`, keeping the content point under
    /// `pointer` fixed on screen. Returns whether the scale changed.
    ///
    /// At a bound the step saturates and the offset update degenerates to a
    /// no-op (scale ratio of 1).
    #[allow(clippy::float_cmp)]
    pub(crate) fn zoom_at_point(&mut self, pointer: Point, direction: ZoomDirection, limits: &ZoomLimits) -> bool {
        let new_scale = limits.clamp(self.scale + direction.sign() * limits.step);
        let ratio = if new_scale == self.scale { 1.0 } else { new_scale / self.scale };

        self.offset_x += (pointer.x - self.offset_x) * (1.0 - ratio);
        self.offset_y += (pointer.y - self.offset_y) * (1.0 - ratio);
        let changed = new_scale != self.scale;
        self.scale = new_scale;
        changed
    }

    /// Center a `content`-sized box (content-local units, anchored at the
    /// content origin) in a `viewport`-sized screen area at the current scale.
    pub(crate) fn recenter(&mut self, viewport: Size, content: Size) {
        self.offset_x = (viewport.width - content.width * self.scale) / 2.0;
        self.offset_y = (viewport.height - content.height * self.scale) / 2.0;
    }

    /// Force the scale into `limits`, leaving the offset untouched.
    pub(crate) fn clamp_scale(&mut self, limits: &ZoomLimits) {
        self.scale = limits.clamp(self.scale);
    }
}
