//! Item drag controller: moves the drag target, compensating for zoom.
//!
//! Pointer motion arrives in screen pixels while item positions are
//! content-local, so the screen delta is divided by the current scale. The
//! delta is always taken from the drag origin and applied to the position the
//! item had when the drag began, never accumulated sample by sample.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::camera::{Camera, Point};
use crate::doc::{Item, ItemId, ItemStore, Position};

/// Context of an in-progress item drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Item being dragged.
    pub id: ItemId,
    /// Screen position of the pointer-down that started the drag.
    pub origin_screen: Point,
    /// Content-local item position at the start of the drag.
    pub anchor: Position,
}

/// Start dragging `item` with the pointer at `screen`.
#[must_use]
pub fn begin_drag(item: &Item, screen: Point) -> DragSession {
    DragSession { id: item.id, origin_screen: screen, anchor: item.position }
}

/// Where the drag target belongs with the pointer at `screen`.
#[must_use]
pub fn drag_position(session: &DragSession, screen: Point, camera: &Camera) -> Position {
    let dx = camera.screen_dist_to_content(screen.x - session.origin_screen.x);
    let dy = camera.screen_dist_to_content(screen.y - session.origin_screen.y);
    session.anchor.offset_by(dx, dy)
}

/// Move the drag target to follow the pointer. Returns the new position, or
/// `None` when the target is no longer in the store.
pub(crate) fn drag_to(items: &mut ItemStore, session: &DragSession, screen: Point, camera: &Camera) -> Option<Position> {
    let position = drag_position(session, screen, camera);
    if !items.set_position(&session.id, position) {
        tracing::debug!(id = %session.id, "drag target missing");
        return None;
    }
    tracing::trace!(id = %session.id, left = position.left, top = position.top, "drag");
    Some(position)
}
