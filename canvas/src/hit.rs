//! Hit-testing for hosts that cannot tell which item a pointer event landed
//! on (a DOM host reads it from the event target instead).

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::doc::{ItemId, ItemStore};
use crate::input::PointerTarget;

/// Topmost item whose footprint contains the screen point, if any.
#[must_use]
pub fn item_at(screen_pt: Point, items: &ItemStore, camera: &Camera) -> Option<ItemId> {
    let content_pt = camera.screen_to_content(screen_pt);
    items
        .sorted_items()
        .into_iter()
        .rev()
        .find(|item| item.contains(content_pt))
        .map(|item| item.id)
}

/// Resolve a screen point to a pointer target.
#[must_use]
pub fn target_at(screen_pt: Point, items: &ItemStore, camera: &Camera) -> PointerTarget {
    item_at(screen_pt, items, camera).map_or(PointerTarget::Canvas, PointerTarget::Item)
}
