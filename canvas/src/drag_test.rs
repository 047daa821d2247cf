#![allow(clippy::float_cmp)]

use super::*;
use crate::config::ItemConfig;
use crate::doc::{ItemFactory, ItemKind};

const EPSILON: f64 = 1e-9;

fn position_approx_eq(a: Position, b: Position) -> bool {
    (a.left - b.left).abs() < EPSILON && (a.top - b.top).abs() < EPSILON
}

fn store_with_item() -> (ItemStore, Item) {
    let mut store = ItemStore::new();
    let item = ItemFactory::new(ItemConfig::default()).create(ItemKind::Folder, None);
    store.insert(item.clone());
    (store, item)
}

fn camera_at(scale: f64) -> Camera {
    Camera::new(Point::new(0.0, 0.0), scale)
}

// =============================================================
// begin_drag
// =============================================================

#[test]
fn begin_drag_records_origin_and_anchor() {
    let (_, item) = store_with_item();
    let session = begin_drag(&item, Point::new(10.0, 10.0));
    assert_eq!(session.id, item.id);
    assert_eq!(session.origin_screen, Point::new(10.0, 10.0));
    assert_eq!(session.anchor, Position::new(100.0, 100.0));
}

// =============================================================
// drag_position
// =============================================================

#[test]
fn drag_position_at_unit_scale() {
    let (_, item) = store_with_item();
    let session = begin_drag(&item, Point::new(0.0, 0.0));
    let pos = drag_position(&session, Point::new(25.0, -5.0), &camera_at(1.0));
    assert_eq!(pos, Position::new(125.0, 95.0));
}

#[test]
fn drag_position_divides_by_scale() {
    let (_, item) = store_with_item();
    let session = begin_drag(&item, Point::new(10.0, 10.0));
    let pos = drag_position(&session, Point::new(30.0, 25.0), &camera_at(2.0));
    assert!(position_approx_eq(pos, Position::new(110.0, 107.5)));
}

#[test]
fn drag_position_ignores_camera_offset() {
    let (_, item) = store_with_item();
    let session = begin_drag(&item, Point::new(0.0, 0.0));
    let panned = Camera::new(Point::new(-300.0, 450.0), 0.5);
    let pos = drag_position(&session, Point::new(10.0, 20.0), &panned);
    assert!(position_approx_eq(pos, Position::new(120.0, 140.0)));
}

// =============================================================
// drag_to
// =============================================================

#[test]
fn drag_to_writes_store() {
    let (mut store, item) = store_with_item();
    let session = begin_drag(&item, Point::new(10.0, 10.0));
    let pos = drag_to(&mut store, &session, Point::new(30.0, 25.0), &camera_at(2.0));
    assert!(pos.is_some());
    let stored = store.get(&item.id).map(|i| i.position).unwrap();
    assert!(position_approx_eq(stored, Position::new(110.0, 107.5)));
}

#[test]
fn drag_to_is_path_independent() {
    let (mut a, item_a) = store_with_item();
    let (mut b, item_b) = store_with_item();
    let cam = camera_at(1.3);
    let sa = begin_drag(&item_a, Point::new(0.0, 0.0));
    let sb = begin_drag(&item_b, Point::new(0.0, 0.0));

    drag_to(&mut a, &sa, Point::new(91.0, -37.0), &cam);
    for step in 1..=13 {
        let t = f64::from(step) / 13.0;
        drag_to(&mut b, &sb, Point::new(91.0 * t, -37.0 * t), &cam);
    }

    let pa = a.get(&item_a.id).map(|i| i.position).unwrap();
    let pb = b.get(&item_b.id).map(|i| i.position).unwrap();
    assert!(position_approx_eq(pa, pb));
    assert!(position_approx_eq(pa, Position::new(100.0 + 91.0 / 1.3, 100.0 - 37.0 / 1.3)));
}

#[test]
fn drag_back_to_origin_restores_anchor() {
    let (mut store, item) = store_with_item();
    let session = begin_drag(&item, Point::new(50.0, 50.0));
    drag_to(&mut store, &session, Point::new(80.0, 10.0), &camera_at(0.7));
    drag_to(&mut store, &session, Point::new(50.0, 50.0), &camera_at(0.7));
    assert_eq!(store.get(&item.id).map(|i| i.position), Some(Position::new(100.0, 100.0)));
}

#[test]
fn drag_to_missing_item_is_noop() {
    let (_, item) = store_with_item();
    let mut empty = ItemStore::new();
    let session = begin_drag(&item, Point::new(0.0, 0.0));
    assert!(drag_to(&mut empty, &session, Point::new(5.0, 5.0), &camera_at(1.0)).is_none());
    assert!(empty.is_empty());
}
