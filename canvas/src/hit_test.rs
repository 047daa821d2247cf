use super::*;
use crate::config::ItemConfig;
use crate::doc::{ItemFactory, ItemKind, Position};

fn store_with(positions: &[(f64, f64)]) -> (ItemStore, Vec<ItemId>) {
    let mut factory = ItemFactory::new(ItemConfig::default());
    let mut store = ItemStore::new();
    let mut ids = Vec::new();
    for &(left, top) in positions {
        let mut item = factory.create(ItemKind::Folder, None);
        item.position = Position::new(left, top);
        ids.push(item.id);
        store.insert(item);
    }
    (store, ids)
}

#[test]
fn empty_store_hits_canvas() {
    let store = ItemStore::new();
    assert_eq!(target_at(Point::new(100.0, 100.0), &store, &Camera::default()), PointerTarget::Canvas);
}

#[test]
fn point_inside_item_hits_it() {
    let (store, ids) = store_with(&[(100.0, 100.0)]);
    assert_eq!(item_at(Point::new(150.0, 110.0), &store, &Camera::default()), Some(ids[0]));
}

#[test]
fn point_outside_items_misses() {
    let (store, _) = store_with(&[(100.0, 100.0)]);
    assert_eq!(item_at(Point::new(10.0, 10.0), &store, &Camera::default()), None);
}

#[test]
fn overlapping_items_hit_topmost() {
    let (store, ids) = store_with(&[(100.0, 100.0), (110.0, 105.0)]);
    assert_eq!(item_at(Point::new(150.0, 120.0), &store, &Camera::default()), Some(ids[1]));
}

#[test]
fn hit_respects_camera_transform() {
    let (store, ids) = store_with(&[(100.0, 100.0)]);
    let cam = Camera::new(Point::new(50.0, 50.0), 2.0);
    // content (100, 100) is at screen (250, 250)
    assert_eq!(item_at(Point::new(255.0, 255.0), &store, &cam), Some(ids[0]));
    assert_eq!(item_at(Point::new(150.0, 150.0), &store, &cam), None);
}

#[test]
fn target_at_wraps_item() {
    let (store, ids) = store_with(&[(0.0, 0.0)]);
    assert_eq!(target_at(Point::new(5.0, 5.0), &store, &Camera::default()), PointerTarget::Item(ids[0]));
}
