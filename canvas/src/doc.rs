//! Item model: the movable things on the canvas, the factory that creates
//! them, and the in-memory store that owns them.
//!
//! Items live in content-local coordinates. Only the drag controller moves
//! them, and only while the item is the active drag target. Items are never
//! removed; they live as long as the engine.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::{Point, Size};
use crate::config::ItemConfig;
use crate::consts::ITEM_NOMINAL_HEIGHT;

/// Unique identifier for an item.
pub type ItemId = Uuid;

/// The kind of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A labelled folder tile.
    Folder,
    /// An editable text note.
    Text,
    /// An image tile; `content` is the image URI.
    Image,
}

impl ItemKind {
    /// CSS class name for the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Text => "text",
            Self::Image => "image",
        }
    }

    /// Content used when the creator supplies none.
    fn default_content(self, defaults: &ItemConfig) -> String {
        match self {
            Self::Folder => "New Folder".to_owned(),
            Self::Text => "Sample Text".to_owned(),
            Self::Image => defaults.image_placeholder.clone(),
        }
    }
}

/// Top-left corner of an item in content-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

impl Position {
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// This position shifted by a content-space delta.
    #[must_use]
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self { left: self.left + dx, top: self.top + dy }
    }
}

/// An item on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Folder, text, or image.
    pub kind: ItemKind,
    /// Top-left corner in content-local coordinates.
    pub position: Position,
    /// Label text, or the image URI for image items.
    pub content: String,
    /// Whether the host should let the user edit the label in place.
    pub editable: bool,
    /// Fixed display width; height follows the content and overflow is clipped.
    pub width: f64,
    /// Creation sequence; items are drawn in ascending order.
    pub z: i64,
}

impl Item {
    /// Content-local point inside the item's nominal footprint.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.position.left
            && pt.x <= self.position.left + self.width
            && pt.y >= self.position.top
            && pt.y <= self.position.top + ITEM_NOMINAL_HEIGHT
    }
}

/// Builds items with the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct ItemFactory {
    defaults: ItemConfig,
    next_z: i64,
}

impl ItemFactory {
    #[must_use]
    pub fn new(defaults: ItemConfig) -> Self {
        Self { defaults, next_z: 0 }
    }

    /// Create an item of `kind` at the default position.
    ///
    /// `content` overrides the label (or image URI); `None` or an empty string
    /// falls back to the kind's default. Only text items are editable.
    pub fn create(&mut self, kind: ItemKind, content: Option<String>) -> Item {
        let content = content
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| kind.default_content(&self.defaults));
        let z = self.next_z;
        self.next_z += 1;
        Item {
            id: Uuid::new_v4(),
            kind,
            position: Position::new(self.defaults.left, self.defaults.top),
            content,
            editable: kind == ItemKind::Text,
            width: self.defaults.width,
            z,
        }
    }
}

/// In-memory store of items.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: HashMap<ItemId, Item>,
}

impl ItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { items: HashMap::new() }
    }

    /// Insert or replace an item.
    pub fn insert(&mut self, item: Item) {
        self.items.insert(item.id, item);
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Move an item. Returns false if the item doesn't exist.
    pub(crate) fn set_position(&mut self, id: &ItemId, position: Position) -> bool {
        let Some(item) = self.items.get_mut(id) else {
            return false;
        };
        item.position = position;
        true
    }

    /// Return all items sorted by `(z, id)` for draw order.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by(|a, b| a.z.cmp(&b.z).then_with(|| a.id.cmp(&b.id)));
        items
    }

    /// Extent of the content layer: from the content origin to the furthest
    /// right and bottom item edge. Empty store yields a zero size.
    #[must_use]
    pub fn extent(&self) -> Size {
        self.items.values().fold(Size::default(), |acc, item| Size {
            width: acc.width.max(item.position.left + item.width),
            height: acc.height.max(item.position.top + ITEM_NOMINAL_HEIGHT),
        })
    }

    /// Number of items currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
