//! Rendering: turns engine state into a [`RenderFrame`] and applies frames to
//! the DOM.
//!
//! [`RenderFrame`] is plain data (no browser types) so native hosts and tests
//! can inspect exactly what a browser would be told. The `apply_*` and
//! `build_*` functions are the only code that touches `web_sys` elements;
//! they read frames and items and never mutate engine state.
//!
//! All fallible DOM calls propagate errors via `Result<_, JsValue>`. The
//! caller ([`crate::engine::Engine`]) decides what to do with them.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::camera::{Camera, Point};
use crate::config::GridConfig;
use crate::consts::{CURSOR_ACTIVE, CURSOR_IDLE};
use crate::doc::{Item, ItemId, ItemKind, ItemStore};
use crate::input::Mode;

/// Attribute carrying the item id on its DOM element.
pub const ITEM_ID_ATTR: &str = "data-item-id";

/// Where and how large one item is drawn, in content-local units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemPlacement {
    pub id: ItemId,
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

/// Everything the display needs to reflect the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    /// Screen position of the content origin.
    pub offset: Point,
    /// Content scale.
    pub scale: f64,
    /// Grid tile edge on screen; the grid tracks `scale`.
    pub grid_tile_px: f64,
    /// Cursor for the canvas container.
    pub cursor: &'static str,
    /// Items in draw order.
    pub items: Vec<ItemPlacement>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(camera: &Camera, grid: &GridConfig, items: &ItemStore, mode: Mode) -> Self {
        Self {
            offset: camera.offset(),
            scale: camera.scale(),
            grid_tile_px: grid.tile_px * camera.scale(),
            cursor: cursor_for(mode),
            items: items
                .sorted_items()
                .into_iter()
                .map(|item| ItemPlacement {
                    id: item.id,
                    left: item.position.left,
                    top: item.position.top,
                    width: item.width,
                })
                .collect(),
        }
    }

    /// CSS `transform` for the content layer.
    #[must_use]
    pub fn content_transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.offset.x, self.offset.y, self.scale)
    }

    /// CSS `background-position` for the grid, locked to the content offset.
    #[must_use]
    pub fn background_position(&self) -> String {
        format!("{}px {}px", self.offset.x, self.offset.y)
    }

    /// CSS `background-size` for the grid, locked to the content scale.
    #[must_use]
    pub fn background_size(&self) -> String {
        format!("{0}px {0}px", self.grid_tile_px)
    }
}

/// Cursor shown over the canvas in `mode`.
#[must_use]
pub fn cursor_for(mode: Mode) -> &'static str {
    match mode {
        Mode::Idle => CURSOR_IDLE,
        Mode::Panning | Mode::DraggingItem => CURSOR_ACTIVE,
    }
}

/// Apply the view transform, grid, and cursor.
///
/// # Errors
///
/// Returns `Err` if a style property cannot be set.
pub fn apply_view(container: &HtmlElement, content: &HtmlElement, frame: &RenderFrame) -> Result<(), JsValue> {
    let content_style = content.style();
    content_style.set_property("transform-origin", "0 0")?;
    content_style.set_property("transform", &frame.content_transform())?;

    let container_style = container.style();
    container_style.set_property("background-position", &frame.background_position())?;
    container_style.set_property("background-size", &frame.background_size())?;
    container_style.set_property("cursor", frame.cursor)?;
    Ok(())
}

/// Move an item's element to its placement.
///
/// # Errors
///
/// Returns `Err` if a style property cannot be set.
pub fn apply_item(element: &HtmlElement, placement: &ItemPlacement) -> Result<(), JsValue> {
    let style = element.style();
    style.set_property("left", &format!("{}px", placement.left))?;
    style.set_property("top", &format!("{}px", placement.top))?;
    Ok(())
}

/// Build the DOM element for a freshly created item.
///
/// The element is absolutely positioned with a fixed width, automatic height,
/// and clipped overflow. Image items wrap an `<img>` that ignores pointer
/// events so presses land on the item itself.
///
/// # Errors
///
/// Returns `Err` if an element cannot be created or configured.
pub fn build_item_element(document: &Document, item: &Item) -> Result<HtmlElement, JsValue> {
    let element = document.create_element("div")?.dyn_into::<HtmlElement>().map_err(JsValue::from)?;
    element.set_class_name(&format!("item {} draggable", item.kind.as_str()));
    element.set_attribute(ITEM_ID_ATTR, &item.id.to_string())?;

    match item.kind {
        ItemKind::Folder | ItemKind::Text => {
            element.set_inner_text(&item.content);
            if item.editable {
                element.set_content_editable("true");
            }
        }
        ItemKind::Image => {
            let img = document.create_element("img")?.dyn_into::<HtmlImageElement>().map_err(JsValue::from)?;
            img.set_src(&item.content);
            img.style().set_property("pointer-events", "none")?;
            img.style().set_property("max-width", "100%")?;
            element.append_child(&img)?;
        }
    }

    let style = element.style();
    style.set_property("position", "absolute")?;
    style.set_property("width", &format!("{}px", item.width))?;
    style.set_property("height", "auto")?;
    style.set_property("overflow", "hidden")?;
    style.set_property("z-index", &item.z.to_string())?;
    Ok(element)
}
