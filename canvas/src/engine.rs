use std::collections::HashMap;

use uuid::Uuid;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use crate::camera::{Camera, Point, Size};
use crate::config::{CanvasConfig, ConfigError};
use crate::doc::{Item, ItemFactory, ItemId, ItemKind, ItemStore, Position};
use crate::drag;
use crate::hit;
use crate::input::{Button, InputState, Mode, PointerTarget, WheelDelta};
use crate::render::{self, ITEM_ID_ATTR, RenderFrame};
use crate::viewport::ViewportController;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ItemCreated(Item),
    ItemMoved { id: ItemId, position: Position },
    SetCursor(String),
    /// Suppress the platform default for the event (wheel scroll, native
    /// text/image drag).
    PreventDefault,
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on DOM elements.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies. This is the interaction dispatcher: every input event enters
/// here and is routed to at most one of the viewport controller or the drag
/// controller, depending on the live [`InputState`].
pub struct EngineCore {
    config: CanvasConfig,
    items: ItemStore,
    factory: ItemFactory,
    viewport: ViewportController,
    input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::from_valid_config(CanvasConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from a host-supplied config.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the config is unusable.
    pub fn with_config(config: CanvasConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CanvasConfig) -> Self {
        Self {
            items: ItemStore::new(),
            factory: ItemFactory::new(config.items.clone()),
            viewport: ViewportController::new(config.zoom),
            input: InputState::Idle,
            viewport_width: 0.0,
            viewport_height: 0.0,
            config,
        }
    }

    // --- Commands ---

    /// Update viewport dimensions (CSS pixels).
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Create an item of `kind` and register it as a drag source.
    pub fn add_item(&mut self, kind: ItemKind, content: Option<String>) -> Vec<Action> {
        let item = self.factory.create(kind, content);
        tracing::debug!(id = %item.id, kind = kind.as_str(), "item created");
        self.items.insert(item.clone());
        vec![Action::ItemCreated(item), Action::RenderNeeded]
    }

    /// Center the items' extent in the viewport at the current scale.
    pub fn recenter(&mut self) -> Vec<Action> {
        let viewport = Size::new(self.viewport_width, self.viewport_height);
        self.viewport.recenter(viewport, self.items.extent());
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    /// Start a pan or an item drag, or ignore the press.
    ///
    /// The pan button pans from anywhere on the canvas, items included. The
    /// drag button drags only when pressed over an item. Any press while a
    /// gesture is already live is ignored.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, target: PointerTarget) -> Vec<Action> {
        if !self.input.is_idle() {
            tracing::debug!(?button, mode = ?self.input.mode(), "pointer down ignored during gesture");
            return Vec::new();
        }

        if button == self.config.buttons.pan {
            self.input = InputState::Panning(self.viewport.begin_pan(screen_pt));
            tracing::debug!(x = screen_pt.x, y = screen_pt.y, "pan started");
            return vec![Action::SetCursor(render::cursor_for(Mode::Panning).to_owned())];
        }

        if button == self.config.buttons.drag {
            let PointerTarget::Item(id) = target else {
                return Vec::new();
            };
            let Some(item) = self.items.get(&id) else {
                tracing::debug!(%id, "drag target not found");
                return Vec::new();
            };
            self.input = InputState::DraggingItem(drag::begin_drag(item, screen_pt));
            tracing::debug!(%id, "drag started");
            return vec![
                Action::PreventDefault,
                Action::SetCursor(render::cursor_for(Mode::DraggingItem).to_owned()),
            ];
        }

        Vec::new()
    }

    /// Advance the live gesture.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let camera = self.viewport.camera();
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning(session) => {
                if self.viewport.pan_to(session, screen_pt) {
                    vec![Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
            InputState::DraggingItem(session) => match drag::drag_to(&mut self.items, session, screen_pt, &camera) {
                Some(position) => vec![Action::ItemMoved { id: session.id, position }, Action::RenderNeeded],
                None => Vec::new(),
            },
        }
    }

    /// End whatever gesture is live.
    pub fn on_pointer_up(&mut self, _screen_pt: Point) -> Vec<Action> {
        self.end_gesture()
    }

    /// The pointer left the canvas: end whatever gesture is live, since the
    /// matching pointer-up may never arrive.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_gesture()
    }

    /// Zoom one step about the pointer. Suppressed while an item is being
    /// dragged; the platform scroll is prevented either way.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        let mut actions = vec![Action::PreventDefault];
        if let InputState::DraggingItem(session) = &self.input {
            tracing::trace!(id = %session.id, "zoom suppressed during drag");
            return actions;
        }
        if self.viewport.zoom(screen_pt, delta.dy) {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    fn end_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => {}
            InputState::Panning(session) => self.viewport.end_pan(&session),
            InputState::DraggingItem(session) => {
                if let Some(item) = self.items.get(&session.id) {
                    tracing::debug!(
                        id = %session.id,
                        left = item.position.left,
                        top = item.position.top,
                        "drag finished"
                    );
                }
            }
        }
        vec![Action::SetCursor(render::cursor_for(Mode::Idle).to_owned())]
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.viewport.camera()
    }

    /// The live interaction session.
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.input.mode()
    }

    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Look up an item by ID.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    #[must_use]
    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    /// Resolve a screen point to the topmost item under it.
    #[must_use]
    pub fn target_at(&self, screen_pt: Point) -> PointerTarget {
        hit::target_at(screen_pt, &self.items, &self.viewport.camera())
    }

    /// Snapshot of everything the display needs.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::new(&self.viewport.camera(), &self.config.grid, &self.items, self.input.mode())
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the DOM elements it
/// renders into: the canvas container (grid background, cursor) and the
/// content layer (transformed, parent of every item element).
pub struct Engine {
    document: Document,
    container: HtmlElement,
    content: HtmlElement,
    elements: HashMap<ItemId, HtmlElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given container and content layer.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the content layer is not attached to a document.
    pub fn new(container: HtmlElement, content: HtmlElement) -> Result<Self, JsValue> {
        Self::with_core(container, content, EngineCore::new())
    }

    /// Like [`Engine::new`], configured from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the config is invalid or the content layer is detached.
    pub fn with_config_json(container: HtmlElement, content: HtmlElement, config_json: &str) -> Result<Self, JsValue> {
        let core = CanvasConfig::from_json(config_json)
            .and_then(EngineCore::with_config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::with_core(container, content, core)
    }

    fn with_core(container: HtmlElement, content: HtmlElement, core: EngineCore) -> Result<Self, JsValue> {
        let document = content
            .owner_document()
            .ok_or_else(|| JsValue::from_str("content layer has no owner document"))?;
        Ok(Self { document, container, content, elements: HashMap::new(), core })
    }

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64) {
        self.core.set_viewport(width_css, height_css);
    }

    /// Create an item, mount its element in the content layer, and render.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the item element cannot be built or attached.
    pub fn add_item(&mut self, kind: ItemKind) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.add_item(kind, None);
        for action in &actions {
            if let Action::ItemCreated(item) = action {
                let element = render::build_item_element(&self.document, item)?;
                self.content.append_child(&element)?;
                self.elements.insert(item.id, element);
            }
        }
        self.render()?;
        Ok(actions)
    }

    /// Map a DOM event target to a pointer target by walking up to the
    /// nearest element tagged with an item id.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the selector lookup fails.
    pub fn target_of(&self, target: &Element) -> Result<PointerTarget, JsValue> {
        let Some(element) = target.closest(&format!("[{ITEM_ID_ATTR}]"))? else {
            return Ok(PointerTarget::Canvas);
        };
        let Some(raw) = element.get_attribute(ITEM_ID_ATTR) else {
            return Ok(PointerTarget::Canvas);
        };
        match Uuid::parse_str(&raw) {
            Ok(id) if self.elements.contains_key(&id) => Ok(PointerTarget::Item(id)),
            _ => Ok(PointerTarget::Canvas),
        }
    }

    // --- Input events ---

    /// `button` is the DOM `MouseEvent.button` code.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: i16, target: PointerTarget) -> Vec<Action> {
        match Button::from_dom(button) {
            Some(button) => self.core.on_pointer_down(screen_pt, button, target),
            None => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta)
    }

    pub fn recenter(&mut self) -> Vec<Action> {
        self.core.recenter()
    }

    // --- Render ---

    /// Push the current transform, grid, cursor, and item positions to the DOM.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any style update fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let frame = self.core.frame();
        render::apply_view(&self.container, &self.content, &frame)?;
        for placement in &frame.items {
            if let Some(element) = self.elements.get(&placement.id) {
                render::apply_item(element, placement)?;
            }
        }
        Ok(())
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.core.mode()
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.core.item(id)
    }
}
