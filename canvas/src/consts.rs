//! Shared numeric constants for the canvas crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest scale the viewport may zoom out to.
pub const MIN_SCALE: f64 = 0.2;

/// Largest scale the viewport may zoom in to.
pub const MAX_SCALE: f64 = 2.0;

/// Scale change applied per wheel tick, regardless of delta magnitude.
pub const SCALE_STEP: f64 = 0.1;

// ── Grid ────────────────────────────────────────────────────────

/// Background grid tile edge at scale 1.0, in CSS pixels.
pub const GRID_TILE_PX: f64 = 50.0;

// ── Items ───────────────────────────────────────────────────────

/// Content-local left edge of a freshly created item.
pub const ITEM_DEFAULT_LEFT: f64 = 100.0;

/// Content-local top edge of a freshly created item.
pub const ITEM_DEFAULT_TOP: f64 = 100.0;

/// Fixed display width of an item; height is automatic and overflow is clipped.
pub const ITEM_WIDTH: f64 = 120.0;

/// Nominal item height used only for hit-testing and bounds when the host
/// cannot measure the rendered element.
pub const ITEM_NOMINAL_HEIGHT: f64 = 40.0;

/// Image shown when an image item is created without a URI.
pub const IMAGE_PLACEHOLDER_URI: &str = "https://via.placeholder.com/100";

// ── Cursors ─────────────────────────────────────────────────────

/// Cursor shown over the canvas while no gesture is active.
pub const CURSOR_IDLE: &str = "grab";

/// Cursor shown while panning or dragging.
pub const CURSOR_ACTIVE: &str = "grabbing";
