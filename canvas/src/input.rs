//! Input model: mouse buttons, pointer targets, wheel deltas, and the
//! interaction state machine.
//!
//! `InputState` is the single live interaction session. It is a tagged
//! variant, so a pan anchor and a drag anchor can never be held at the same
//! time; every non-idle variant carries the context its controller needs to
//! turn the next pointer-move into a mutation.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::ItemId;
use crate::drag::DragSession;
use crate::viewport::PanSession;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code to a button. Back/forward buttons
    /// have no role on the canvas.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// What the pointer was over when a button went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas (or anything that is not an item).
    Canvas,
    /// An item on the canvas.
    Item(ItemId),
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Discriminant of [`InputState`], for callers that only care which gesture
/// is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Idle,
    Panning,
    DraggingItem,
}

/// The live interaction session.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The canvas is being panned with the pan button.
    Panning(PanSession),
    /// An item is being dragged with the drag button.
    DraggingItem(DragSession),
}

impl InputState {
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Idle => Mode::Idle,
            Self::Panning(_) => Mode::Panning,
            Self::DraggingItem(_) => Mode::DraggingItem,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The item being dragged, if any.
    #[must_use]
    pub fn drag_target(&self) -> Option<ItemId> {
        match self {
            Self::DraggingItem(session) => Some(session.id),
            _ => None,
        }
    }
}
