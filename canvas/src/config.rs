//! Engine configuration: zoom limits, grid tile size, item defaults, and
//! button bindings.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! yields the stock behavior. Hosts deserialize a [`CanvasConfig`] and must
//! call [`CanvasConfig::validate`] (done by [`CanvasConfig::from_json`]) before
//! handing it to the engine.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    GRID_TILE_PX, IMAGE_PLACEHOLDER_URI, ITEM_DEFAULT_LEFT, ITEM_DEFAULT_TOP, ITEM_WIDTH, MAX_SCALE, MIN_SCALE,
    SCALE_STEP,
};
use crate::input::Button;

/// Errors raised while loading or validating a [`CanvasConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("zoom range is empty: min_scale {min} > max_scale {max}")]
    EmptyScaleRange { min: f64, max: f64 },
    #[error("`{field}` must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("pan and drag are both bound to the {0:?} button")]
    ButtonConflict(Button),
}

/// Scale bounds and the per-tick zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min_scale: f64,
    pub max_scale: f64,
    pub step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min_scale: MIN_SCALE, max_scale: MAX_SCALE, step: SCALE_STEP }
    }
}

impl ZoomLimits {
    /// Saturate `scale` into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}

/// Background grid settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Tile edge at scale 1.0, in CSS pixels.
    pub tile_px: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { tile_px: GRID_TILE_PX }
    }
}

/// Defaults applied by the item factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemConfig {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub image_placeholder: String,
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            left: ITEM_DEFAULT_LEFT,
            top: ITEM_DEFAULT_TOP,
            width: ITEM_WIDTH,
            image_placeholder: IMAGE_PLACEHOLDER_URI.to_owned(),
        }
    }
}

/// Which physical button starts which gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Starts a canvas pan.
    pub pan: Button,
    /// Starts an item drag when pressed over an item.
    pub drag: Button,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self { pan: Button::Middle, drag: Button::Primary }
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub zoom: ZoomLimits,
    pub grid: GridConfig,
    pub items: ItemConfig,
    pub buttons: ButtonConfig,
}

impl CanvasConfig {
    /// Parse and validate a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidJson`] on malformed input, or any
    /// validation error from [`CanvasConfig::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("zoom.min_scale", self.zoom.min_scale)?;
        require_positive("zoom.max_scale", self.zoom.max_scale)?;
        require_positive("zoom.step", self.zoom.step)?;
        if self.zoom.min_scale > self.zoom.max_scale {
            return Err(ConfigError::EmptyScaleRange { min: self.zoom.min_scale, max: self.zoom.max_scale });
        }
        require_positive("grid.tile_px", self.grid.tile_px)?;
        require_positive("items.width", self.items.width)?;
        if self.buttons.pan == self.buttons.drag {
            return Err(ConfigError::ButtonConflict(self.buttons.pan));
        }
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
