#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_zoom_limits() {
    let zoom = ZoomLimits::default();
    assert_eq!(zoom.min_scale, 0.2);
    assert_eq!(zoom.max_scale, 2.0);
    assert_eq!(zoom.step, 0.1);
}

#[test]
fn default_grid_tile() {
    assert_eq!(GridConfig::default().tile_px, 50.0);
}

#[test]
fn default_item_config() {
    let items = ItemConfig::default();
    assert_eq!(items.left, 100.0);
    assert_eq!(items.top, 100.0);
    assert_eq!(items.image_placeholder, "https://via.placeholder.com/100");
}

#[test]
fn default_buttons() {
    let buttons = ButtonConfig::default();
    assert_eq!(buttons.pan, Button::Middle);
    assert_eq!(buttons.drag, Button::Primary);
}

#[test]
fn default_config_is_valid() {
    assert!(CanvasConfig::default().validate().is_ok());
}

// =============================================================
// ZoomLimits::clamp
// =============================================================

#[test]
fn clamp_inside_range_is_identity() {
    assert_eq!(ZoomLimits::default().clamp(1.3), 1.3);
}

#[test]
fn clamp_saturates_both_ends() {
    let zoom = ZoomLimits::default();
    assert_eq!(zoom.clamp(0.01), 0.2);
    assert_eq!(zoom.clamp(9.0), 2.0);
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_empty_object_uses_defaults() {
    let config = CanvasConfig::from_json("{}").unwrap();
    assert_eq!(config, CanvasConfig::default());
}

#[test]
fn from_json_partial_override() {
    let config = CanvasConfig::from_json(r#"{"zoom": {"max_scale": 4.0}, "grid": {"tile_px": 20}}"#).unwrap();
    assert_eq!(config.zoom.max_scale, 4.0);
    assert_eq!(config.zoom.min_scale, 0.2);
    assert_eq!(config.grid.tile_px, 20.0);
}

#[test]
fn from_json_button_names_are_lowercase() {
    let config = CanvasConfig::from_json(r#"{"buttons": {"pan": "secondary"}}"#).unwrap();
    assert_eq!(config.buttons.pan, Button::Secondary);
    assert_eq!(config.buttons.drag, Button::Primary);
}

#[test]
fn from_json_malformed() {
    let err = CanvasConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidJson(_)));
}

#[test]
fn from_json_runs_validation() {
    let err = CanvasConfig::from_json(r#"{"zoom": {"step": 0}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { field: "zoom.step", .. }));
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_rejects_inverted_range() {
    let mut config = CanvasConfig::default();
    config.zoom.min_scale = 3.0;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::EmptyScaleRange { .. }));
}

#[test]
fn validate_rejects_non_positive_min_scale() {
    let mut config = CanvasConfig::default();
    config.zoom.min_scale = 0.0;
    assert!(matches!(config.validate(), Err(ConfigError::NotPositive { field: "zoom.min_scale", .. })));
}

#[test]
fn validate_rejects_nan_tile() {
    let mut config = CanvasConfig::default();
    config.grid.tile_px = f64::NAN;
    assert!(matches!(config.validate(), Err(ConfigError::NotPositive { field: "grid.tile_px", .. })));
}

#[test]
fn validate_rejects_zero_item_width() {
    let mut config = CanvasConfig::default();
    config.items.width = 0.0;
    assert!(matches!(config.validate(), Err(ConfigError::NotPositive { field: "items.width", .. })));
}

#[test]
fn validate_rejects_shared_button() {
    let mut config = CanvasConfig::default();
    config.buttons.pan = Button::Primary;
    assert!(matches!(config.validate(), Err(ConfigError::ButtonConflict(Button::Primary))));
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::NotPositive { field: "zoom.step", value: -1.0 };
    assert_eq!(err.to_string(), "`zoom.step` must be a positive finite number, got -1");
}
