//! Pan/zoom/drag engine for the gridboard canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and it also
//! builds natively so every rule can be tested without one. It owns the
//! interaction model of the canvas: translating raw pointer and wheel events
//! into camera and item updates, keeping exactly one gesture live at a time,
//! and producing the render frame that keeps the content layer and the
//! background grid in lockstep. The host layer only wires DOM events to the
//! engine and acts on the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and the testable dispatcher [`engine::EngineCore`] |
//! | [`camera`] | Pan offset, scale, and coordinate conversions |
//! | [`viewport`] | The only writer of the camera: pan, zoom-about-point, recenter |
//! | [`drag`] | Scale-compensated item dragging |
//! | [`doc`] | Item types, the item factory, and the item store |
//! | [`input`] | Button/target/wheel types and the interaction state machine |
//! | [`hit`] | Screen-point to item resolution |
//! | [`render`] | Render frames and the DOM applier |
//! | [`config`] | Engine configuration and validation |
//! | [`consts`] | Shared numeric constants (zoom limits, grid tile, item defaults) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod drag;
pub mod engine;
pub mod hit;
pub mod input;
pub mod render;
pub mod viewport;
