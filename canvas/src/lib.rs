//! Bounding-box editor engine for frame labeling.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! editing side of one displayed frame: translating raw DOM input events into
//! annotation mutations, maintaining camera state for pan/zoom over the
//! fitted frame image, hit-testing boxes and their resize handles, and
//! rendering the scene. The host layer is responsible only for wiring DOM
//! events to the engine and syncing the resulting label set with the server.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Box labels, annotation entities and the ordered annotation set |
//! | [`geometry`] | Normalized ↔ canvas conversions and fit-to-container scale |
//! | [`camera`] | Pan/zoom camera and screen ↔ canvas conversions |
//! | [`classes`] | Class table and the fixed color palette |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against annotations and resize handles |
//! | [`render`] | Scene rendering to a 2D context |
//! | [`consts`] | Shared numeric constants (zoom limits, minimum sizes, etc.) |

pub mod camera;
pub mod classes;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod render;
