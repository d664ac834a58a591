//! Interaction layer: controller, MVI features, and the terminal session.
//!
//! - `controller.rs` - submission controller owning all interaction state
//! - `picker/` - provider/model selector (MVI)
//! - `submission/` - submit lifecycle (MVI)
//! - `events.rs` / `runtime.rs` - command parsing and event bindings

pub mod controller;
pub mod events;
pub mod mvi;
pub mod notify;
pub mod picker;
pub mod runtime;
pub mod submission;
pub mod view;
