//! Platform abstraction layer
//!
//! Handles the backend-facing side of a frame:
//! - Physical key to logical control bindings
//! - Held vs. pressed (edge) detection

pub mod input;

pub use input::{Control, ControlSource, Key, Keyboard};
