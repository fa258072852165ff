//! Vector-outline rendering
//!
//! Draws into any `Canvas`; wrap-on-draw is layered on with `WrapCanvas`.

pub mod canvas;
pub mod models;
pub mod wireframe;

pub use canvas::{Canvas, Cell, Color, TextCanvas, WrapCanvas};
pub use wireframe::{draw_frame, draw_wireframe, transform_model};
