//! Rendering module
//!
//! `scene` turns game state into rectangles and labels; `pipeline` draws the
//! rectangles with WebGPU. Text is left to the 2D overlay in the web shell.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{ColoredRect, LifeLabel, Scene};
