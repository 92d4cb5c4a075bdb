//! wgpu rendering module
//!
//! Demos record 2D triangles into a [`Canvas`]; [`RenderState`] letterboxes
//! them into the window and draws them in a single pass.

pub mod canvas;
pub mod font;
pub mod pipeline;
pub mod shapes;
pub mod vertex;
pub mod viewport;

pub use canvas::Canvas;
pub use pipeline::{RenderState, SurfaceAction};
pub use vertex::{Vertex, colors};
pub use viewport::Viewport;
