//! Rendering module
//!
//! The radar is drawn as stroked vector paths on a `Canvas`; the wgpu
//! presenter tessellates them into triangles for the window.

pub mod canvas;
pub mod pipeline;
pub mod radar;
pub mod recording;
pub mod tessellate;
pub mod vertex;

pub use canvas::{Canvas, Color, LineCap};
pub use pipeline::RenderState;
pub use recording::{DrawOp, RecordingCanvas, StrokeRecord};
pub use tessellate::VertexCanvas;
pub use vertex::Vertex;
