//! Rendering module
//!
//! The game draws nothing but flat rectangles. Frames are built as quad lists
//! and passed to a [`RenderSink`]; [`VertexSink`] turns them into a vertex
//! buffer for a GPU backend.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Quad, RenderSink, VertexSink, build_frame};
pub use vertex::{Vertex, colors};
