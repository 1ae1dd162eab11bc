//! GPU rendering subsystem.
//!
//! Two draw units share the camera uniform (group 0, binding 0):
//! - [`QuadRenderer`] draws a canonical unit quad per instance, scaled and
//!   offset by per-instance attributes before the camera transform.
//! - [`MeshRenderer`] draws caller-supplied triangle lists with vertices
//!   taken as world-space positions directly.
//!
//! Both fill with the engine's solid color. Each renderer owns its GPU
//! resources (pipeline, buffers) and records its own render pass.

mod common;
mod ctx;
mod mesh;
mod quads;

pub use common::{Vertex, QUAD_INDICES, QUAD_VERTICES};
pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
pub use quads::{QuadInstance, QuadRenderer};
