//! Camera model and its GPU mirror.
//!
//! Responsibilities:
//! - describe the host-side 2D camera (world center + zoom)
//! - build the combined view-projection matrix
//! - mirror that matrix into the uniform layout the shaders bind at
//!   group 0, binding 0

mod camera2d;
mod uniform;

pub use camera2d::Camera2D;
pub use uniform::CameraUniform;
