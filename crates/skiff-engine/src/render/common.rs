//! Shared GPU types and utilities used by both draw units.

use bytemuck::{Pod, Zeroable};

use crate::camera::CameraUniform;

// ── vertex ────────────────────────────────────────────────────────────────

/// Per-vertex input shared by both units: a 2D position at shader
/// location 0.
///
/// For the instanced unit this is a corner of the canonical [0,1]² quad;
/// for the mesh unit it is a world-space triangle vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// ── unit quad ─────────────────────────────────────────────────────────────

/// Canonical unit quad spanning [0,1]², drawn as two CCW triangles.
pub const QUAD_VERTICES: [Vertex; 4] = [
    Vertex::new(0.0, 0.0),
    Vertex::new(1.0, 0.0),
    Vertex::new(1.0, 1.0),
    Vertex::new(0.0, 1.0),
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── camera binding ────────────────────────────────────────────────────────

/// Returns the `wgpu` minimum binding size for the camera uniform buffer.
///
/// `CameraUniform` is one mat4x4<f32> (64 bytes) so its size is always
/// non-zero. Centralising this avoids `.unwrap()` at each renderer's
/// pipeline-creation site.
pub(super) fn camera_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<CameraUniform>() as u64)
        .expect("CameraUniform has non-zero size by construction")
}

/// Creates the bind group layout both units use for the camera matrix:
/// group 0, binding 0, vertex-stage uniform buffer.
pub(super) fn camera_bind_group_layout(
    device: &wgpu::Device,
    label: &str,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Some(camera_ubo_min_binding_size()),
            },
            count: None,
        }],
    })
}

// ── color target ──────────────────────────────────────────────────────────

/// Color target for the fill passes.
///
/// The fill color is opaque (alpha 1), so no blend state is configured.
pub(super) fn opaque_target(format: wgpu::TextureFormat) -> wgpu::ColorTargetState {
    wgpu::ColorTargetState {
        format,
        blend: None,
        write_mask: wgpu::ColorWrites::ALL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_matches_binding_contract() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 8);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x2);
    }

    #[test]
    fn quad_indices_reference_all_corners() {
        assert_eq!(QUAD_INDICES.len(), 6);
        for &i in &QUAD_INDICES {
            assert!((i as usize) < QUAD_VERTICES.len());
        }
        for corner in 0..QUAD_VERTICES.len() as u16 {
            assert!(QUAD_INDICES.contains(&corner));
        }
    }

    #[test]
    fn quad_triangles_wind_counter_clockwise() {
        // Signed area > 0 in a y-up coordinate system.
        for tri in QUAD_INDICES.chunks(3) {
            let [a, b, c] = [
                QUAD_VERTICES[tri[0] as usize].position,
                QUAD_VERTICES[tri[1] as usize].position,
                QUAD_VERTICES[tri[2] as usize].position,
            ];
            let area = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
            assert!(area > 0.0);
        }
    }

    #[test]
    fn camera_binding_size_is_one_mat4() {
        assert_eq!(camera_ubo_min_binding_size().get(), 64);
    }
}
