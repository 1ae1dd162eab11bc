use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// GPU mirror of the camera matrix.
///
/// Bound as a uniform buffer at group 0, binding 0 by both draw units.
/// Layout matches WGSL `view_proj: mat4x4<f32>`: column-major, 64 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn identity() -> Self {
        Self::from_matrix(Mat4::IDENTITY)
    }

    #[inline]
    pub fn from_matrix(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Mat4> for CameraUniform {
    fn from(m: Mat4) -> Self {
        Self::from_matrix(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_64_bytes() {
        // mat4x4<f32> = 16 * 4 bytes; the binding contract depends on this.
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
    }

    #[test]
    fn matrix_round_trips_column_major() {
        let m = Mat4::from_cols_array(&[
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            13.0, 14.0, 15.0, 16.0,
        ]);
        let u = CameraUniform::from_matrix(m);
        assert_eq!(u.view_proj[0], [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(u.view_proj[3], [13.0, 14.0, 15.0, 16.0]);
        assert_eq!(Mat4::from_cols_array_2d(&u.view_proj), m);
    }

    #[test]
    fn default_is_identity() {
        let u = CameraUniform::default();
        assert_eq!(Mat4::from_cols_array_2d(&u.view_proj), Mat4::IDENTITY);
    }
}
