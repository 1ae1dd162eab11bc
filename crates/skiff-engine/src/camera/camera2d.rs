use glam::{Mat4, Vec2, Vec3};

/// 2D camera: a world-space center and a uniform zoom.
///
/// The produced matrix is `scale(zoom) · translate(-center)`, so `center`
/// lands on the clip-space origin and one world unit spans `zoom` clip
/// units vertically. The x scale is divided by the viewport aspect ratio so
/// world units stay square on non-square surfaces.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera2D {
    pub center: Vec2,
    pub zoom: f32,
}

impl Camera2D {
    #[inline]
    pub const fn new(center: Vec2, zoom: f32) -> Self {
        Self { center, zoom }
    }

    /// Builds the combined view-projection matrix for `aspect` (width over
    /// height).
    ///
    /// Non-positive or non-finite aspect values fall back to 1.0 rather than
    /// producing a degenerate matrix.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };

        Mat4::from_scale(Vec3::new(self.zoom / aspect, self.zoom, 1.0))
            * Mat4::from_translation((-self.center).extend(0.0))
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::clip_position;

    #[test]
    fn center_maps_to_clip_origin() {
        let cam = Camera2D::new(Vec2::new(3.0, -7.5), 0.25);
        let clip = clip_position(cam.view_proj(1.0), cam.center);
        assert_eq!(clip, glam::Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn zoom_scales_world_units() {
        let cam = Camera2D::new(Vec2::ZERO, 0.5);
        let clip = clip_position(cam.view_proj(1.0), Vec2::new(1.0, 2.0));
        assert_eq!(clip.x, 0.5);
        assert_eq!(clip.y, 1.0);
    }

    #[test]
    fn aspect_divides_horizontal_scale() {
        let cam = Camera2D::new(Vec2::ZERO, 1.0);
        let clip = clip_position(cam.view_proj(2.0), Vec2::new(1.0, 1.0));
        assert_eq!(clip.x, 0.5);
        assert_eq!(clip.y, 1.0);
    }

    #[test]
    fn invalid_aspect_falls_back_to_square() {
        let cam = Camera2D::new(Vec2::ZERO, 1.0);
        assert_eq!(cam.view_proj(0.0), cam.view_proj(1.0));
        assert_eq!(cam.view_proj(f32::NAN), cam.view_proj(1.0));
    }
}
