//! CPU reference for the shader stages.
//!
//! These functions are the numeric contract of the WGSL in
//! `render/shaders/`. Each is a pure, total function of its inputs;
//! IEEE-754 f32 semantics (including NaN propagation) carry through
//! unchanged, and the GPU stages compute the same expressions in the same
//! order.

use glam::{Mat4, Vec2, Vec4};

/// Instanced vertex stage: scales the local position by the instance size,
/// translates by the instance offset, then projects through the camera.
///
/// `clip = view_proj · (position ⊙ size + offset, 0, 1)ᵗ`
#[inline]
pub fn instanced_clip_position(
    view_proj: Mat4,
    position: Vec2,
    offset: Vec2,
    size: Vec2,
) -> Vec4 {
    let world = position * size + offset;
    view_proj * Vec4::new(world.x, world.y, 0.0, 1.0)
}

/// Plain vertex stage: projects the vertex position through the camera.
///
/// `clip = view_proj · (position, 0, 1)ᵗ`
#[inline]
pub fn clip_position(view_proj: Mat4, position: Vec2) -> Vec4 {
    view_proj * Vec4::new(position.x, position.y, 0.0, 1.0)
}

/// Fragment stage: constant opaque blue, for every interpolated position.
#[inline]
pub fn fill_color(_clip_position: Vec4) -> Vec4 {
    Vec4::new(0.0, 0.0, 1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn bits(v: Vec4) -> [u32; 4] {
        [
            v.x.to_bits(),
            v.y.to_bits(),
            v.z.to_bits(),
            v.w.to_bits(),
        ]
    }

    // ── instanced unit ────────────────────────────────────────────────────

    #[test]
    fn instanced_identity_scales_then_translates() {
        let out = instanced_clip_position(
            Mat4::IDENTITY,
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 4.0),
            Vec2::new(2.0, 2.0),
        );
        assert_eq!(out, Vec4::new(5.0, 8.0, 0.0, 1.0));
    }

    #[test]
    fn instanced_applies_camera_after_instance_transform() {
        let m = Mat4::from_scale(Vec3::new(2.0, 0.5, 1.0))
            * Mat4::from_translation(Vec3::new(-1.0, -1.0, 0.0));
        let out = instanced_clip_position(
            m,
            Vec2::new(0.5, 0.5),
            Vec2::new(1.0, 1.0),
            Vec2::new(4.0, 2.0),
        );
        // world = (3, 2), camera maps it to ((3 - 1) * 2, (2 - 1) * 0.5).
        assert_eq!(out, Vec4::new(4.0, 0.5, 0.0, 1.0));
    }

    #[test]
    fn instanced_negative_size_mirrors() {
        let out = instanced_clip_position(
            Mat4::IDENTITY,
            Vec2::new(1.0, 1.0),
            Vec2::ZERO,
            Vec2::new(-2.0, 3.0),
        );
        assert_eq!(out, Vec4::new(-2.0, 3.0, 0.0, 1.0));
    }

    // ── plain unit ────────────────────────────────────────────────────────

    #[test]
    fn plain_identity_is_passthrough() {
        let out = clip_position(Mat4::IDENTITY, Vec2::new(1.0, 2.0));
        assert_eq!(out, Vec4::new(1.0, 2.0, 0.0, 1.0));
    }

    #[test]
    fn homogeneous_coordinate_survives_translation() {
        let m = Mat4::from_translation(Vec3::new(10.0, -4.0, 0.0));
        let out = clip_position(m, Vec2::new(1.0, 1.0));
        assert_eq!(out, Vec4::new(11.0, -3.0, 0.0, 1.0));
    }

    // ── unit equivalence ──────────────────────────────────────────────────

    #[test]
    fn neutral_instance_matches_plain_unit() {
        let m = Mat4::from_scale(Vec3::new(0.25, 4.0, 1.0))
            * Mat4::from_translation(Vec3::new(7.0, -3.0, 0.0));
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(-5.5, 0.125),
            Vec2::new(1e6, -1e-6),
        ];
        for p in points {
            let a = instanced_clip_position(m, p, Vec2::ZERO, Vec2::ONE);
            let b = clip_position(m, p);
            assert_eq!(bits(a), bits(b), "diverged at {p:?}");
        }
    }

    // ── fragment stage ────────────────────────────────────────────────────

    #[test]
    fn fill_color_is_constant_blue() {
        assert_eq!(
            fill_color(Vec4::new(0.3, -0.9, 0.0, 1.0)),
            Vec4::new(0.0, 0.0, 1.0, 1.0)
        );
    }

    #[test]
    fn fill_color_ignores_degenerate_input() {
        let nan = Vec4::splat(f32::NAN);
        assert_eq!(fill_color(nan), Vec4::new(0.0, 0.0, 1.0, 1.0));
        let inf = Vec4::splat(f32::INFINITY);
        assert_eq!(fill_color(inf), Vec4::new(0.0, 0.0, 1.0, 1.0));
    }

    // ── purity ────────────────────────────────────────────────────────────

    #[test]
    fn reevaluation_is_bit_identical() {
        let m = Mat4::from_scale(Vec3::new(0.1, 0.3, 1.0))
            * Mat4::from_translation(Vec3::new(0.7, 0.2, 0.0));
        let p = Vec2::new(0.1, 0.2);
        let o = Vec2::new(-3.3, 9.9);
        let s = Vec2::new(1.7, 0.4);

        let first = instanced_clip_position(m, p, o, s);
        let second = instanced_clip_position(m, p, o, s);
        assert_eq!(bits(first), bits(second));

        let first = clip_position(m, p);
        let second = clip_position(m, p);
        assert_eq!(bits(first), bits(second));
    }
}
