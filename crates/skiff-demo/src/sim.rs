use glam::Vec2;

/// Pendulum simulation advanced on a fixed tick.
///
/// An anchor point drifts horizontally while a bob swings around it at a
/// constant angular velocity. The state is deliberately tiny: everything
/// the renderer needs is derivable from these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Sim {
    pub anchor: Vec2,
    pub angle: f32,
    pub arm_length: f32,
    elapsed: f32,
}

impl Sim {
    pub fn new() -> Self {
        Self {
            anchor: Vec2::new(0.0, 4.0),
            angle: 0.0,
            arm_length: 3.0,
            elapsed: 0.0,
        }
    }

    /// Advances the simulation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        self.anchor.x += self.elapsed.sin() * dt * 0.25;
        self.angle += f32::to_radians(45.0) * dt;
    }

    /// World-space center of the swinging bob.
    pub fn bob_center(&self) -> Vec2 {
        self.anchor + Vec2::new(self.angle.cos(), self.angle.sin()) * self.arm_length
    }

    /// Blends two simulation snapshots for rendering between ticks.
    ///
    /// `alpha` is the fraction of a tick elapsed since `last` (0 = `last`,
    /// 1 = `next`).
    pub fn blend(last: &Sim, next: &Sim, alpha: f32) -> Sim {
        Sim {
            anchor: last.anchor.lerp(next.anchor, alpha),
            angle: lerp(last.angle, next.angle, alpha),
            arm_length: lerp(last.arm_length, next.arm_length, alpha),
            elapsed: next.elapsed,
        }
    }
}

impl Default for Sim {
    fn default() -> Self {
        Self::new()
    }
}

fn lerp(from: f32, to: f32, alpha: f32) -> f32 {
    to * alpha + from * (1.0 - alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_step_update_is_deterministic() {
        let mut a = Sim::new();
        let mut b = Sim::new();
        for _ in 0..600 {
            a.update(1.0 / 60.0);
            b.update(1.0 / 60.0);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn blend_hits_both_endpoints() {
        let last = Sim::new();
        let mut next = last.clone();
        for _ in 0..30 {
            next.update(1.0 / 60.0);
        }

        let at_last = Sim::blend(&last, &next, 0.0);
        assert_eq!(at_last.anchor, last.anchor);
        assert_eq!(at_last.angle, last.angle);

        let at_next = Sim::blend(&last, &next, 1.0);
        assert_eq!(at_next.anchor, next.anchor);
        assert_eq!(at_next.angle, next.angle);
    }

    #[test]
    fn bob_stays_on_the_arm_circle() {
        let mut sim = Sim::new();
        for _ in 0..120 {
            sim.update(1.0 / 60.0);
            let r = (sim.bob_center() - sim.anchor).length();
            assert!((r - sim.arm_length).abs() < 1e-4);
        }
    }
}
