//! Position/velocity integration shared by the duck and the clouds

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A point body moved by explicit Euler integration
///
/// Acceleration is never stored here; callers change `vel` before `step`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovingEntity {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl MovingEntity {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Advance position by `vel * dt`
    #[inline]
    pub fn step(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_step_moves_by_velocity() {
        let mut e = MovingEntity::new(Vec2::new(10.0, 20.0), Vec2::new(-1.5, 0.5));
        e.step(2.0);
        assert_eq!(e.pos, Vec2::new(7.0, 21.0));
        assert_eq!(e.vel, Vec2::new(-1.5, 0.5));
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut e = MovingEntity::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        e.step(0.0);
        assert_eq!(e.pos, Vec2::new(1.0, 2.0));
    }

    proptest! {
        #[test]
        fn prop_split_steps_superpose(
            x in -512.0f32..512.0,
            y in -512.0f32..512.0,
            vx in -10.0f32..10.0,
            vy in -10.0f32..10.0,
            dt1 in 0.0f32..4.0,
            dt2 in 0.0f32..4.0,
        ) {
            let start = MovingEntity::new(Vec2::new(x, y), Vec2::new(vx, vy));

            let mut split = start;
            split.step(dt1);
            split.step(dt2);

            let mut whole = start;
            whole.step(dt1 + dt2);

            prop_assert!((split.pos - whole.pos).abs().max_element() < 1e-3);
        }
    }
}
