//! The player's duck

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::motion::MovingEntity;
use crate::consts::*;

/// The player-controlled duck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Duck {
    pub body: MovingEntity,
    /// Collision box, inset from the 64x64 sprite
    pub collider: Rect,
    /// Upward velocity impulse of one flap
    pub flap_strength: f32,
    /// Animation frame selector; also re-arms `flap_down`
    pub wings_up: bool,
}

impl Default for Duck {
    fn default() -> Self {
        Self::new(Vec2::new(DUCK_START_X, DUCK_START_Y))
    }
}

impl Duck {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: MovingEntity::new(pos, Vec2::ZERO),
            collider: Rect::new(0.0, 0.0, DUCK_COLLIDER_SIZE, DUCK_COLLIDER_SIZE),
            flap_strength: FLAP_STRENGTH,
            wings_up: true,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.body.vel
    }

    /// Add to the velocity (gravity is applied through here)
    pub fn accelerate(&mut self, ax: f32, ay: f32) {
        self.body.vel += Vec2::new(ax, ay);
    }

    /// Integrate, clamp to the screen vertically, then move the collider
    ///
    /// Hitting the floor or ceiling zeroes vertical velocity; it is not a loss.
    pub fn step(&mut self, dt: f32) {
        self.body.step(dt);

        if self.body.pos.y > DUCK_MAX_Y {
            self.body.pos.y = DUCK_MAX_Y;
            self.body.vel.y = 0.0;
        } else if self.body.pos.y < 0.0 {
            self.body.pos.y = 0.0;
            self.body.vel.y = 0.0;
        }

        self.sync_collider();
    }

    /// Place the collider at its fixed offset from the sprite
    pub fn sync_collider(&mut self) {
        let offset = Vec2::new(DUCK_COLLIDER_OFFSET_X, DUCK_COLLIDER_OFFSET_Y);
        self.collider.set_origin(self.body.pos + offset);
    }

    /// Wings down: one upward impulse per press
    ///
    /// Returns true when the flap happened. Does nothing while the wings are
    /// already down, so key repeat cannot stack impulses.
    pub fn flap_down(&mut self) -> bool {
        if !self.wings_up {
            return false;
        }
        self.body.vel.y -= self.flap_strength;
        self.wings_up = false;
        true
    }

    /// Wings up: re-arms `flap_down`, no motion
    pub fn flap_up(&mut self) {
        self.wings_up = true;
    }

    /// Back to the start height at rest (x and wing state are kept)
    pub fn reset(&mut self) {
        self.body.pos.y = DUCK_START_Y;
        self.body.vel.y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_duck_at_rest() {
        let duck = Duck::default();
        assert_eq!(duck.pos(), Vec2::new(64.0, 256.0));
        assert_eq!(duck.vel(), Vec2::ZERO);
        assert!(duck.wings_up);
    }

    #[test]
    fn test_collider_follows_with_offset() {
        let mut duck = Duck::new(Vec2::new(64.0, 100.0));
        duck.step(1.0);
        assert_eq!(duck.collider.origin(), Vec2::new(72.0, 116.0));
        assert_eq!(duck.collider.size(), Vec2::new(32.0, 32.0));
    }

    #[test]
    fn test_flap_impulse_does_not_stack() {
        let mut duck = Duck::default();
        assert!(duck.flap_down());
        assert_eq!(duck.vel().y, -FLAP_STRENGTH);
        assert!(!duck.wings_up);

        // Held key: further presses are ignored
        assert!(!duck.flap_down());
        assert!(!duck.flap_down());
        assert_eq!(duck.vel().y, -FLAP_STRENGTH);

        // Release re-arms
        duck.flap_up();
        assert!(duck.flap_down());
        assert_eq!(duck.vel().y, -2.0 * FLAP_STRENGTH);
    }

    #[test]
    fn test_floor_clamp_zeroes_velocity() {
        let mut duck = Duck::new(Vec2::new(64.0, 440.0));
        duck.accelerate(0.0, 20.0);
        duck.step(1.0);
        assert_eq!(duck.pos().y, DUCK_MAX_Y);
        assert_eq!(duck.vel().y, 0.0);
    }

    #[test]
    fn test_ceiling_clamp_zeroes_velocity() {
        let mut duck = Duck::new(Vec2::new(64.0, 3.0));
        duck.accelerate(0.0, -10.0);
        duck.step(1.0);
        assert_eq!(duck.pos().y, 0.0);
        assert_eq!(duck.vel().y, 0.0);
        assert_eq!(duck.collider.y, DUCK_COLLIDER_OFFSET_Y);
    }

    #[test]
    fn test_reset_restores_height() {
        let mut duck = Duck::default();
        duck.accelerate(0.0, 7.0);
        duck.step(3.0);
        duck.reset();
        assert_eq!(duck.pos().y, 256.0);
        assert_eq!(duck.vel().y, 0.0);
    }

    proptest! {
        #[test]
        fn prop_height_stays_on_screen(
            y in 0.0f32..448.0,
            vy in -50.0f32..50.0,
            dt in 0.0f32..5.0,
        ) {
            let mut duck = Duck::new(Vec2::new(64.0, y));
            duck.accelerate(0.0, vy);
            let unclamped = y + vy * dt;
            duck.step(dt);
            prop_assert!((0.0..=DUCK_MAX_Y).contains(&duck.pos().y));
            if !(0.0..=DUCK_MAX_Y).contains(&unclamped) {
                prop_assert_eq!(duck.vel().y, 0.0);
            }
        }
    }
}
