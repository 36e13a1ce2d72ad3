//! A single pipe pair with a vertical gap

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// One obstacle: a top and a bottom pipe scrolling left together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge of the sprite
    pub x: f32,
    /// Horizontal velocity (negative, the only axis of motion)
    pub vel: f32,
    /// Top of the passable gap
    pub clear_pos: f32,
    pub gap_size: f32,
    pub collider_top: Rect,
    pub collider_bottom: Rect,
    /// Set once the pipe crosses the scoring line
    pub passed: bool,
}

impl Pipe {
    /// Spawn a pipe at the right edge with the given clear position
    pub fn new(clear_pos: f32) -> Self {
        let gap_size = PIPE_GAP;
        let bottom_y = clear_pos + gap_size;
        Self {
            x: PIPE_SPAWN_X,
            vel: PIPE_SPEED,
            clear_pos,
            gap_size,
            collider_top: Rect::new(
                PIPE_SPAWN_X,
                0.0,
                PIPE_COLLIDER_WIDTH,
                clear_pos - PIPE_SEGMENT,
            ),
            collider_bottom: Rect::new(
                PIPE_SPAWN_X,
                bottom_y,
                PIPE_COLLIDER_WIDTH,
                SCREEN_SIZE - bottom_y,
            ),
            passed: false,
        }
    }

    /// Scroll left and move both colliders along
    ///
    /// Returns true on the single frame the pipe first crosses the scoring
    /// line; the caller awards the point.
    pub fn step(&mut self, dt: f32) -> bool {
        self.x += self.vel * dt;
        self.collider_top.x = self.x + PIPE_COLLIDER_INSET;
        self.collider_bottom.x = self.x + PIPE_COLLIDER_INSET;

        if self.x < PIPE_PASS_X && !self.passed {
            self.passed = true;
            return true;
        }
        false
    }

    /// True if `rect` hits either half of the pipe
    pub fn collides_with(&self, rect: &Rect) -> bool {
        rect.overlaps(&self.collider_top) || rect.overlaps(&self.collider_bottom)
    }

    /// Center of the gap, the height a duck should aim for
    #[inline]
    pub fn gap_center(&self) -> f32 {
        self.clear_pos + self.gap_size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colliders_frame_the_gap() {
        let pipe = Pipe::new(200.0);
        assert_eq!(pipe.x, 512.0);
        assert_eq!(pipe.collider_top, Rect::new(512.0, 0.0, 80.0, 136.0));
        assert_eq!(pipe.collider_bottom, Rect::new(512.0, 264.0, 80.0, 248.0));
        assert!(!pipe.passed);
    }

    #[test]
    fn test_low_clear_position_has_empty_top() {
        let pipe = Pipe::new(20.0);
        assert_eq!(pipe.collider_top.h, 0.0);
    }

    #[test]
    fn test_step_moves_pipe_and_colliders() {
        let mut pipe = Pipe::new(100.0);
        pipe.step(1.0);
        assert_eq!(pipe.x, 510.0);
        assert_eq!(pipe.collider_top.x, 534.0);
        assert_eq!(pipe.collider_bottom.x, 534.0);

        pipe.step(0.5);
        assert_eq!(pipe.x, 509.0);
    }

    #[test]
    fn test_scores_exactly_once() {
        let mut pipe = Pipe::new(100.0);
        pipe.x = 12.0;

        // 12 -> 10: not below the line yet
        assert!(!pipe.step(1.0));
        // 10 -> 8: crosses
        assert!(pipe.step(1.0));
        assert!(pipe.passed);

        for _ in 0..100 {
            assert!(!pipe.step(1.0));
        }
    }

    #[test]
    fn test_collides_with_top_and_bottom() {
        let mut pipe = Pipe::new(200.0);
        pipe.x = 50.0;
        pipe.step(0.0);

        // Top pipe spans y 0..136, x 74..154
        let in_top = Rect::new(72.0, 100.0, 32.0, 32.0);
        assert!(pipe.collides_with(&in_top));

        // Bottom pipe starts at y 264
        let in_bottom = Rect::new(72.0, 250.0, 32.0, 32.0);
        assert!(pipe.collides_with(&in_bottom));

        // Inside the gap
        let in_gap = Rect::new(72.0, 200.0, 32.0, 32.0);
        assert!(!pipe.collides_with(&in_gap));
    }

    #[test]
    fn test_gap_center() {
        assert_eq!(Pipe::new(100.0).gap_center(), 132.0);
    }
}
