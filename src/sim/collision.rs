//! Axis-aligned collision boxes
//!
//! Overlap is decided by a corner test: two boxes collide when a corner of
//! either one lies strictly inside the other. Touching edges never collide,
//! and neither do two boxes crossing like a "+" with no corner inside the
//! other. Gameplay is tuned against exactly this test, so it stays as is.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A collision rectangle in logical screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    /// Width (never negative)
    pub w: f32,
    /// Height (never negative)
    pub h: f32,
}

impl Rect {
    /// Create a rectangle; negative extents are clamped to zero
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin() + self.size() * 0.5
    }

    /// Move the rectangle without resizing it
    #[inline]
    pub fn set_origin(&mut self, origin: Vec2) {
        self.x = origin.x;
        self.y = origin.y;
    }

    /// Corners in clockwise order starting top-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.w, self.y),
            Vec2::new(self.x + self.w, self.y + self.h),
            Vec2::new(self.x, self.y + self.h),
        ]
    }

    /// Point strictly inside the open interior (edges excluded)
    #[inline]
    pub fn contains_strict(&self, point: Vec2) -> bool {
        point.x > self.x
            && point.x < self.x + self.w
            && point.y > self.y
            && point.y < self.y + self.h
    }

    /// Corner-in-box overlap test (see module docs)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.corners().iter().any(|&c| other.contains_strict(c))
            || other.corners().iter().any(|&c| self.contains_strict(c))
    }
}

/// Free-function form of [`Rect::overlaps`]
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}
