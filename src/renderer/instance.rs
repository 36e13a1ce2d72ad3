//! Sprite instance data for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::sim::SpriteId;

/// One textured quad, laid out for direct upload as instance data
///
/// A zero source size means the whole sheet; a zero destination size means
/// "draw at source size".
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Source rectangle in the sheet: x, y, w, h
    pub src: [f32; 4],
    /// Destination rectangle on screen: x, y, w, h
    pub dst: [f32; 4],
    /// Point of the quad placed at dst x/y, as a fraction of its size
    pub pivot: [f32; 2],
    pub sheet: u32,
    pub _pad: u32,
}

impl SpriteInstance {
    /// Cut `src` out of `sheet` and stretch it over `dst`
    pub const fn new(sheet: SpriteId, src: [f32; 4], dst: [f32; 4]) -> Self {
        Self {
            src,
            dst,
            pivot: [0.0, 0.0],
            sheet: sheet.0,
            _pad: 0,
        }
    }

    /// The whole sheet at its own size, top-left at `pos`
    pub fn whole(sheet: SpriteId, pos: Vec2) -> Self {
        Self::new(sheet, [0.0; 4], [pos.x, pos.y, 0.0, 0.0])
    }

    /// The whole sheet at its own size, centered on `pos`
    pub fn centered(sheet: SpriteId, pos: Vec2) -> Self {
        Self {
            pivot: [0.5, 0.5],
            ..Self::whole(sheet, pos)
        }
    }

    pub fn sprite(&self) -> SpriteId {
        SpriteId(self.sheet)
    }
}

/// Colors for game elements
pub mod colors {
    /// Title and game-over background (CSS lightgray)
    pub const MENU_BACKGROUND: [f32; 4] = [0.827, 0.827, 0.827, 1.0];
    /// In-game sky, #ccebff
    pub const SKY: [f32; 4] = [0.8, 0.922, 1.0, 1.0];
    pub const MENU_TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const SCORE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    /// Score drop shadow, #ff9900
    pub const SCORE_SHADOW: [f32; 4] = [1.0, 0.6, 0.0, 1.0];
    /// Translucent red collision boxes
    pub const COLLIDER: [f32; 4] = [1.0, 0.0, 0.0, 0.2];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 48);
        let instances = [
            SpriteInstance::whole(SpriteId::DUCK, Vec2::new(1.0, 2.0)),
            SpriteInstance::centered(SpriteId::CLOUD, Vec2::new(3.0, 4.0)),
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 96);
    }

    #[test]
    fn test_centered_pivot() {
        let s = SpriteInstance::centered(SpriteId::CLOUD, Vec2::new(100.0, 50.0));
        assert_eq!(s.pivot, [0.5, 0.5]);
        assert_eq!(s.dst, [100.0, 50.0, 0.0, 0.0]);
        assert_eq!(s.sprite(), SpriteId::CLOUD);
    }
}
