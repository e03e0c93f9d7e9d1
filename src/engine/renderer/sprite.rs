// Sprite frames and draw commands

use glam::Vec2;

use crate::core::Rect;
use crate::engine::assets::TextureHandle;

/// One drawable image: a texture plus its size in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteFrame {
    pub texture: TextureHandle,
    pub size: Vec2,
}

impl SpriteFrame {
    pub fn new(texture: TextureHandle, size: Vec2) -> Self {
        Self { texture, size }
    }

    /// Bounds of this frame when its top-left corner sits at `position`
    pub fn bounds_at(&self, position: Vec2) -> Rect {
        Rect::from_position_size(position, self.size)
    }
}

/// A frame placed in the world, ready for the render sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Top-left corner in world space
    pub position: Vec2,
    pub frame: SpriteFrame,
}

impl Sprite {
    pub fn new(position: Vec2, frame: SpriteFrame) -> Self {
        Self { position, frame }
    }
}
