// Rendering contract
//
// Presentation lives outside the simulation. Game objects hand finished
// sprites to a `RenderSink` once all per-frame updates are done.

mod sprite;

pub use sprite::{Sprite, SpriteFrame};

use log::trace;

/// Receives sprites to present this frame
pub trait RenderSink {
    fn draw(&mut self, sprite: &Sprite);
}

/// Render sink that only logs what would be drawn
#[derive(Debug, Default)]
pub struct LogRenderSink {
    drawn: u64,
}

impl LogRenderSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of sprites drawn so far
    pub fn drawn(&self) -> u64 {
        self.drawn
    }
}

impl RenderSink for LogRenderSink {
    fn draw(&mut self, sprite: &Sprite) {
        self.drawn += 1;
        trace!(
            "draw texture {:?} at ({:.1}, {:.1})",
            sprite.frame.texture.id(),
            sprite.position.x,
            sprite.position.y
        );
    }
}

/// Collects sprites in draw order
impl RenderSink for Vec<Sprite> {
    fn draw(&mut self, sprite: &Sprite) {
        self.push(*sprite);
    }
}
