// Rooftop platforms: placement ahead of the runner and recycling behind it
//
// Randomness comes from the caller's generator so a seeded generator
// reproduces the same course.

use rand::Rng;

use crate::core::Rect;

/// Ranges used when placing a new platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformLayout {
    pub min_width: f32,
    pub max_width: f32,
    /// Horizontal gap to the previous platform
    pub min_gap: f32,
    pub max_gap: f32,
    /// Range for the platform's top edge
    pub min_top: f32,
    pub max_top: f32,
    pub height: f32,
}

pub const DEFAULT_LAYOUT: PlatformLayout = PlatformLayout {
    min_width: 400.0,
    max_width: 1200.0,
    min_gap: 100.0,
    max_gap: 350.0,
    min_top: 400.0,
    max_top: 700.0,
    height: 600.0,
};

impl Default for PlatformLayout {
    fn default() -> Self {
        DEFAULT_LAYOUT
    }
}

/// A fixed number of platforms laid out left to right
#[derive(Debug, Clone)]
pub struct PlatformField {
    layout: PlatformLayout,
    /// Ordered left to right
    platforms: Vec<Rect>,
}

impl PlatformField {
    /// Lay out `count` platforms, the first one exactly at `first`
    pub fn new<R: Rng>(
        rng: &mut R,
        layout: PlatformLayout,
        first: Rect,
        count: usize,
    ) -> Self {
        let mut field = Self {
            layout,
            platforms: Vec::with_capacity(count.max(1)),
        };
        field.platforms.push(first);
        while field.platforms.len() < count {
            let next = field.next_platform(rng);
            field.platforms.push(next);
        }
        field
    }

    fn next_platform<R: Rng>(&self, rng: &mut R) -> Rect {
        let layout = &self.layout;
        let right_edge = self
            .platforms
            .last()
            .map(Rect::right)
            .unwrap_or_default();

        let gap = rng.random_range(layout.min_gap..=layout.max_gap);
        let width = rng.random_range(layout.min_width..=layout.max_width);
        let top = rng.random_range(layout.min_top..=layout.max_top);

        Rect::new(right_edge + gap, top, width, layout.height)
    }

    /// Move every platform that ended left of `left_edge` to the far right.
    ///
    /// Returns how many platforms were moved.
    pub fn recycle<R: Rng>(&mut self, rng: &mut R, left_edge: f32) -> usize {
        let mut moved = 0;
        while self
            .platforms
            .first()
            .is_some_and(|platform| platform.right() < left_edge)
        {
            self.platforms.remove(0);
            let next = self.next_platform(rng);
            self.platforms.push(next);
            moved += 1;
        }
        if moved > 0 {
            log::debug!("Recycled {} platform(s) behind x={:.0}", moved, left_edge);
        }
        moved
    }

    /// This frame's platform boxes, left to right
    pub fn colliders(&self) -> Vec<Rect> {
        self.platforms.clone()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
