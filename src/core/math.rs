// Math utilities: axis-aligned rectangles for contact tests
//
// World space follows screen conventions: x grows to the right, y grows
// downward, so a rectangle's `top` is its smallest y.

use glam::Vec2;

/// Axis-aligned rectangle (origin at the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle from a position and a size
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Check whether two rectangles overlap.
    ///
    /// Overlap must have a positive area: rectangles that only share an edge
    /// do not intersect. Negative sizes are normalized first.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_min_x, a_max_x) = min_max(self.left, self.right());
        let (a_min_y, a_max_y) = min_max(self.top, self.bottom());
        let (b_min_x, b_max_x) = min_max(other.left, other.right());
        let (b_min_y, b_max_y) = min_max(other.top, other.bottom());

        let left = a_min_x.max(b_min_x);
        let right = a_max_x.min(b_max_x);
        let top = a_min_y.max(b_min_y);
        let bottom = a_max_y.min(b_max_y);

        left < right && top < bottom
    }

    /// The band of `height` units ending at this rectangle's bottom edge.
    ///
    /// The band is always `height` tall, even when the rectangle is shorter.
    pub fn bottom_strip(&self, height: f32) -> Rect {
        Rect::new(self.left, self.bottom() - height, self.width, height)
    }

    /// The band of at most `height` units starting at this rectangle's top edge
    pub fn top_strip(&self, height: f32) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height.min(height))
    }
}

fn min_max(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 2.0, 2.0);
        assert!(outer.intersects(&inner));
    }

    #[test]
    fn test_negative_size_is_normalized() {
        let a = Rect::new(10.0, 10.0, -10.0, -10.0);
        let b = Rect::new(5.0, 5.0, 1.0, 1.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_bottom_strip() {
        let r = Rect::new(0.0, 100.0, 50.0, 80.0);
        let strip = r.bottom_strip(10.0);
        assert_eq!(strip, Rect::new(0.0, 170.0, 50.0, 10.0));
        assert_eq!(strip.bottom(), r.bottom());
    }

    #[test]
    fn test_top_strip_clamps_to_height() {
        let tall = Rect::new(0.0, 300.0, 200.0, 50.0);
        assert_eq!(tall.top_strip(10.0), Rect::new(0.0, 300.0, 200.0, 10.0));

        let thin = Rect::new(0.0, 300.0, 200.0, 4.0);
        assert_eq!(thin.top_strip(10.0).height, 4.0);
    }
}
