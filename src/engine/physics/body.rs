// Kinematic body and its per-frame integration step

use glam::Vec2;

/// Position and velocity of a single moving body.
///
/// Units are world pixels and pixels per second. Positive `velocity.y`
/// means the body is moving down the screen (falling).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Advance the body by `dt` seconds.
    ///
    /// Gravity is added to the vertical velocity only while airborne, then the
    /// position moves by the updated velocity (semi-implicit Euler). Horizontal
    /// movement is applied whether or not the body is grounded.
    pub fn integrate(&mut self, dt: f32, gravity: f32, airborne: bool) {
        if airborne {
            self.velocity.y += gravity * dt;
        }

        self.position += self.velocity * dt;
    }
}
