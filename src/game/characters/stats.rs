// Runner tuning - one set of numbers for the single playable character

use glam::Vec2;

use crate::engine::physics::GroundingConfig;

/// Fixed movement and contact tuning for the runner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunnerStats {
    // Movement
    /// Downward acceleration while airborne (pixels/second²)
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative = upward)
    pub jump_speed: f32,
    /// Horizontal speed given at spawn (pixels/second)
    pub run_speed_initial: f32,
    /// Where the runner appears
    pub spawn_position: Vec2,

    // Contact
    /// Height of the band at the bottom of the runner used for ground tests
    pub feet_height: f32,
    /// Height of the band at the top of each platform used for ground tests
    pub platform_top_height: f32,

    // Animation
    /// Frames per second for the run cycle
    pub run_fps: f32,
}

pub const BASE_STATS: RunnerStats = RunnerStats {
    gravity: 2000.0,
    jump_speed: -1500.0,
    run_speed_initial: 500.0,
    spawn_position: Vec2::ZERO,

    feet_height: 10.0,
    platform_top_height: 10.0,

    run_fps: 10.0,
};

impl Default for RunnerStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl RunnerStats {
    /// Strip sizes for the grounding pass
    pub fn grounding(&self) -> GroundingConfig {
        GroundingConfig {
            feet_height: self.feet_height,
            platform_top_height: self.platform_top_height,
        }
    }
}
