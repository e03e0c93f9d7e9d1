/// Frame timing
///
/// Measures the real time between frames. The simulation advances by exactly
/// that much each frame; long stalls are passed through unchanged.
use std::time::{Duration, Instant};

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Frame clock state
pub struct FrameClock {
    /// Time the current frame started
    last_frame_time: Instant,

    /// Time when the clock was created
    start_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Number of frames measured so far
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FrameClock {
    /// Create a new frame clock
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame_time: now,
            start_time: now,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Start a new frame and return the seconds elapsed since the last one
    pub fn restart(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.record(frame_time);
        frame_time.as_secs_f32()
    }

    /// Start timing from now without counting a frame.
    ///
    /// Call once right before the first frame so setup time does not end up
    /// in the first step.
    pub fn reset(&mut self) {
        self.last_frame_time = Instant::now();
    }

    fn record(&mut self, frame_time: Duration) {
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of frames measured
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        // Calculate average frame time
        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        // Convert to FPS
        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
