// Character system
//
// Everything related to the runner:
// - Runner controller and its per-frame phases
// - Tuning stats
// - Grounded/airborne state machine
// - Animation clips and playback

pub mod animation;
pub mod character;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use character::{Runner, RunnerCommand};
pub use stats::BASE_STATS;
