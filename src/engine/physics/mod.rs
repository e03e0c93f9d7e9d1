// Physics for a single runner: semi-implicit Euler integration and
// feet-strip ground contact against platform boxes.

pub mod body;
pub mod grounding;

pub use body::Body;
pub use grounding::{resolve_grounding, EdgeEvent, GroundingConfig, GroundingOutcome};
