// Runner state machine
//
// Two visible states, switched only by the grounding pass. Accepting a jump
// leaves the state alone; the runner becomes airborne once the next grounding
// pass finds no contact.

use crate::engine::physics::{EdgeEvent, GroundingOutcome};

/// Represents the current state of the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunnerState {
    /// Feet resting on a platform top
    Grounded,
    /// In the air (rising or falling)
    #[default]
    Airborne,
}

impl RunnerState {
    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Grounded)
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Airborne)
    }

    /// Check if the runner can jump
    pub fn can_jump(&self) -> bool {
        self.is_grounded()
    }

    /// Gravity only acts on airborne runners
    pub fn applies_gravity(&self) -> bool {
        self.is_airborne()
    }
}

/// Side effects requested by a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Zero vertical speed, play the run cycle and the landing sound
    Land,
    /// Show the airborne pose
    Fall,
}

/// State machine that tracks ground contact
#[derive(Debug, Default)]
pub struct RunnerStateMachine {
    current_state: RunnerState,
}

impl RunnerStateMachine {
    /// Start airborne; the runner spawns mid-air above the first platform
    pub fn new() -> Self {
        Self {
            current_state: RunnerState::Airborne,
        }
    }

    /// Get the current state
    pub fn state(&self) -> RunnerState {
        self.current_state
    }

    /// Check if the runner can jump
    pub fn can_jump(&self) -> bool {
        self.current_state.can_jump()
    }

    /// Apply a grounding pass and report the side effects it calls for
    pub fn apply(&mut self, outcome: GroundingOutcome) -> Option<Reaction> {
        self.current_state = if outcome.grounded {
            RunnerState::Grounded
        } else {
            RunnerState::Airborne
        };

        match outcome.edge {
            EdgeEvent::JustLanded => Some(Reaction::Land),
            EdgeEvent::JustLeftGround => Some(Reaction::Fall),
            EdgeEvent::None => None,
        }
    }

    /// Reset for a fresh spawn
    pub fn respawn(&mut self) {
        self.current_state = RunnerState::Airborne;
    }
}
