// Input manager - turns window key events into per-frame actions

use super::action::{default_bindings, Action, InputSource};
use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Collects the actions pressed since the last frame.
///
/// Presses are edge-triggered: holding a key or receiving OS key repeats
/// produces a single action. Nothing is buffered beyond the current frame.
#[derive(Debug)]
pub struct InputManager {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Actions whose key is currently held down
    held: HashSet<Action>,

    /// Actions pressed since the last drain, in arrival order
    pressed: Vec<Action>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_bindings(default_bindings())
    }

    pub fn with_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            held: HashSet::new(),
            pressed: Vec::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Process a single key transition
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        let Some(&action) = self.bindings.get(&InputSource::key(key_code)) else {
            return;
        };

        match state {
            ElementState::Pressed => {
                if !repeat && self.held.insert(action) {
                    self.pressed.push(action);
                }
            }
            ElementState::Released => {
                self.held.remove(&action);
            }
        }
    }

    /// Take the actions pressed since the last call
    pub fn drain_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.pressed)
    }

    /// Forget all held keys and pending presses
    pub fn reset(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }
}
