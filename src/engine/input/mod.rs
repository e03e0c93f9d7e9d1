// Input handling system
//
// Maps window keyboard events to game actions.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `manager`: Collects the actions pressed during a frame
//
// ## Usage Example
//
// ```rust
// use engine::input::{Action, InputManager};
//
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per frame, take everything pressed since the last frame
// for action in input.drain_actions() {
//     if action == Action::Jump {
//         // Jump was pressed
//     }
// }
// ```

pub mod action;
pub mod manager;

// Re-export commonly used types
pub use action::Action;
pub use manager::InputManager;
