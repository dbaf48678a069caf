// Input handling system
//
// Keyboard input routed through winit, mapped to game actions, and folded
// into the axis sample the locomotion controller consumes each tick.
//
// - `action`: game actions and default key bindings
// - `player`: edge-and-level state for the bound actions
// - `axes`: digital actions folded into per-tick axis values
// - `manager`: routes winit keyboard events to the above

pub mod action;
pub mod axes;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use axes::AxisSample;
pub use manager::InputManager;
pub use player::PlayerInput;
