// Input manager - routes winit keyboard events to game actions

use super::action::{default_bindings, Action};
use super::axes::AxisSample;
use super::player::PlayerInput;
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Input manager for the local player
pub struct InputManager {
    /// Physical key to action bindings
    bindings: HashMap<KeyCode, Action>,

    /// Edge-and-level state for the bound actions
    player: PlayerInput,
}

impl InputManager {
    /// Create an input manager with the default keyboard bindings
    pub fn new() -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
            player: PlayerInput::new(),
        }
    }

    /// Rebind a physical key to an action
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.bindings.insert(key, action);
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        let Some(&action) = self.bindings.get(&key_code) else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                // Key repeats are not press edges
                if !event.repeat {
                    self.player.press(action);
                }
            }
            ElementState::Released => {
                self.player.release(action);
            }
        }
    }

    /// Sample the movement axes for this tick
    pub fn axes(&self) -> AxisSample {
        AxisSample::from_input(&self.player)
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.player.is_pressed(action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.player.just_pressed(action)
    }

    /// Update input state for a new frame.
    /// Call this once per frame after processing all events.
    pub fn update(&mut self) {
        self.player.update();
    }

    /// Drop all held keys (used when the window loses focus)
    pub fn reset(&mut self) {
        self.player.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_starts_neutral() {
        let manager = InputManager::new();
        assert_eq!(manager.axes(), AxisSample::default());
        assert!(!manager.is_pressed(Action::Jump));
    }

    #[test]
    fn test_direct_input_manipulation() {
        let mut manager = InputManager::new();
        manager.player.press(Action::MoveLeft);
        assert!(manager.is_pressed(Action::MoveLeft));
        assert_eq!(manager.axes().horizontal, -1.0);
    }

    #[test]
    fn test_update_clears_just_pressed() {
        let mut manager = InputManager::new();
        manager.player.press(Action::Pause);
        assert!(manager.just_pressed(Action::Pause));

        manager.update();
        assert!(!manager.just_pressed(Action::Pause));
        assert!(manager.is_pressed(Action::Pause));
    }

    #[test]
    fn test_rebinding_a_key() {
        let mut manager = InputManager::new();
        manager.bind(KeyCode::KeyJ, Action::Jump);
        assert_eq!(manager.bindings.get(&KeyCode::KeyJ), Some(&Action::Jump));
    }

    #[test]
    fn test_reset_drops_held_keys() {
        let mut manager = InputManager::new();
        manager.player.press(Action::Jump);
        manager.player.press(Action::MoveRight);
        manager.reset();
        assert_eq!(manager.axes(), AxisSample::default());
    }
}
