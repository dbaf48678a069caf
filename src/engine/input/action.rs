// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Up,
    Down,
    Jump,
    Clamber,

    // Meta actions
    Pause,
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement (WASD - standard gaming layout)
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::KeyW, Action::Up),
        (KeyCode::KeyS, Action::Down),
        (KeyCode::Space, Action::Jump),
        (KeyCode::ShiftLeft, Action::Clamber),
        (KeyCode::Escape, Action::Pause),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Jump, Action::Jump);
        assert_ne!(Action::Jump, Action::Down);
    }

    #[test]
    fn test_default_bindings_cover_movement() {
        let bindings = default_bindings();
        for action in [
            Action::MoveLeft,
            Action::MoveRight,
            Action::Jump,
            Action::Clamber,
        ] {
            assert!(
                bindings.iter().any(|(_, a)| *a == action),
                "missing default binding for {action:?}"
            );
        }
    }

    #[test]
    fn test_no_duplicate_keys_in_defaults() {
        let bindings = default_bindings();
        let mut seen = std::collections::HashSet::new();
        for (key, _) in bindings {
            assert!(seen.insert(key), "Duplicate key found in default bindings");
        }
    }
}
