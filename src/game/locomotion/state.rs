// Locomotion state and facing direction

/// Movement mode of the player character. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionState {
    /// Standing or running on walkable ground
    Grounded,
    /// In the air (jumping, falling, or fast-falling)
    Airborne,
    /// Crouched slide along the ground with the reduced collider
    GroundSliding,
    /// Pressed against a wall on the right while airborne
    WallSlidingRight,
    /// Pressed against a wall on the left while airborne
    WallSlidingLeft,
    /// Gliding along a computed path over a ledge, physics suspended
    Clambering,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self::Grounded
    }
}

impl LocomotionState {
    /// Check if the character has ground contact in this state
    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Grounded | Self::GroundSliding)
    }

    /// Check if the character is in free air (not wall-supported)
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Airborne)
    }

    /// Check if the character is pressed against a wall
    pub fn is_wall_sliding(&self) -> bool {
        matches!(self, Self::WallSlidingRight | Self::WallSlidingLeft)
    }

    /// Get the animation name for this state
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Grounded => "stand",
            Self::Airborne => "air",
            Self::GroundSliding => "slide",
            Self::WallSlidingRight => "wall_right",
            Self::WallSlidingLeft => "wall_left",
            Self::Clambering => "clamber",
        }
    }
}

/// Horizontal direction the character is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacingDirection {
    Right,
    Left,
}

impl Default for FacingDirection {
    fn default() -> Self {
        Self::Right
    }
}

impl FacingDirection {
    /// Unit sign of this direction on the x axis
    pub fn sign(&self) -> f32 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }

    /// The opposite direction
    pub fn flipped(&self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        assert_eq!(LocomotionState::default(), LocomotionState::Grounded);
    }

    #[test]
    fn test_grounded_states() {
        assert!(LocomotionState::Grounded.is_grounded());
        assert!(LocomotionState::GroundSliding.is_grounded());
        assert!(!LocomotionState::Airborne.is_grounded());
        assert!(!LocomotionState::WallSlidingLeft.is_grounded());
        assert!(!LocomotionState::Clambering.is_grounded());
    }

    #[test]
    fn test_wall_sliding_states() {
        assert!(LocomotionState::WallSlidingRight.is_wall_sliding());
        assert!(LocomotionState::WallSlidingLeft.is_wall_sliding());
        assert!(!LocomotionState::Airborne.is_wall_sliding());
    }

    #[test]
    fn test_animation_names_are_unique() {
        let names = [
            LocomotionState::Grounded.animation_name(),
            LocomotionState::Airborne.animation_name(),
            LocomotionState::GroundSliding.animation_name(),
            LocomotionState::WallSlidingRight.animation_name(),
            LocomotionState::WallSlidingLeft.animation_name(),
            LocomotionState::Clambering.animation_name(),
        ];
        let unique: std::collections::HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_facing_sign() {
        assert_eq!(FacingDirection::Right.sign(), 1.0);
        assert_eq!(FacingDirection::Left.sign(), -1.0);
    }

    #[test]
    fn test_facing_flipped() {
        assert_eq!(FacingDirection::Right.flipped(), FacingDirection::Left);
        assert_eq!(FacingDirection::Left.flipped(), FacingDirection::Right);
    }
}
