// Digital actions folded into the axis sample the locomotion layer consumes

use super::action::Action;
use super::player::PlayerInput;

/// Snapshot of the movement axes for one fixed tick.
///
/// Keyboard input is digital, so each axis is -1.0, 0.0, or 1.0; the jump
/// and clamber triggers are 0.0 or 1.0. An analog backend would produce
/// intermediate values through the same type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisSample {
    /// Left/right movement axis, positive is right
    pub horizontal: f32,
    /// Up/down axis, negative is a crouch/slide request
    pub vertical: f32,
    /// Jump trigger; zero means fully released
    pub jump: f32,
    /// Clamber trigger
    pub clamber: f32,
}

impl AxisSample {
    /// Fold the currently pressed actions into axis values. Opposing keys
    /// cancel out.
    pub fn from_input(input: &PlayerInput) -> Self {
        let mut sample = Self::default();

        if input.is_pressed(Action::MoveLeft) {
            sample.horizontal -= 1.0;
        }
        if input.is_pressed(Action::MoveRight) {
            sample.horizontal += 1.0;
        }
        if input.is_pressed(Action::Down) {
            sample.vertical -= 1.0;
        }
        if input.is_pressed(Action::Up) {
            sample.vertical += 1.0;
        }
        if input.is_pressed(Action::Jump) {
            sample.jump = 1.0;
        }
        if input.is_pressed(Action::Clamber) {
            sample.clamber = 1.0;
        }

        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_sample() {
        let input = PlayerInput::new();
        let sample = AxisSample::from_input(&input);
        assert_eq!(sample, AxisSample::default());
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveLeft);
        input.press(Action::MoveRight);
        let sample = AxisSample::from_input(&input);
        assert_eq!(sample.horizontal, 0.0);
    }

    #[test]
    fn test_down_is_negative_vertical() {
        let mut input = PlayerInput::new();
        input.press(Action::Down);
        let sample = AxisSample::from_input(&input);
        assert_eq!(sample.vertical, -1.0);
    }

    #[test]
    fn test_triggers_are_digital() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.press(Action::Clamber);
        let sample = AxisSample::from_input(&input);
        assert_eq!(sample.jump, 1.0);
        assert_eq!(sample.clamber, 1.0);
    }
}
