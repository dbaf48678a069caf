// Notifications emitted by the locomotion controller

use super::state::{FacingDirection, LocomotionState};

/// Observer notifications for animation, camera, and UI consumers.
///
/// Events are queued by the controller during `step` and drained by the
/// caller; `StateChanged` fires exactly once per actual transition, never
/// when a transition is requested into the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionEvent {
    /// The state machine moved to a new state (includes clamber enter/exit)
    StateChanged {
        from: LocomotionState,
        to: LocomotionState,
    },
    /// The character's legs should face this direction (fired on wall-jump)
    LegsFace(FacingDirection),
}
