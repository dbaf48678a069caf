// Locomotion error types

use thiserror::Error;

/// Errors surfaced when wiring up or configuring the locomotion controller.
///
/// These are startup-time configuration failures. The controller itself has
/// no per-tick error path: a failed clamber survey is a normal "not eligible"
/// result, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocomotionError {
    #[error("invalid movement parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("rigid body handle not found in the physics world")]
    MissingBody,

    #[error("collider handle not found in the physics world")]
    MissingCollider,
}
