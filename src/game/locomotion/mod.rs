// Player locomotion: state machine, clamber detection, physics seam

pub mod clamber;
pub mod controller;
pub mod error;
pub mod events;
pub mod params;
pub mod physics;
pub mod state;

#[cfg(test)]
pub mod testing;

pub use controller::LocomotionController;
pub use error::LocomotionError;
pub use events::LocomotionEvent;
pub use params::MovementParameters;
pub use physics::{PlayerPhysics, RapierPlayerPhysics};
pub use state::{FacingDirection, LocomotionState};
