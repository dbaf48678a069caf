// Physics system using rapier2d

pub mod body;
mod collision;
mod world;

pub use body::{BodyBuilder, ColliderBuilder2D, ColliderHandle, RigidBodyHandle};
pub use collision::CollisionGroups;
pub use world::{PhysicsWorld, RayHit};

// Re-export commonly used rapier types for convenience
#[allow(unused_imports)]
pub use rapier2d::prelude::{nalgebra, Isometry, QueryFilter, Real, RigidBodyType, Vector};
