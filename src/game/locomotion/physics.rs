// Physics collaborator interface consumed by the locomotion controller

use glam::Vec2;
use rapier2d::prelude::{
    nalgebra, point, vector, ColliderHandle, Group, InteractionGroups, Isometry, QueryFilter,
    RigidBodyHandle, SharedShape,
};

use crate::engine::physics::{CollisionGroups, PhysicsWorld};

use super::error::LocomotionError;

/// Everything the controller needs from the physics engine: the player's
/// rigid body plus terrain-filtered geometry queries.
///
/// Forces applied through `apply_force` are continuous for the current tick
/// only; implementations must not let them accumulate across ticks.
pub trait PlayerPhysics {
    /// World position of the body origin
    fn position(&self) -> Vec2;
    /// Current linear velocity
    fn velocity(&self) -> Vec2;
    /// Overwrite the linear velocity
    fn set_velocity(&mut self, velocity: Vec2);
    /// Apply a continuous force for this tick
    fn apply_force(&mut self, force: Vec2);
    /// Apply an instantaneous impulse
    fn apply_impulse(&mut self, impulse: Vec2);
    /// Set the linear drag coefficient
    fn set_drag(&mut self, drag: f32);
    /// Scale gravity for this body (1.0 = normal, 0.0 = none)
    fn set_gravity_scale(&mut self, scale: f32);
    /// Swap the collision capsule to the given footprint and local offset
    fn set_collider(&mut self, size: Vec2, offset: Vec2);
    /// True if any terrain geometry intersects the box between two corners
    /// (absolute world coordinates)
    fn overlap_area(&self, corner_a: Vec2, corner_b: Vec2) -> bool;
    /// Cast a ray against terrain; returns the hit point if one exists
    fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<Vec2>;
}

/// rapier2d-backed implementation over a borrowed `PhysicsWorld`.
///
/// Bind once per tick before stepping the controller; binding clears forces
/// accumulated on the body during the previous tick.
pub struct RapierPlayerPhysics<'a> {
    world: &'a mut PhysicsWorld,
    body: RigidBodyHandle,
    collider: ColliderHandle,
}

impl<'a> RapierPlayerPhysics<'a> {
    /// Borrow the physics world for one tick of controller work.
    ///
    /// Fails if either handle is not present in the world; this is the
    /// startup configuration check, not a per-tick error path.
    pub fn bind(
        world: &'a mut PhysicsWorld,
        body: RigidBodyHandle,
        collider: ColliderHandle,
    ) -> Result<Self, LocomotionError> {
        if world.get_rigid_body(body).is_none() {
            return Err(LocomotionError::MissingBody);
        }
        if world.get_collider(collider).is_none() {
            return Err(LocomotionError::MissingCollider);
        }
        if let Some(rb) = world.get_rigid_body_mut(body) {
            rb.reset_forces(true);
        }
        Ok(Self {
            world,
            body,
            collider,
        })
    }

    /// Query filter matching terrain geometry while ignoring the player
    fn terrain_filter(&self) -> QueryFilter {
        QueryFilter::default()
            .exclude_rigid_body(self.body)
            .exclude_sensors()
            .groups(InteractionGroups::new(
                Group::from_bits_truncate(CollisionGroups::Player as u32),
                Group::from_bits_truncate(CollisionGroups::Terrain as u32),
            ))
    }
}

impl PlayerPhysics for RapierPlayerPhysics<'_> {
    fn position(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.body)
            .map(|rb| Vec2::new(rb.translation().x, rb.translation().y))
            .unwrap_or(Vec2::ZERO)
    }

    fn velocity(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.body)
            .map(|rb| Vec2::new(rb.linvel().x, rb.linvel().y))
            .unwrap_or(Vec2::ZERO)
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        if let Some(rb) = self.world.get_rigid_body_mut(self.body) {
            rb.set_linvel(vector![velocity.x, velocity.y], true);
        }
    }

    fn apply_force(&mut self, force: Vec2) {
        if let Some(rb) = self.world.get_rigid_body_mut(self.body) {
            rb.add_force(vector![force.x, force.y], true);
        }
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        if let Some(rb) = self.world.get_rigid_body_mut(self.body) {
            rb.apply_impulse(vector![impulse.x, impulse.y], true);
        }
    }

    fn set_drag(&mut self, drag: f32) {
        if let Some(rb) = self.world.get_rigid_body_mut(self.body) {
            rb.set_linear_damping(drag);
        }
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        if let Some(rb) = self.world.get_rigid_body_mut(self.body) {
            rb.set_gravity_scale(scale, true);
        }
    }

    fn set_collider(&mut self, size: Vec2, offset: Vec2) {
        if let Some(col) = self.world.get_collider_mut(self.collider) {
            let radius = size.x / 2.0;
            let half_height = (size.y / 2.0 - radius).max(0.05);
            col.set_shape(SharedShape::capsule(
                point![0.0, -half_height],
                point![0.0, half_height],
                radius,
            ));
            col.set_position_wrt_parent(Isometry::translation(offset.x, offset.y));
        }
    }

    fn overlap_area(&self, corner_a: Vec2, corner_b: Vec2) -> bool {
        self.world.overlap_area(
            vector![corner_a.x, corner_a.y],
            vector![corner_b.x, corner_b.y],
            self.terrain_filter(),
        )
    }

    fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<Vec2> {
        self.world
            .raycast(
                vector![origin.x, origin.y],
                vector![direction.x, direction.y],
                max_distance,
                true,
                self.terrain_filter(),
            )
            .map(|hit| Vec2::new(hit.point.x, hit.point.y))
    }
}
