// Demo arena: a floor, side walls for wall-jumping, and a clamberable ledge

use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

use crate::engine::physics::{body::presets, PhysicsWorld};
use crate::game::locomotion::MovementParameters;

/// Handles for the spawned player body and its capsule
#[derive(Debug, Clone, Copy)]
pub struct PlayerHandles {
    pub body: RigidBodyHandle,
    pub collider: ColliderHandle,
}

/// Build the demo level geometry into the physics world.
///
/// Layout: a wide floor with its top surface at y = 0, tall walls on both
/// sides at x = +-12, and a ledge block on the right whose top sits at
/// y = 2.5 so it can be reached with a clamber from the floor.
pub fn build(world: &mut PhysicsWorld) {
    // Floor
    let floor = world.add_rigid_body(presets::terrain_body(0.0, -0.5));
    world.add_collider(presets::terrain_collider(24.0, 1.0), floor);

    // Side walls
    let left_wall = world.add_rigid_body(presets::terrain_body(-12.0, 6.0));
    world.add_collider(presets::terrain_collider(1.0, 14.0), left_wall);
    let right_wall = world.add_rigid_body(presets::terrain_body(12.0, 6.0));
    world.add_collider(presets::terrain_collider(1.0, 14.0), right_wall);

    // Clamberable ledge on the right half of the arena
    let ledge = world.add_rigid_body(presets::terrain_body(7.0, 1.25));
    world.add_collider(presets::terrain_collider(4.0, 2.5), ledge);
}

/// Spawn the player at the given position using the standing footprint
/// from the movement tuning
pub fn spawn_player(
    world: &mut PhysicsWorld,
    params: &MovementParameters,
    x: f32,
    y: f32,
) -> PlayerHandles {
    let standing = params.standing_collider;
    let body = world.add_rigid_body(presets::player_body(x, y));
    let collider = world.add_collider(
        presets::player_collider(standing.size.x, standing.size.y, standing.offset.y),
        body,
    );
    PlayerHandles { body, collider }
}
