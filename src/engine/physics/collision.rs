use rapier2d::prelude::*;

/// Collision groups for filtering what objects can collide with each other
///
/// The locomotion queries (ground probes, wall probes, clamber rays) filter
/// on Terrain so that sensors and the player's own capsule never register
/// as support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0001,

    /// The player character
    Player = 0b0010,

    /// Static level geometry: floors, walls, ledges
    Terrain = 0b0100,

    /// Trigger zones - detect but never block
    Sensor = 0b1000,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // The player collides with level geometry and trips sensors
            CollisionGroups::Player => Group::from_bits_truncate(
                CollisionGroups::Terrain as u32 | CollisionGroups::Sensor as u32,
            ),

            // Terrain blocks the player and stacks against itself
            CollisionGroups::Terrain => Group::from_bits_truncate(
                CollisionGroups::Player as u32 | CollisionGroups::Terrain as u32,
            ),

            // Sensors see everything but never resolve contacts
            CollisionGroups::Sensor => Group::ALL,

            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}
