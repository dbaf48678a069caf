// Game-specific systems: level setup and player locomotion

pub mod arena;
pub mod locomotion;
