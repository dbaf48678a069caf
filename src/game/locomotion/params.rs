// Movement configuration - read-only per character

use glam::Vec2;

use super::error::LocomotionError;

/// Size and local offset of a collision capsule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderProfile {
    /// Full width and height of the capsule's bounding box
    pub size: Vec2,
    /// Offset of the capsule center relative to the body position
    pub offset: Vec2,
}

/// Axis-aligned overlap-check rectangle given as two corner offsets
/// relative to the body position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaCheck {
    pub a: Vec2,
    pub b: Vec2,
}

impl AreaCheck {
    pub const fn new(ax: f32, ay: f32, bx: f32, by: f32) -> Self {
        Self {
            a: Vec2::new(ax, ay),
            b: Vec2::new(bx, by),
        }
    }
}

/// Immutable movement tuning for one character.
///
/// `Default` carries the tuned values; construct and `validate()` a custom
/// set to build character variants (sprint modifiers, different clamber
/// reach, and so on) without touching the state machine.
#[derive(Debug, Clone)]
pub struct MovementParameters {
    /// Horizontal force while grounded (continuous, per tick)
    pub move_force: f32,
    /// Horizontal force while airborne or sliding, capped by `max_air_speed`
    pub air_maneuverability: f32,
    /// Upward impulse at the start of a jump
    pub jump_impulse: f32,
    /// Upward force sustained while the jump axis is held
    pub jump_force_sustained: f32,
    /// Length of the sustained-jump window in seconds
    pub jump_hold_time: f32,
    /// Airtime that must elapse before sustained jump force applies
    pub min_jump_hold_delay: f32,
    /// Velocity assigned on a wall-jump; x is mirrored for the jump direction
    pub wall_jump_velocity: Vec2,
    /// Linear drag while standing on the ground
    pub grounded_drag: f32,
    /// Linear drag while airborne or sliding
    pub airborne_drag: f32,
    /// Magnitude of the fast-fall force past the jump apex, also used to
    /// decelerate a wall slide against gravity
    pub extra_gravity: f32,
    /// Horizontal speed above which maneuvering forces stop applying
    pub max_air_speed: f32,
    /// Maximum horizontal distance a clamberable wall may be from the body
    pub clamber_reach: f32,
    /// Glide speed toward the clamber target
    pub clamber_speed: f32,
    /// Minimum time between state transitions
    pub state_change_cooldown: f32,
    /// Standing collision capsule
    pub standing_collider: ColliderProfile,
    /// Crouched/sliding collision capsule
    pub crouch_collider: ColliderProfile,
    /// Ground contact check under the feet
    pub ground_check: AreaCheck,
    /// Wall contact check on the right side
    pub wall_check_right: AreaCheck,
    /// Wall contact check on the left side
    pub wall_check_left: AreaCheck,
    /// Headroom check used while crouched to decide if standing is possible
    pub crouch_check: AreaCheck,
}

impl Default for MovementParameters {
    fn default() -> Self {
        Self {
            move_force: 50.0,
            air_maneuverability: 30.0,
            jump_impulse: 12.0,
            jump_force_sustained: 40.0,
            jump_hold_time: 0.25,
            min_jump_hold_delay: 0.1,
            wall_jump_velocity: Vec2::new(7.0, 12.0),
            grounded_drag: 2.5,
            airborne_drag: 0.0,
            extra_gravity: 30.0,
            max_air_speed: 7.6,
            clamber_reach: 0.6,
            clamber_speed: 6.0,
            state_change_cooldown: 0.1,
            standing_collider: ColliderProfile {
                size: Vec2::new(0.75, 1.85),
                offset: Vec2::new(0.0, -0.075),
            },
            crouch_collider: ColliderProfile {
                size: Vec2::new(0.75, 0.95),
                offset: Vec2::new(0.0, -0.525),
            },
            ground_check: AreaCheck::new(-0.36, -1.1, 0.36, -0.95),
            wall_check_right: AreaCheck::new(0.38, -0.9, 0.5, 0.8),
            wall_check_left: AreaCheck::new(-0.5, -0.9, -0.38, 0.8),
            crouch_check: AreaCheck::new(-0.36, -0.1, 0.36, 0.9),
        }
    }
}

impl MovementParameters {
    /// Check the configuration for values the state machine cannot work with
    pub fn validate(&self) -> Result<(), LocomotionError> {
        let finite = [
            self.move_force,
            self.air_maneuverability,
            self.jump_impulse,
            self.jump_force_sustained,
            self.jump_hold_time,
            self.min_jump_hold_delay,
            self.wall_jump_velocity.x,
            self.wall_jump_velocity.y,
            self.grounded_drag,
            self.airborne_drag,
            self.extra_gravity,
            self.max_air_speed,
            self.clamber_reach,
            self.clamber_speed,
            self.state_change_cooldown,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(LocomotionError::InvalidParameter(
                "all tuning values must be finite",
            ));
        }
        if self.grounded_drag < 0.0 || self.airborne_drag < 0.0 {
            return Err(LocomotionError::InvalidParameter(
                "drag coefficients must be non-negative",
            ));
        }
        if self.state_change_cooldown < 0.0 {
            return Err(LocomotionError::InvalidParameter(
                "state_change_cooldown must be non-negative",
            ));
        }
        if self.min_jump_hold_delay > self.jump_hold_time {
            return Err(LocomotionError::InvalidParameter(
                "min_jump_hold_delay must not exceed jump_hold_time",
            ));
        }
        if self.max_air_speed <= 0.0 {
            return Err(LocomotionError::InvalidParameter(
                "max_air_speed must be positive",
            ));
        }
        if self.clamber_reach <= 0.0 || self.clamber_speed <= 0.0 {
            return Err(LocomotionError::InvalidParameter(
                "clamber reach and speed must be positive",
            ));
        }
        for profile in [&self.standing_collider, &self.crouch_collider] {
            if profile.size.x <= 0.0 || profile.size.y <= 0.0 {
                return Err(LocomotionError::InvalidParameter(
                    "collider sizes must be positive",
                ));
            }
        }
        Ok(())
    }
}
