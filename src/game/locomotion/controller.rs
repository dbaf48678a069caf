// Locomotion state machine and per-state force application

use glam::Vec2;

use crate::engine::input::AxisSample;

use super::clamber;
use super::error::LocomotionError;
use super::events::LocomotionEvent;
use super::params::{AreaCheck, MovementParameters};
use super::physics::PlayerPhysics;
use super::state::{FacingDirection, LocomotionState};

/// Horizontal drift speed that counts as pressing into a wall
const WALL_STICK_SPEED: f32 = 0.1;
/// Horizontal speed below which the facing direction holds its last value
const FACING_FLIP_SPEED: f32 = 0.05;
/// Distance on each axis at which the clamber glide counts as arrived
const CLAMBER_ARRIVE: f32 = 0.05;

/// Player locomotion controller.
///
/// Owns the current state, facing direction, and all transient movement
/// flags; borrows the physics body and terrain queries through
/// [`PlayerPhysics`] one tick at a time. Call [`step`](Self::step) once per
/// fixed physics tick with the sampled input axes.
#[derive(Debug)]
pub struct LocomotionController {
    params: MovementParameters,
    state: LocomotionState,
    facing: FacingDirection,

    // Transient movement state
    airtime: f32,
    can_jump: bool,
    can_stand: bool,
    can_change_state: bool,
    cooldown_remaining: f32,
    can_change_direction: bool,
    is_sliding: bool,
    clamber_target: Option<Vec2>,

    // Cached for cosmetic consumers
    x_vel: f32,
    input: AxisSample,

    events: Vec<LocomotionEvent>,
}

impl LocomotionController {
    /// Create a controller for the given tuning.
    ///
    /// Fails at startup if the configuration is unusable; there is no
    /// per-tick error path after this.
    pub fn new(params: MovementParameters) -> Result<Self, LocomotionError> {
        params.validate()?;
        Ok(Self {
            params,
            state: LocomotionState::Grounded,
            facing: FacingDirection::Right,
            airtime: 0.0,
            can_jump: true,
            can_stand: true,
            can_change_state: true,
            cooldown_remaining: 0.0,
            can_change_direction: true,
            is_sliding: false,
            clamber_target: None,
            x_vel: 0.0,
            input: AxisSample::default(),
            events: Vec::new(),
        })
    }

    /// Current movement state
    pub fn state(&self) -> LocomotionState {
        self.state
    }

    /// Direction the character is facing
    pub fn facing(&self) -> FacingDirection {
        self.facing
    }

    /// Horizontal velocity sampled at the start of the last tick
    pub fn horizontal_velocity(&self) -> f32 {
        self.x_vel
    }

    /// False while wall-sliding or clambering pins the facing direction
    pub fn can_change_direction(&self) -> bool {
        self.can_change_direction
    }

    /// Input axes sampled on the last tick, for animation blending and
    /// other cosmetic consumers
    pub fn input(&self) -> AxisSample {
        self.input
    }

    /// Glide destination while clambering, `None` otherwise
    pub fn clamber_target(&self) -> Option<Vec2> {
        self.clamber_target
    }

    /// Take all notifications queued since the last drain
    pub fn drain_events(&mut self) -> Vec<LocomotionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Force a transition from an outside source.
    ///
    /// Wins over a pending cooldown but restarts its own; a no-op when
    /// `new_state` is already current. Forcing out of `Clambering` cancels
    /// the glide: suspended physics is handed back and the surveyed target
    /// is discarded before the new state applies.
    pub fn change_state(&mut self, new_state: LocomotionState, phys: &mut dyn PlayerPhysics) {
        if self.state == LocomotionState::Clambering && new_state != LocomotionState::Clambering {
            self.restore_after_clamber(phys);
        }
        self.set_state(new_state);
    }

    /// Advance the controller by one fixed tick: resolve the state, then
    /// apply that state's forces through the physics collaborator.
    pub fn step(&mut self, input: AxisSample, phys: &mut dyn PlayerPhysics, dt: f32) {
        self.input = input;
        self.x_vel = phys.velocity().x;
        self.tick_cooldown(dt);
        self.evaluate_state(phys);
        self.apply_forces(phys, dt);
    }

    // State evaluation
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    fn evaluate_state(&mut self, phys: &mut dyn PlayerPhysics) {
        // A successful clamber attempt pre-empts everything else this tick,
        // including the cooldown lock and wall resolution
        if self.state != LocomotionState::Clambering && self.input.clamber > 0.0 {
            if let Some(found) = clamber::survey(&*phys, self.facing, &self.params) {
                self.begin_clamber(found.target, phys);
                return;
            }
        }

        // Clamber drives its own physics every tick; skip the drag and
        // collider bookkeeping entirely while it runs
        if self.state == LocomotionState::Clambering {
            return;
        }

        if self.can_change_state {
            if self.touching(&*phys, self.params.ground_check) {
                if self.input.vertical >= 0.0 && self.can_stand {
                    self.set_state(LocomotionState::Grounded);
                } else {
                    self.set_state(LocomotionState::GroundSliding);
                    self.can_stand = !self.touching(&*phys, self.params.crouch_check);
                }
            } else {
                // Right wall wins on simultaneous contact
                if self.touching(&*phys, self.params.wall_check_right) {
                    self.resolve_wall(phys, FacingDirection::Right);
                } else if self.touching(&*phys, self.params.wall_check_left) {
                    self.resolve_wall(phys, FacingDirection::Left);
                } else {
                    self.set_state(LocomotionState::Airborne);
                    self.can_change_direction = true;
                }
                // Leaving the ground must never leave a stale crouch lock
                self.can_stand = true;
            }
        }

        // Drag and airtime bookkeeping
        match self.state {
            LocomotionState::Airborne => {
                phys.set_drag(self.params.airborne_drag);
            }
            LocomotionState::GroundSliding => {
                // Reduced friction while sliding
                phys.set_drag(self.params.airborne_drag);
                self.airtime = 0.0;
            }
            _ => {
                phys.set_drag(self.params.grounded_drag);
                self.airtime = 0.0;
            }
        }

        // Collider footprint swaps only on slide edges
        if self.state == LocomotionState::GroundSliding {
            if !self.is_sliding {
                let crouch = self.params.crouch_collider;
                phys.set_collider(crouch.size, crouch.offset);
                self.is_sliding = true;
            }
        } else if self.is_sliding {
            let standing = self.params.standing_collider;
            phys.set_collider(standing.size, standing.offset);
            self.is_sliding = false;
        }

        // Jump re-arms only once the axis returns to neutral
        if self.input.jump == 0.0 {
            self.can_jump = true;
        }
    }

    /// Resolve contact with a side wall: hold or enter the wall slide when
    /// pressed or drifting into it, otherwise peel off into the air.
    fn resolve_wall(&mut self, phys: &mut dyn PlayerPhysics, side: FacingDirection) {
        let s = side.sign();
        let slide_state = match side {
            FacingDirection::Right => LocomotionState::WallSlidingRight,
            FacingDirection::Left => LocomotionState::WallSlidingLeft,
        };

        let inward = self.input.horizontal * s;
        let drifting = phys.velocity().x * s > WALL_STICK_SPEED;
        let holding = self.state == slide_state && inward >= 0.0;

        if inward > 0.0 || drifting || holding {
            self.facing = side;
            self.can_change_direction = false;
            self.set_state(slide_state);

            if self.input.jump > 0.0 && self.can_jump {
                self.airtime = 0.0;
                self.wall_jump(phys, side.flipped());
            }
        } else {
            // Moving away from the wall; no further wall checks this tick
            self.set_state(LocomotionState::Airborne);
        }
    }

    fn touching(&self, phys: &dyn PlayerPhysics, check: AreaCheck) -> bool {
        let pos = phys.position();
        phys.overlap_area(pos + check.a, pos + check.b)
    }

    // Per-state physics
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    fn apply_forces(&mut self, phys: &mut dyn PlayerPhysics, dt: f32) {
        match self.state {
            LocomotionState::Grounded => {
                phys.apply_force(Vec2::new(self.input.horizontal * self.params.move_force, 0.0));
                if self.input.jump > 0.0 && self.can_jump {
                    self.jump(phys);
                }
                self.update_facing(phys);
            }
            LocomotionState::Airborne => {
                if self.airtime < self.params.jump_hold_time {
                    self.airtime += dt;
                    if self.airtime >= self.params.min_jump_hold_delay {
                        if self.input.jump > 0.0 {
                            phys.apply_force(Vec2::new(0.0, self.params.jump_force_sustained));
                        } else {
                            // Releasing jump ends the hold window and starts
                            // the fast fall
                            self.airtime = self.params.jump_hold_time;
                        }
                        self.maneuver(phys);
                    }
                } else {
                    phys.apply_force(Vec2::new(0.0, -self.params.extra_gravity));
                }
                self.update_facing(phys);
            }
            LocomotionState::GroundSliding => {
                self.maneuver(phys);
                if self.input.jump > 0.0 && self.can_jump && self.can_stand {
                    self.jump(phys);
                }
            }
            LocomotionState::WallSlidingRight => {
                if self.input.jump > 0.0 && self.can_jump {
                    self.wall_jump(phys, FacingDirection::Left);
                } else {
                    self.wall_slide_friction(phys);
                }
            }
            LocomotionState::WallSlidingLeft => {
                if self.input.jump > 0.0 && self.can_jump {
                    self.wall_jump(phys, FacingDirection::Right);
                } else {
                    self.wall_slide_friction(phys);
                }
            }
            LocomotionState::Clambering => {
                self.drive_clamber(phys);
            }
        }
    }

    /// Capped horizontal steering used while airborne or sliding
    fn maneuver(&mut self, phys: &mut dyn PlayerPhysics) {
        if phys.velocity().x.abs() < self.params.max_air_speed {
            phys.apply_force(Vec2::new(
                self.input.horizontal * self.params.air_maneuverability,
                0.0,
            ));
        }
    }

    /// Upward force opposing gravity to slow the slide down the wall
    fn wall_slide_friction(&mut self, phys: &mut dyn PlayerPhysics) {
        phys.apply_force(Vec2::new(0.0, self.params.extra_gravity));
    }

    fn jump(&mut self, phys: &mut dyn PlayerPhysics) {
        phys.apply_impulse(Vec2::new(0.0, self.params.jump_impulse));
        self.set_state(LocomotionState::Airborne);
        self.can_jump = false;
    }

    /// Kick off the wall: overwrite velocity with the wall-jump vector
    /// aimed away from the wall and tell the legs which way to face.
    fn wall_jump(&mut self, phys: &mut dyn PlayerPhysics, away: FacingDirection) {
        let v = self.params.wall_jump_velocity;
        phys.set_velocity(Vec2::new(v.x * away.sign(), v.y));
        self.events.push(LocomotionEvent::LegsFace(away));
        self.set_state(LocomotionState::Airborne);
        self.can_jump = false;
    }

    fn update_facing(&mut self, phys: &dyn PlayerPhysics) {
        if !self.can_change_direction {
            return;
        }
        let vx = phys.velocity().x;
        if vx > FACING_FLIP_SPEED {
            self.facing = FacingDirection::Right;
        } else if vx < -FACING_FLIP_SPEED {
            self.facing = FacingDirection::Left;
        }
    }

    // Clamber lifecycle
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    /// Suspend normal physics and start gliding toward the surveyed target.
    /// Bypasses the cooldown mutator so the lock can never interrupt the
    /// clamber's own per-tick takeover.
    fn begin_clamber(&mut self, target: Vec2, phys: &mut dyn PlayerPhysics) {
        phys.set_gravity_scale(0.0);
        phys.set_drag(self.params.grounded_drag);
        let crouch = self.params.crouch_collider;
        phys.set_collider(crouch.size, Vec2::ZERO);

        self.clamber_target = Some(target);
        self.force_state(LocomotionState::Clambering);
        self.can_change_state = false;
        // A pending cooldown unlock must not fire mid-clamber
        self.cooldown_remaining = 0.0;
        self.can_change_direction = false;
    }

    fn drive_clamber(&mut self, phys: &mut dyn PlayerPhysics) {
        let Some(target) = self.clamber_target else {
            // Only reachable when Clambering was forced externally
            log::warn!("clambering without a target; falling back to airborne");
            self.abort_clamber(phys);
            return;
        };

        let delta = target - phys.position();
        let arrived_x = delta.x.abs() <= CLAMBER_ARRIVE;
        let arrived_y = delta.y.abs() <= CLAMBER_ARRIVE;
        if arrived_x && arrived_y {
            self.finish_clamber(phys);
            return;
        }

        // Close the vertical gap while still beside the wall, then slide
        // horizontally onto the ledge
        let dir = if !arrived_y && !arrived_x {
            Vec2::new(0.0, delta.y.signum())
        } else if !arrived_x {
            Vec2::new(delta.x.signum(), 0.0)
        } else {
            Vec2::new(0.0, delta.y.signum())
        };
        phys.set_velocity(dir * self.params.clamber_speed);
    }

    fn finish_clamber(&mut self, phys: &mut dyn PlayerPhysics) {
        self.restore_after_clamber(phys);
        self.force_state(LocomotionState::Grounded);
    }

    fn abort_clamber(&mut self, phys: &mut dyn PlayerPhysics) {
        self.restore_after_clamber(phys);
        self.force_state(LocomotionState::Airborne);
    }

    fn restore_after_clamber(&mut self, phys: &mut dyn PlayerPhysics) {
        phys.set_gravity_scale(1.0);
        let standing = self.params.standing_collider;
        phys.set_collider(standing.size, standing.offset);
        self.clamber_target = None;
        self.is_sliding = false;
        self.can_change_state = true;
        self.cooldown_remaining = 0.0;
        self.can_change_direction = true;
    }

    // State mutators
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    /// Cooldown-gated mutator used by every non-clamber transition
    fn set_state(&mut self, new_state: LocomotionState) {
        if new_state == self.state {
            return;
        }
        self.force_state(new_state);
        if self.params.state_change_cooldown > 0.0 {
            self.can_change_state = false;
            self.cooldown_remaining = self.params.state_change_cooldown;
        }
    }

    /// Direct mutator: transition and notify without touching the cooldown
    fn force_state(&mut self, new_state: LocomotionState) {
        if new_state == self.state {
            return;
        }
        let from = self.state;
        self.state = new_state;
        log::debug!("locomotion state {:?} -> {:?}", from, new_state);
        self.events.push(LocomotionEvent::StateChanged {
            from,
            to: new_state,
        });
    }

    fn tick_cooldown(&mut self, dt: f32) {
        if self.cooldown_remaining > 0.0 {
            self.cooldown_remaining -= dt;
            if self.cooldown_remaining <= 0.0 {
                self.cooldown_remaining = 0.0;
                self.can_change_state = true;
            }
        }
    }
}
