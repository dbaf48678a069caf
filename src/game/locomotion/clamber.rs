// Clamber detection - wall/ledge geometry survey

use glam::Vec2;

use super::params::MovementParameters;
use super::physics::PlayerPhysics;
use super::state::FacingDirection;

/// Vertical offsets from the body origin for the outward wall rays
const WALL_RAY_OFFSETS: [f32; 3] = [0.6, 0.15, -0.3];
/// How far past the wall face the downward ledge probe starts
const LEDGE_PROBE_INSET: f32 = 0.2;
/// Height above the wall contact where the ledge probe begins
const LEDGE_PROBE_RISE: f32 = 2.0;
/// Maximum drop from the probe origin to a usable ledge floor
const MAX_LEDGE_DROP: f32 = 2.5;
/// Lift applied to the standing check's bottom edge so the ledge floor the
/// character will stand on never counts as an obstruction
const STAND_CLEARANCE: f32 = 0.01;

/// Geometry snapshot for one approved clamber attempt.
///
/// Computed fresh on every attempt and discarded when the clamber completes
/// or is cancelled; never cached across ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClamberSurvey {
    /// Point where an outward ray met the wall face
    pub wall_point: Vec2,
    /// Point on the ledge floor directly below the probe
    pub floor_point: Vec2,
    /// Standing position the character glides to: the ledge corner offset
    /// by half the standing footprint
    pub target: Vec2,
}

/// Survey the facing side for a clamberable ledge, falling back to the
/// opposite side. Returns `None` with no side effects when any check fails.
pub fn survey(
    phys: &dyn PlayerPhysics,
    facing: FacingDirection,
    params: &MovementParameters,
) -> Option<ClamberSurvey> {
    survey_side(phys, facing, params).or_else(|| survey_side(phys, facing.flipped(), params))
}

/// Run the full check chain against one side: wall hit, ledge floor hit,
/// unobstructed standing target, unobstructed two-leg glide path.
fn survey_side(
    phys: &dyn PlayerPhysics,
    side: FacingDirection,
    params: &MovementParameters,
) -> Option<ClamberSurvey> {
    let pos = phys.position();
    let out = Vec2::new(side.sign(), 0.0);

    let wall_point = WALL_RAY_OFFSETS
        .iter()
        .find_map(|dy| phys.raycast(pos + Vec2::new(0.0, *dy), out, params.clamber_reach))?;

    // Probe down from above and beyond the wall contact to find the ledge
    // floor. If the wall keeps going up, the probe starts inside it and the
    // later target check rejects the attempt.
    let probe = Vec2::new(
        wall_point.x + side.sign() * LEDGE_PROBE_INSET,
        wall_point.y + LEDGE_PROBE_RISE,
    );
    let floor_point = phys.raycast(probe, Vec2::NEG_Y, MAX_LEDGE_DROP)?;

    let half = params.standing_collider.size * 0.5;
    let target = Vec2::new(
        wall_point.x + side.sign() * half.x,
        floor_point.y + half.y,
    );

    // The standing spot itself must be clear, checked from just above the
    // ledge floor so the supporting surface doesn't reject its own ledge
    let foot = Vec2::new(target.x - half.x, floor_point.y + STAND_CLEARANCE);
    if phys.overlap_area(foot, target + half) {
        return None;
    }

    // And the glide path: a vertical leg up the wall face, then a
    // horizontal leg onto the ledge
    let rise = target.y - pos.y;
    if rise.abs() > f32::EPSILON
        && phys
            .raycast(pos, Vec2::new(0.0, rise.signum()), rise.abs())
            .is_some()
    {
        return None;
    }
    let corner = Vec2::new(pos.x, target.y);
    let run = target.x - corner.x;
    if run.abs() > f32::EPSILON
        && phys
            .raycast(corner, Vec2::new(run.signum(), 0.0), run.abs())
            .is_some()
    {
        return None;
    }

    Some(ClamberSurvey {
        wall_point,
        floor_point,
        target,
    })
}
