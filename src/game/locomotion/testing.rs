// Test double for the PlayerPhysics collaborator
//
// A tiny AABB world plus a recorded command log, so the state machine can
// be driven through exact geometric scenarios without rapier.

use glam::Vec2;

use super::physics::PlayerPhysics;

/// Axis-aligned box used as stand-in terrain
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Strict interior overlap; shared edges do not count as contact
    fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Slab-method ray intersection; a ray starting inside hits at t = 0
    fn ray_hit(&self, origin: Vec2, dir: Vec2, max_distance: f32) -> Option<f32> {
        let mut t_min = 0.0f32;
        let mut t_max = max_distance;
        for axis in 0..2 {
            let o = origin[axis];
            let d = dir[axis];
            if d.abs() < 1e-6 {
                if o < self.min[axis] || o > self.max[axis] {
                    return None;
                }
            } else {
                let inv = 1.0 / d;
                let mut t0 = (self.min[axis] - o) * inv;
                let mut t1 = (self.max[axis] - o) * inv;
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }
                t_min = t_min.max(t0);
                t_max = t_max.min(t1);
                if t_min > t_max {
                    return None;
                }
            }
        }
        Some(t_min)
    }
}

/// In-memory physics scene implementing the controller's collaborator trait.
///
/// Force and impulse commands accumulate until `tick` integrates them with
/// the same damping model rapier uses (`v *= 1 / (1 + dt * drag)`).
#[derive(Debug)]
pub struct TestScene {
    pub position: Vec2,
    pub velocity: Vec2,
    pub drag: f32,
    pub gravity_scale: f32,
    pub collider_size: Vec2,
    pub collider_offset: Vec2,
    pub forces: Vec2,
    pub impulses: Vec<Vec2>,
    pub boxes: Vec<Aabb>,
}

impl TestScene {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            drag: 0.0,
            gravity_scale: 1.0,
            collider_size: Vec2::new(0.75, 1.85),
            collider_offset: Vec2::new(0.0, -0.075),
            forces: Vec2::ZERO,
            impulses: Vec::new(),
            boxes: Vec::new(),
        }
    }

    /// Scene with a wide floor whose top surface is at y = 0 and the
    /// character standing on it
    pub fn grounded() -> Self {
        let mut scene = Self::new(Vec2::new(0.0, 1.0));
        scene.add_box(Vec2::new(-50.0, -1.0), Vec2::new(50.0, 0.0));
        scene
    }

    pub fn add_box(&mut self, min: Vec2, max: Vec2) {
        self.boxes.push(Aabb::from_corners(min, max));
    }

    /// Integrate accumulated commands over one tick (unit mass)
    pub fn tick(&mut self, dt: f32) {
        self.velocity += self.forces * dt;
        for impulse in self.impulses.drain(..) {
            self.velocity += impulse;
        }
        self.velocity *= 1.0 / (1.0 + dt * self.drag);
        self.position += self.velocity * dt;
        self.forces = Vec2::ZERO;
    }
}

impl PlayerPhysics for TestScene {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn apply_force(&mut self, force: Vec2) {
        self.forces += force;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.impulses.push(impulse);
    }

    fn set_drag(&mut self, drag: f32) {
        self.drag = drag;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }

    fn set_collider(&mut self, size: Vec2, offset: Vec2) {
        self.collider_size = size;
        self.collider_offset = offset;
    }

    fn overlap_area(&self, corner_a: Vec2, corner_b: Vec2) -> bool {
        let query = Aabb::from_corners(corner_a, corner_b);
        self.boxes.iter().any(|b| b.overlaps(&query))
    }

    fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<Vec2> {
        self.boxes
            .iter()
            .filter_map(|b| b.ray_hit(origin, direction, max_distance))
            .min_by(|a, b| a.total_cmp(b))
            .map(|t| origin + direction * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_strict() {
        let mut scene = TestScene::new(Vec2::ZERO);
        scene.add_box(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        // Sharing an edge is not contact
        assert!(!scene.overlap_area(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0)));
        assert!(scene.overlap_area(Vec2::new(0.9, 0.0), Vec2::new(2.0, 1.0)));
    }

    #[test]
    fn test_raycast_nearest_entry_point() {
        let mut scene = TestScene::new(Vec2::ZERO);
        scene.add_box(Vec2::new(3.0, -1.0), Vec2::new(4.0, 1.0));
        scene.add_box(Vec2::new(1.0, -1.0), Vec2::new(2.0, 1.0));
        let hit = scene
            .raycast(Vec2::ZERO, Vec2::X, 10.0)
            .expect("ray should hit the nearer box");
        assert_eq!(hit, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_raycast_from_inside_hits_at_origin() {
        let mut scene = TestScene::new(Vec2::ZERO);
        scene.add_box(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        let hit = scene.raycast(Vec2::ZERO, Vec2::NEG_Y, 5.0).unwrap();
        assert_eq!(hit, Vec2::ZERO);
    }

    #[test]
    fn test_tick_applies_drag() {
        let mut scene = TestScene::new(Vec2::ZERO);
        scene.drag = 2.5;
        scene.velocity = Vec2::new(10.0, 0.0);
        scene.tick(0.1);
        assert!(scene.velocity.x < 10.0);
        assert!(scene.velocity.x > 0.0);
    }
}
