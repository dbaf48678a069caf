use rapier2d::prelude::*;

/// Handle to identify rigid bodies
pub type RigidBodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Handle to identify colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// Result of a terrain raycast
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Collider the ray struck
    pub collider: ColliderHandle,
    /// Distance along the ray to the hit
    pub toi: Real,
    /// World-space point where the ray struck
    pub point: Point<Real>,
}

/// Physics world that manages all physics simulation
pub struct PhysicsWorld {
    /// Gravity vector (default: -20.0 m/s² in y-axis, tuned for a snappy
    /// platformer rather than earth gravity)
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Query pipeline for raycasts and area probes
    query_pipeline: QueryPipeline,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,
}

impl PhysicsWorld {
    /// Create a new physics world with default settings
    pub fn new() -> Self {
        Self::with_gravity(vector![0.0, -20.0])
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        // Fixed timestep of 1/60 seconds (60 FPS)
        integration_parameters.dt = 1.0 / 60.0;

        Self {
            gravity,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a mutable reference to a rigid body
    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// Get a reference to a collider
    pub fn get_collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Get a mutable reference to a collider
    pub fn get_collider_mut(&mut self, handle: ColliderHandle) -> Option<&mut Collider> {
        self.collider_set.get_mut(handle)
    }

    /// Cast a ray and return the first hit
    pub fn raycast(
        &self,
        ray_origin: Vector<Real>,
        ray_dir: Vector<Real>,
        max_toi: Real,
        solid: bool,
        filter: QueryFilter,
    ) -> Option<RayHit> {
        let ray = Ray::new(point![ray_origin.x, ray_origin.y], ray_dir);
        self.query_pipeline
            .cast_ray(
                &self.rigid_body_set,
                &self.collider_set,
                &ray,
                max_toi,
                solid,
                filter,
            )
            .map(|(collider, toi)| RayHit {
                collider,
                toi,
                point: ray.point_at(toi),
            })
    }

    /// True if any collider accepted by the filter intersects the
    /// axis-aligned box spanned by two world-space corners
    pub fn overlap_area(
        &self,
        corner_a: Vector<Real>,
        corner_b: Vector<Real>,
        filter: QueryFilter,
    ) -> bool {
        let half = (corner_b - corner_a).abs() / 2.0;
        let center = (corner_a + corner_b) / 2.0;
        let shape = SharedShape::cuboid(half.x, half.y);
        let shape_pos = Isometry::translation(center.x, center.y);

        self.query_pipeline
            .intersection_with_shape(
                &self.rigid_body_set,
                &self.collider_set,
                &shape_pos,
                &*shape,
                filter,
            )
            .is_some()
    }

    /// Get current gravity
    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    /// Get the current timestep
    pub fn timestep(&self) -> Real {
        self.integration_parameters.dt
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::presets;

    fn world_with_floor() -> PhysicsWorld {
        let mut world = PhysicsWorld::new();
        let floor = world.add_rigid_body(presets::terrain_body(0.0, -0.25));
        world.add_collider(presets::terrain_collider(20.0, 0.5), floor);
        // Prime the query pipeline
        world.step();
        world
    }

    #[test]
    fn test_default_timestep_is_sixty_hz() {
        let world = PhysicsWorld::new();
        assert_eq!(world.timestep(), 1.0 / 60.0);
    }

    #[test]
    fn test_default_gravity_is_platformer_tuned() {
        let world = PhysicsWorld::new();
        assert_eq!(world.gravity().x, 0.0);
        assert_eq!(world.gravity().y, -20.0);
    }

    #[test]
    fn test_dynamic_body_falls_under_gravity() {
        let mut world = PhysicsWorld::new();
        let body = world.add_rigid_body(presets::player_body(0.0, 10.0));
        world.add_collider(presets::player_collider(0.75, 1.85, 0.0), body);

        for _ in 0..30 {
            world.step();
        }

        let y = world.get_rigid_body(body).unwrap().translation().y;
        assert!(y < 10.0, "body should have fallen, y = {y}");
    }

    #[test]
    fn test_overlap_area_finds_floor() {
        let world = world_with_floor();
        assert!(world.overlap_area(
            vector![-1.0, -0.4],
            vector![1.0, 0.1],
            QueryFilter::default(),
        ));
        assert!(!world.overlap_area(
            vector![-1.0, 1.0],
            vector![1.0, 2.0],
            QueryFilter::default(),
        ));
    }

    #[test]
    fn test_overlap_area_accepts_corners_in_any_order() {
        let world = world_with_floor();
        assert!(world.overlap_area(
            vector![1.0, 0.1],
            vector![-1.0, -0.4],
            QueryFilter::default(),
        ));
    }

    #[test]
    fn test_raycast_reports_hit_point() {
        let world = world_with_floor();
        let hit = world
            .raycast(
                vector![0.0, 5.0],
                vector![0.0, -1.0],
                10.0,
                true,
                QueryFilter::default(),
            )
            .expect("ray straight down should hit the floor");
        assert!((hit.point.y - 0.0).abs() < 0.05, "hit at {:?}", hit.point);
        assert!((hit.toi - 5.0).abs() < 0.05);
    }

    #[test]
    fn test_raycast_misses_beyond_max_toi() {
        let world = world_with_floor();
        assert!(world
            .raycast(
                vector![0.0, 5.0],
                vector![0.0, -1.0],
                2.0,
                true,
                QueryFilter::default(),
            )
            .is_none());
    }
}
