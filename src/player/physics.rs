use glam::Vec3;
use log::trace;

use crate::config::GameplayConfig;
use crate::utils::math::AABB;
use crate::world::VoxelWorld;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grounding {
    Airborne,
    Grounded,
}

/// Player-sized box driven by gravity. `position` is the box centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    pub half_width: f32,
    pub half_height: f32,
    pub grounding: Grounding,
    /// Set by a jump, cleared only by landing on a block or the floor.
    pub jumping: bool,
}

impl Body {
    pub fn new(position: Vec3, half_width: f32, half_height: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            half_width,
            half_height,
            grounding: Grounding::Airborne,
            jumping: false,
        }
    }

    pub fn aabb(&self) -> AABB {
        AABB::from_center(
            self.position,
            Vec3::new(self.half_width, self.half_height, self.half_width),
        )
    }

    pub fn is_grounded(&self) -> bool {
        self.grounding == Grounding::Grounded
    }

    fn land(&mut self, y: f32) {
        self.position.y = y;
        self.velocity.y = 0.0;
        self.jumping = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsHandler {
    /// Negative, units/s²
    pub gravity: f32,
    pub jump_impulse: f32,
}

impl Default for PhysicsHandler {
    fn default() -> Self {
        Self {
            gravity: -15.8,
            jump_impulse: 6.0,
        }
    }
}

impl PhysicsHandler {
    pub fn new(gravity: f32, jump_impulse: f32) -> Self {
        Self {
            gravity,
            jump_impulse,
        }
    }

    pub fn from_config(config: &GameplayConfig) -> Self {
        Self::new(config.gravity, config.jump_impulse)
    }

    /// Advances `body` by `dt` seconds.
    ///
    /// Only vertical landings are resolved. Horizontal motion passes through
    /// block volumes, and when several blocks overlap the body the first one
    /// in world storage order decides the landing height.
    pub fn step(&self, body: &mut Body, world: &VoxelWorld, dt: f32, horizontal_velocity: Vec3) {
        body.velocity.x = horizontal_velocity.x;
        body.velocity.z = horizontal_velocity.z;
        body.velocity.y += self.gravity * dt;
        body.position += body.velocity * dt;

        match self.find_collision(body, world) {
            Some(block_top) => {
                let landing = block_top + body.half_height;
                if body.position.y < landing {
                    body.land(landing);
                }
                body.grounding = Grounding::Grounded;
            }
            None if body.position.y <= 0.0 => {
                body.land(0.0);
                body.grounding = Grounding::Grounded;
            }
            None => body.grounding = Grounding::Airborne,
        }
    }

    /// Top face of the first overlapping block, scanning every block.
    pub fn find_collision(&self, body: &Body, world: &VoxelWorld) -> Option<f32> {
        let hit = world.first_overlap(&body.aabb())?;
        trace!("Body at {:?} overlaps block {:?}", body.position, hit.position);
        Some(hit.top())
    }

    /// No-op while the jump latch is set.
    pub fn jump(&self, body: &mut Body) {
        if body.jumping {
            return;
        }
        body.velocity.y = self.jump_impulse;
        body.jumping = true;
        body.grounding = Grounding::Airborne;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::HeightGrid;
    use crate::world::LayeredRule;

    const DT: f32 = 1.0 / 60.0;

    fn body_at(y: f32) -> Body {
        Body::new(Vec3::new(0.0, y, 0.0), 0.6, 1.3)
    }

    fn run(handler: &PhysicsHandler, body: &mut Body, world: &VoxelWorld, steps: usize) {
        for _ in 0..steps {
            handler.step(body, world, DT, Vec3::ZERO);
        }
    }

    #[test]
    fn test_lands_on_block_top() {
        let world = VoxelWorld::build(&HeightGrid::filled(1, 1, 1), &LayeredRule::new(0));
        let handler = PhysicsHandler::default();
        let mut body = body_at(6.0);
        body.velocity.y = -1.0;

        run(&handler, &mut body, &world, 300);

        assert_eq!(body.position.y, 0.5 + body.half_height);
        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.grounding, Grounding::Grounded);
    }

    #[test]
    fn test_stays_put_once_landed() {
        let world = VoxelWorld::build(&HeightGrid::filled(3, 3, 2), &LayeredRule::new(0));
        let handler = PhysicsHandler::default();
        let mut body = Body::new(Vec3::new(1.0, 4.0, 1.0), 0.6, 1.3);

        run(&handler, &mut body, &world, 200);
        let rest = body.position;
        run(&handler, &mut body, &world, 60);

        assert_eq!(body.position, rest);
        assert_eq!(rest.y, 1.5 + 1.3);
    }

    #[test]
    fn test_floor_clamp_on_empty_world() {
        let world = VoxelWorld::empty();
        let handler = PhysicsHandler::default();
        let mut body = body_at(10.0);

        run(&handler, &mut body, &world, 120);

        assert_eq!(body.position.y, 0.0);
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.is_grounded());
    }

    #[test]
    fn test_jump_latch() {
        let handler = PhysicsHandler::default();
        let mut body = body_at(0.0);

        handler.jump(&mut body);
        assert_eq!(body.velocity.y, 6.0);
        assert!(body.jumping);
        assert_eq!(body.grounding, Grounding::Airborne);

        handler.step(&mut body, &VoxelWorld::empty(), DT, Vec3::ZERO);
        let after_step = body.velocity.y;
        handler.jump(&mut body);
        assert_eq!(body.velocity.y, after_step);
    }

    #[test]
    fn test_landing_clears_jump_latch() {
        let world = VoxelWorld::empty();
        let handler = PhysicsHandler::default();
        let mut body = body_at(0.0);

        handler.jump(&mut body);
        run(&handler, &mut body, &world, 120);
        assert!(!body.jumping);

        handler.jump(&mut body);
        assert_eq!(body.velocity.y, 6.0);
    }

    #[test]
    fn test_first_overlapping_block_wins() {
        // Column x = 0 is one block tall, x = 1 is three; x = 0 is stored first.
        let grid = HeightGrid::new(2, 1, vec![1, 3]);
        let world = VoxelWorld::build(&grid, &LayeredRule::new(0));
        let handler = PhysicsHandler::default();
        let mut body = Body::new(Vec3::new(0.5, 1.6, 0.0), 0.6, 1.3);

        assert_eq!(handler.find_collision(&body, &world), Some(0.5));
        handler.step(&mut body, &world, DT, Vec3::ZERO);
        assert_eq!(body.position.y, 0.5 + 1.3);
    }

    #[test]
    fn test_no_lateral_push_out() {
        let grid = HeightGrid::new(2, 1, vec![0, 4]);
        let world = VoxelWorld::build(&grid, &LayeredRule::new(0));
        let handler = PhysicsHandler::default();
        let mut body = body_at(0.0);
        body.grounding = Grounding::Grounded;

        // Walk into the tall column at x = 1 for a single step.
        handler.step(&mut body, &world, 0.1, Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(body.position.x, 0.4);
        assert_eq!(body.position.z, 0.0);
    }
}
