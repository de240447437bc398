use glam::{Mat4, Vec3};
use log::debug;

use super::camera::Camera;
use super::input::{MoveDirection, PlayerInput};
use super::physics::{Body, PhysicsHandler};
use crate::config::GameplayConfig;
use crate::world::VoxelWorld;

/// Couples the physics body with the camera and movement tuning.
#[derive(Debug, Clone)]
pub struct PlayerController {
    pub body: Body,
    pub camera: Camera,
    pub physics: PhysicsHandler,
    pub speed: f32,
    pub sprinting: bool,
    sprint_speed: f32,
    slow_walk_speed: f32,
    sprint_zoom_factor: f32,
    sensitivity: f32,
}

impl PlayerController {
    pub fn new(config: &GameplayConfig) -> Self {
        let body = Body::new(
            Vec3::from_array(config.spawn_position),
            config.half_width,
            config.half_height,
        );
        let camera = Camera::new(
            config.yaw,
            config.pitch,
            config.zoom,
            config.min_fov,
            config.max_fov,
        );

        Self {
            body,
            camera,
            physics: PhysicsHandler::from_config(config),
            speed: config.walk_speed,
            sprinting: false,
            sprint_speed: config.sprint_speed,
            slow_walk_speed: config.slow_walk_speed,
            sprint_zoom_factor: config.sprint_zoom_factor,
            sensitivity: config.mouse_sensitivity,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    pub fn zoom(&self) -> f32 {
        self.camera.zoom
    }

    /// Forward vector projected onto the ground plane.
    fn flat_front(&self) -> Vec3 {
        Vec3::new(self.camera.front.x, 0.0, self.camera.front.z).normalize_or_zero()
    }

    fn direction_vector(&self, direction: MoveDirection) -> Vec3 {
        match direction {
            MoveDirection::Forward => self.flat_front(),
            MoveDirection::Backward => -self.flat_front(),
            MoveDirection::Left => -self.camera.right,
            MoveDirection::Right => self.camera.right,
        }
    }

    /// Displaces the body directly, without any wall check.
    pub fn move_horizontal(&mut self, direction: MoveDirection, dt: f32) {
        let offset = self.direction_vector(direction) * self.speed * dt;
        self.body.position += offset;
    }

    /// Velocity contributed by the held movement keys. Each key adds a full
    /// `speed` along its direction.
    pub fn horizontal_velocity(&self, input: &PlayerInput) -> Vec3 {
        input
            .directions()
            .map(|dir| self.direction_vector(dir) * self.speed)
            .sum()
    }

    /// Screen-space pointer motion; y grows downwards.
    pub fn handle_mouse_motion(&mut self, dx: f32, dy: f32) {
        self.camera.look(dx * self.sensitivity, -dy * self.sensitivity);
    }

    pub fn handle_scroll(&mut self, delta: f32) {
        self.camera.scroll(delta);
    }

    pub fn toggle_sprint(&mut self) {
        self.sprinting = !self.sprinting;
        if self.sprinting {
            self.speed = self.sprint_speed;
            self.camera.zoom *= self.sprint_zoom_factor;
        } else {
            self.speed = self.slow_walk_speed;
            self.camera.zoom /= self.sprint_zoom_factor;
        }
        debug!(
            "Sprint {} (speed {}, fov {})",
            if self.sprinting { "on" } else { "off" },
            self.speed,
            self.camera.zoom
        );
    }

    pub fn jump(&mut self) {
        self.physics.jump(&mut self.body);
    }

    /// Horizontal input plus one physics step.
    pub fn update(&mut self, world: &VoxelWorld, dt: f32, input: &PlayerInput) {
        let horizontal = self.horizontal_velocity(input);
        self.physics.step(&mut self.body, world, dt, horizontal);
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix(self.body.position)
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        self.camera.projection_matrix(aspect_ratio)
    }
}
