//! Boundary to the GPU side. The core only hands over plain geometry.
pub mod headless;
pub mod mesh;

pub use headless::HeadlessRenderer;
pub use mesh::{Vertex, CUBE_VERTEX_COUNT, CUBE_VERTICES};

use glam::{Mat4, Vec3};

use crate::world::BlockMaterial;

pub trait Renderer {
    /// Replaces the per-instance data. `materials[i]` belongs to `positions[i]`.
    fn upload_instances(&mut self, positions: &[Vec3], materials: &[BlockMaterial]);

    fn set_camera(&mut self, view: Mat4, projection: Mat4, eye: Vec3);

    fn draw_instanced(&mut self, vertices_per_instance: u32, instance_count: u32);
}
