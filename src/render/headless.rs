use glam::{Mat4, Vec3};
use log::debug;

use super::Renderer;
use crate::world::BlockMaterial;

/// Records what a GPU backend would have been asked to do.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub positions: Vec<Vec3>,
    pub materials: Vec<BlockMaterial>,
    pub uploads: usize,
    pub draws: usize,
    pub last_draw: Option<(u32, u32)>,
    pub view: Mat4,
    pub projection: Mat4,
    pub eye: Vec3,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn upload_instances(&mut self, positions: &[Vec3], materials: &[BlockMaterial]) {
        debug!("Uploading {} instances", positions.len());
        self.positions = positions.to_vec();
        self.materials = materials.to_vec();
        self.uploads += 1;
    }

    fn set_camera(&mut self, view: Mat4, projection: Mat4, eye: Vec3) {
        self.view = view;
        self.projection = projection;
        self.eye = eye;
    }

    fn draw_instanced(&mut self, vertices_per_instance: u32, instance_count: u32) {
        self.last_draw = Some((vertices_per_instance, instance_count));
        self.draws += 1;
    }
}
