use glam::{IVec3, Vec3};
use log::info;

use crate::terrain::HeightGrid;
use crate::utils::math::AABB;
use crate::world::{Block, BlockMaterial, InstanceBuffer, MaterialRule};

/// Column-stacked blocks plus their index-aligned instance shadow.
#[derive(Debug, Clone, Default)]
pub struct VoxelWorld {
    blocks: Vec<Block>,
    instances: InstanceBuffer,
}

impl VoxelWorld {
    /// A world with no blocks.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn build(heights: &HeightGrid, rule: &dyn MaterialRule) -> Self {
        let mut world = Self::empty();
        world.rebuild(heights, rule);
        world
    }

    /// Replaces every block and instance in one assignment. Nothing from a
    /// previous build survives.
    pub fn rebuild(&mut self, heights: &HeightGrid, rule: &dyn MaterialRule) {
        let blocks = stack_columns(heights, rule);
        let positions = blocks.iter().map(|b| b.position.as_vec3()).collect();

        self.blocks = blocks;
        self.instances.replace(positions);
        info!("Amount of blocks in the world: {}", self.blocks.len());
    }

    pub fn all_blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Instance positions, index-aligned with `all_blocks`.
    pub fn instance_positions(&self) -> &[Vec3] {
        self.instances.positions()
    }

    pub fn materials(&self) -> Vec<BlockMaterial> {
        self.blocks.iter().map(|b| b.material).collect()
    }

    pub fn instances(&self) -> &InstanceBuffer {
        &self.instances
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.instances.is_dirty()
    }

    pub fn mark_clean(&mut self) {
        self.instances.mark_clean();
    }

    pub fn generation(&self) -> u64 {
        self.instances.generation()
    }

    pub fn min_bounds(block: &Block) -> Vec3 {
        block.min_bounds()
    }

    pub fn max_bounds(block: &Block) -> Vec3 {
        block.max_bounds()
    }

    /// First block in storage order whose box overlaps `aabb`.
    pub fn first_overlap(&self, aabb: &AABB) -> Option<&Block> {
        self.blocks.iter().find(|b| b.aabb().intersects(aabb))
    }
}

fn stack_columns(heights: &HeightGrid, rule: &dyn MaterialRule) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(heights.total() as usize);
    for (x, z, h) in heights.iter() {
        for y in 0..h {
            let position = IVec3::new(x as i32, y as i32, z as i32);
            blocks.push(Block::new(position, rule.material(y, h)));
        }
    }
    blocks
}
