use glam::{IVec3, Vec3};

use crate::utils::math::AABB;
use crate::world::BlockMaterial;

/// Unit cube centred on an integer grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub position: IVec3,
    pub material: BlockMaterial,
}

impl Block {
    pub const HALF_EXTENT: f32 = 0.5;

    pub fn new(position: IVec3, material: BlockMaterial) -> Self {
        Self { position, material }
    }

    pub fn center(&self) -> Vec3 {
        self.position.as_vec3()
    }

    pub fn min_bounds(&self) -> Vec3 {
        self.center() - Vec3::splat(Self::HALF_EXTENT)
    }

    pub fn max_bounds(&self) -> Vec3 {
        self.center() + Vec3::splat(Self::HALF_EXTENT)
    }

    pub fn aabb(&self) -> AABB {
        AABB::new(self.min_bounds(), self.max_bounds())
    }

    /// Height of the upper face.
    pub fn top(&self) -> f32 {
        self.position.y as f32 + Self::HALF_EXTENT
    }
}
