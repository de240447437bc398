//! Per-layer material policies used while stacking columns.

use crate::world::BlockMaterial;

/// Picks the material for the block at layer `y` of a column `height` tall.
pub trait MaterialRule {
    fn material(&self, y: u32, height: u32) -> BlockMaterial;
}

impl<F> MaterialRule for F
where
    F: Fn(u32, u32) -> BlockMaterial,
{
    fn material(&self, y: u32, height: u32) -> BlockMaterial {
        self(y, height)
    }
}

/// Stone under a fixed depth, grass on the top layer, dirt in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayeredRule {
    pub stone_below: u32,
}

impl LayeredRule {
    pub fn new(stone_below: u32) -> Self {
        Self { stone_below }
    }
}

impl MaterialRule for LayeredRule {
    fn material(&self, y: u32, height: u32) -> BlockMaterial {
        if y < self.stone_below {
            BlockMaterial::Stone
        } else if y + 1 == height {
            BlockMaterial::Grass
        } else {
            BlockMaterial::Dirt
        }
    }
}

/// Same material everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformRule(pub BlockMaterial);

impl MaterialRule for UniformRule {
    fn material(&self, _y: u32, _height: u32) -> BlockMaterial {
        self.0
    }
}
