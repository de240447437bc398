use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum BlockMaterial {
    Dirt = 0,
    Grass = 1,
    Stone = 2,
}

impl BlockMaterial {
    pub const ALL: [BlockMaterial; 3] = [Self::Dirt, Self::Grass, Self::Stone];

    /// Flat shading colour used when no texture is bound.
    pub fn albedo(self) -> [f32; 4] {
        match self {
            Self::Dirt => [0.45, 0.31, 0.18, 1.0],
            Self::Grass => [0.33, 0.62, 0.24, 1.0],
            Self::Stone => [0.5, 0.5, 0.52, 1.0],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dirt => "dirt",
            Self::Grass => "grass",
            Self::Stone => "stone",
        }
    }

    pub fn id(self) -> u32 {
        self as u32
    }
}
