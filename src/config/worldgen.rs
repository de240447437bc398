use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::error::PreconditionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightSourceKind {
    /// Seeded gradient noise, baked to a heightmap in memory
    Noise,
    /// Grayscale image read from `heightmap_path`
    Image,
    /// Fractal Perlin noise from the `noise` crate
    Fbm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    pub cell_size: f64,
    pub grid_resolution: usize,
    pub gradient_directions: usize,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            cell_size: 16.0,
            grid_resolution: 16,
            gradient_directions: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FbmConfig {
    pub frequency: f64,
    pub octaves: usize,
    pub persistence: f64,
}

impl Default for FbmConfig {
    fn default() -> Self {
        Self {
            frequency: 0.03,
            octaves: 4,
            persistence: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldGenConfig {
    /// Fixed seed; a fresh one is rolled per run when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_seed: Option<u32>,
    pub width: u32,
    pub depth: u32,
    pub max_height: i32,
    pub regenerate_max_height: i32,
    pub source: HeightSourceKind,
    pub heightmap_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bake_path: Option<PathBuf>,
    pub stone_below: u32,
    #[serde(default)]
    pub noise: NoiseConfig,
    #[serde(default)]
    pub fbm: FbmConfig,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            world_seed: None,
            width: 64,
            depth: 64,
            max_height: 18,
            regenerate_max_height: 32,
            source: HeightSourceKind::Noise,
            heightmap_path: PathBuf::from("perlin.bmp"),
            bake_path: None,
            stone_below: 3,
            noise: NoiseConfig::default(),
            fbm: FbmConfig::default(),
        }
    }
}

impl WorldGenConfig {
    pub fn validate(&self) -> Result<(), PreconditionError> {
        if self.max_height < 0 {
            return Err(PreconditionError::NegativeMaxHeight(self.max_height));
        }
        if self.regenerate_max_height < 0 {
            return Err(PreconditionError::NegativeMaxHeight(
                self.regenerate_max_height,
            ));
        }
        if self.noise.grid_resolution == 0 {
            return Err(PreconditionError::ZeroResolution);
        }
        if self.noise.gradient_directions == 0 {
            return Err(PreconditionError::NoGradientDirections);
        }
        if self.noise.cell_size.is_nan() || self.noise.cell_size <= 0.0 {
            return Err(PreconditionError::NonPositiveCellSize(self.noise.cell_size));
        }
        if self.source != HeightSourceKind::Image && (self.width == 0 || self.depth == 0) {
            return Err(PreconditionError::EmptyExtent {
                width: self.width,
                depth: self.depth,
            });
        }
        Ok(())
    }
}
