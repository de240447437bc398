use log::{info, warn};
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use super::{HeightGrid, Heightmap, NoiseField, WorldSeed};
use crate::config::{HeightSourceKind, WorldGenConfig};
use crate::utils::error::{PreconditionError, Result};

/// Turns a seed and a height limit into a column height grid.
pub struct TerrainGenerator {
    config: WorldGenConfig,
}

impl TerrainGenerator {
    pub fn new(config: WorldGenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Produces the heightmap for `seed` from the configured source.
    pub fn heightmap(&self, seed: WorldSeed) -> Result<Heightmap> {
        let heightmap = match self.config.source {
            HeightSourceKind::Noise => {
                let noise = &self.config.noise;
                NoiseField::generate(
                    seed,
                    noise.grid_resolution,
                    noise.gradient_directions,
                    noise.cell_size,
                )?
                .bake(self.config.width, self.config.depth)?
            }
            HeightSourceKind::Image => Heightmap::load(&self.config.heightmap_path)?,
            HeightSourceKind::Fbm => self.bake_fbm(seed)?,
        };

        if let Some(path) = &self.config.bake_path {
            if self.config.source != HeightSourceKind::Image {
                // A failed bake write never blocks generation.
                if let Err(e) = heightmap.save(path) {
                    warn!("Could not write baked heightmap: {}", e);
                }
            }
        }

        Ok(heightmap)
    }

    pub fn generate(&self, seed: WorldSeed, max_height: i32) -> Result<HeightGrid> {
        if max_height < 0 {
            return Err(PreconditionError::NegativeMaxHeight(max_height).into());
        }

        let heightmap = self.heightmap(seed)?;
        let grid = heightmap.heights(max_height as u32);
        info!(
            "Generated {}x{} terrain from {:?} source (seed {}, max height {})",
            grid.width(),
            grid.depth(),
            self.config.source,
            seed,
            max_height
        );
        Ok(grid)
    }

    fn bake_fbm(&self, seed: WorldSeed) -> std::result::Result<Heightmap, PreconditionError> {
        let (width, depth) = (self.config.width, self.config.depth);
        if width == 0 || depth == 0 {
            return Err(PreconditionError::EmptyExtent { width, depth });
        }

        let fbm = Fbm::<Perlin>::new(seed)
            .set_octaves(self.config.fbm.octaves)
            .set_frequency(self.config.fbm.frequency)
            .set_persistence(self.config.fbm.persistence)
            .set_lacunarity(2.0);

        let mut data = Vec::with_capacity(width as usize * depth as usize);
        for z in 0..depth {
            for x in 0..width {
                let value = fbm.get([x as f64, z as f64]).clamp(-1.0, 1.0);
                data.push(((value * 0.5 + 0.5) * 255.0).round() as u8);
            }
        }
        Ok(Heightmap::from_intensities(width, depth, data))
    }
}
