//! Height sources and terrain generation
pub mod generator;
pub mod height_grid;
pub mod heightmap;
pub mod noise_field;

pub use generator::TerrainGenerator;
pub use height_grid::HeightGrid;
pub use heightmap::Heightmap;
pub use noise_field::NoiseField;

/// World seed type
pub type WorldSeed = u32;
