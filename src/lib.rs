pub mod config;
pub mod engine;
pub mod player;
pub mod render;
pub mod terrain;
pub mod utils;
pub mod world;

// Re-export commonly used types
pub use config::core::EngineConfig;
pub use config::gameplay::GameplayConfig;
pub use config::worldgen::WorldGenConfig;
pub use engine::VoxelEngine;
pub use player::{PlayerController, PlayerInput};
pub use render::{HeadlessRenderer, Renderer};
pub use terrain::{HeightGrid, Heightmap, NoiseField, TerrainGenerator};
pub use utils::error::{EngineError, LoadError, PreconditionError};
pub use world::{Block, BlockMaterial, MaterialRule, VoxelWorld};
