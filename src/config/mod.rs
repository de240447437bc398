pub mod core;
pub mod gameplay;
pub mod worldgen;

pub use self::core::{default_config_path, load_or_create_config, EngineConfig};
pub use gameplay::GameplayConfig;
pub use worldgen::{FbmConfig, HeightSourceKind, NoiseConfig, WorldGenConfig};
