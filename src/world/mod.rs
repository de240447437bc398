pub mod block;
pub mod block_material;
pub mod instance;
pub mod material_rule;
pub mod voxel_world;

// Re-export commonly used types
pub use block::Block;
pub use block_material::BlockMaterial;
pub use instance::InstanceBuffer;
pub use material_rule::{LayeredRule, MaterialRule, UniformRule};
pub use voxel_world::VoxelWorld;
