pub mod error;
pub mod math;

pub use error::{EngineError, LoadError, PreconditionError, Result};
pub use math::AABB;
