use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to decode heightmap {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Heightmap {path:?} has no pixels ({width}x{height})")]
    Empty {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("Heightmap buffer holds {actual} bytes, expected {width}x{depth}")]
    SizeMismatch { width: u32, depth: u32, actual: usize },

    #[error("Failed to write heightmap {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum PreconditionError {
    #[error("Noise grid resolution must be positive")]
    ZeroResolution,

    #[error("Noise needs at least one gradient direction")]
    NoGradientDirections,

    #[error("Noise cell size must be positive, got {0}")]
    NonPositiveCellSize(f64),

    #[error("Max height must not be negative, got {0}")]
    NegativeMaxHeight(i32),

    #[error("World extent must be positive, got {width}x{depth}")]
    EmptyExtent { width: u32, depth: u32 },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Heightmap error: {0}")]
    Load(#[from] LoadError),

    #[error("Precondition violated: {0}")]
    Precondition(#[from] PreconditionError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
