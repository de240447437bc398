use image::GrayImage;
use log::info;
use std::path::Path;

use super::HeightGrid;
use crate::utils::error::LoadError;

/// Row-major grid of 8-bit intensities, `x` across and `z` down the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heightmap {
    width: u32,
    depth: u32,
    data: Vec<u8>,
}

impl Heightmap {
    /// Decodes an image file as a single-channel heightmap. Colour images are
    /// reduced to luma.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|source| LoadError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_luma8();

        let (width, depth) = img.dimensions();
        if width == 0 || depth == 0 {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
                width,
                height: depth,
            });
        }

        info!("Loaded {}x{} heightmap from {}", width, depth, path.display());
        Ok(Self {
            width,
            depth,
            data: img.into_raw(),
        })
    }

    pub fn from_raw(width: u32, depth: u32, data: Vec<u8>) -> Result<Self, LoadError> {
        if width == 0 || depth == 0 || data.len() != width as usize * depth as usize {
            return Err(LoadError::SizeMismatch {
                width,
                depth,
                actual: data.len(),
            });
        }
        Ok(Self { width, depth, data })
    }

    pub(crate) fn from_intensities(width: u32, depth: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * depth as usize);
        Self { width, depth, data }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        let write_err = |source| LoadError::Write {
            path: path.to_path_buf(),
            source,
        };
        let img = GrayImage::from_raw(self.width, self.depth, self.data.clone()).ok_or_else(
            || {
                write_err(image::ImageError::Parameter(
                    image::error::ParameterError::from_kind(
                        image::error::ParameterErrorKind::DimensionMismatch,
                    ),
                ))
            },
        )?;
        img.save(path).map_err(write_err)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn intensity(&self, x: u32, z: u32) -> u8 {
        self.data[z as usize * self.width as usize + x as usize]
    }

    /// `floor(intensity / 255 * max_height)`, clamped to `[0, max_height]`.
    pub fn height_at(&self, x: u32, z: u32, max_height: u32) -> u32 {
        let normalized = self.intensity(x, z) as f32 / 255.0;
        let height = (normalized * max_height as f32).floor();
        (height.max(0.0) as u32).min(max_height)
    }

    pub fn heights(&self, max_height: u32) -> HeightGrid {
        let mut heights = Vec::with_capacity(self.data.len());
        for z in 0..self.depth {
            for x in 0..self.width {
                heights.push(self.height_at(x, z, max_height));
            }
        }
        HeightGrid::new(self.width, self.depth, heights)
    }
}
