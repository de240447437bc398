//! Seeded 2-D gradient noise.
//!
//! A square table of unit gradients is drawn from a ChaCha stream seeded by the
//! world seed. Each gradient is picked from a fixed fan of evenly spaced
//! directions so the field has no preferred axis. Sampling wraps the table, so
//! the field tiles every `grid_resolution * cell_size` world units.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use std::f64::consts::{SQRT_2, TAU};

use super::Heightmap;
use crate::utils::error::PreconditionError;
use crate::utils::math::{fade, lerp};

#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    seed: u32,
    resolution: usize,
    cell_size: f64,
    gradients: Vec<DVec2>,
}

impl NoiseField {
    /// Builds the gradient table for `seed`.
    ///
    /// `grid_resolution` is the number of nodes per axis before the table
    /// wraps. `direction_count` is the number of permissible gradient
    /// directions. `cell_size` is the node spacing in world units.
    pub fn generate(
        seed: u32,
        grid_resolution: usize,
        direction_count: usize,
        cell_size: f64,
    ) -> Result<Self, PreconditionError> {
        if grid_resolution == 0 {
            return Err(PreconditionError::ZeroResolution);
        }
        if direction_count == 0 {
            return Err(PreconditionError::NoGradientDirections);
        }
        if cell_size.is_nan() || cell_size <= 0.0 {
            return Err(PreconditionError::NonPositiveCellSize(cell_size));
        }

        let directions: Vec<DVec2> = (0..direction_count)
            .map(|i| DVec2::from_angle(TAU * i as f64 / direction_count as f64))
            .collect();

        let mut rng = ChaCha12Rng::seed_from_u64(seed as u64);
        let gradients = (0..grid_resolution * grid_resolution)
            .map(|_| directions[rng.gen_range(0..direction_count)])
            .collect();

        Ok(Self {
            seed,
            resolution: grid_resolution,
            cell_size,
            gradients,
        })
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn gradient(&self, node_x: i64, node_y: i64) -> DVec2 {
        let n = self.resolution as i64;
        let ix = node_x.rem_euclid(n) as usize;
        let iy = node_y.rem_euclid(n) as usize;
        self.gradients[iy * self.resolution + ix]
    }

    /// Noise value at world position `(x, y)`, roughly in `[-1, 1]`.
    /// Zero on every grid node.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let gx = x / self.cell_size;
        let gy = y / self.cell_size;
        let x0 = gx.floor();
        let y0 = gy.floor();
        let fx = gx - x0;
        let fy = gy - y0;
        let (nx, ny) = (x0 as i64, y0 as i64);

        let corner = |dx: i64, dy: i64| {
            let offset = DVec2::new(fx - dx as f64, fy - dy as f64);
            self.gradient(nx + dx, ny + dy).dot(offset)
        };

        let u = fade(fx);
        let v = fade(fy);
        let bottom = lerp(corner(0, 0), corner(1, 0), u);
        let top = lerp(corner(0, 1), corner(1, 1), u);
        lerp(bottom, top, v)
    }

    /// Rescales samples over a `width` x `depth` patch to 0..=255 intensities.
    pub fn bake(&self, width: u32, depth: u32) -> Result<Heightmap, PreconditionError> {
        if width == 0 || depth == 0 {
            return Err(PreconditionError::EmptyExtent { width, depth });
        }

        let mut data = Vec::with_capacity(width as usize * depth as usize);
        for z in 0..depth {
            for x in 0..width {
                let value = (self.sample(x as f64, z as f64) * SQRT_2).clamp(-1.0, 1.0);
                data.push(((value * 0.5 + 0.5) * 255.0).round() as u8);
            }
        }
        Ok(Heightmap::from_intensities(width, depth, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn field(seed: u32) -> NoiseField {
        NoiseField::generate(seed, 16, 16, 16.0).unwrap()
    }

    #[test]
    fn test_same_seed_same_values() {
        let a = field(42);
        let b = field(42);
        assert_eq!(a, b);
        for &(x, y) in &[(0.3, 7.9), (123.25, -40.5), (1000.0, 3.3)] {
            assert_eq!(a.sample(x, y).to_bits(), b.sample(x, y).to_bits());
            assert_eq!(a.sample(x, y).to_bits(), a.sample(x, y).to_bits());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = field(1);
        let b = field(2);
        let differs = (0..64).any(|i| {
            let p = i as f64 * 3.7 + 0.5;
            a.sample(p, p * 0.5) != b.sample(p, p * 0.5)
        });
        assert!(differs);
    }

    #[test]
    fn test_zero_on_grid_nodes() {
        let f = field(7);
        for nx in -3..4 {
            for ny in -3..4 {
                let value = f.sample(nx as f64 * 16.0, ny as f64 * 16.0);
                assert_relative_eq!(value, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_gradients_are_unit_length() {
        let f = NoiseField::generate(99, 8, 5, 4.0).unwrap();
        for x in 0..8 {
            for y in 0..8 {
                assert_relative_eq!(f.gradient(x, y).length(), 1.0, epsilon = 1e-12);
            }
        }
        assert_eq!(f.gradient(-1, 0), f.gradient(7, 0));
        assert_eq!(f.gradient(8, 9), f.gradient(0, 1));
    }

    #[test]
    fn test_continuous_across_cell_boundaries() {
        let f = field(42);
        let eps = 1e-6;
        // Walk across several vertical and horizontal cell edges.
        for edge in [16.0, 32.0, 48.0, -16.0] {
            for &other in &[3.1, 17.9, 40.2] {
                let dx = (f.sample(edge - eps, other) - f.sample(edge + eps, other)).abs();
                let dy = (f.sample(other, edge - eps) - f.sample(other, edge + eps)).abs();
                assert!(dx < 10.0 * eps, "seam at x = {}: {}", edge, dx);
                assert!(dy < 10.0 * eps, "seam at y = {}: {}", edge, dy);
            }
        }
    }

    #[test]
    fn test_output_is_bounded() {
        let f = field(5);
        for i in 0..500 {
            let x = i as f64 * 0.73;
            let y = i as f64 * 1.37;
            let v = f.sample(x, y);
            assert!(v.abs() <= SQRT_2 / 2.0 + 1e-9, "{} at ({}, {})", v, x, y);
        }
    }

    #[test]
    fn test_preconditions() {
        assert_eq!(
            NoiseField::generate(1, 0, 16, 16.0),
            Err(PreconditionError::ZeroResolution)
        );
        assert_eq!(
            NoiseField::generate(1, 16, 0, 16.0),
            Err(PreconditionError::NoGradientDirections)
        );
        assert_eq!(
            NoiseField::generate(1, 16, 16, 0.0),
            Err(PreconditionError::NonPositiveCellSize(0.0))
        );
    }

    #[test]
    fn test_bake_is_deterministic() {
        let a = field(42).bake(32, 24).unwrap();
        let b = field(42).bake(32, 24).unwrap();
        assert_eq!(a, b);
        assert_eq!((a.width(), a.depth()), (32, 24));
        // Node at the origin samples to zero, which bakes to mid-gray.
        assert_eq!(a.intensity(0, 0), 128);
        assert!(field(42).bake(0, 4).is_err());
    }
}
