//! Synthetic scalar fields for exercising the integrators.
//!
//! [`Volcano`] produces a rough procedural terrain with no closed-form
//! volume; the remaining fields have known or separable volumes and are
//! useful for convergence comparisons between the integration rules.

use std::f64::consts::{E, PI};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::FieldError;

/// Smoothly interpolated random values on a square integer lattice.
///
/// Corner values are drawn once from a seeded generator, so sampling is
/// deterministic for a given seed. Coordinates are expected in `[0, 1]`
/// on both axes; values outside clamp to the lattice edge.
#[derive(Debug, Clone)]
pub struct LatticeNoise {
    cells: usize,
    values: Vec<f64>,
}

impl LatticeNoise {
    /// Draw corner values in `[-1, 1]` for a `cells x cells` lattice.
    pub fn new(seed: u64, cells: usize) -> Self {
        let cells = cells.max(1);
        let mut rng = StdRng::seed_from_u64(seed);
        let side = cells + 1;
        let values = (0..side * side)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();
        Self { cells, values }
    }

    /// Noise value at `(x, y)`, smoothstep-blended between the four
    /// surrounding lattice corners.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let fade = |t: f64| t * t * (3.0 - 2.0 * t);
        let side = self.cells + 1;

        let gx = x.clamp(0.0, 1.0) * self.cells as f64;
        let gy = y.clamp(0.0, 1.0) * self.cells as f64;
        let ix = (gx.floor() as usize).min(self.cells - 1);
        let iy = (gy.floor() as usize).min(self.cells - 1);
        let tx = fade(gx - ix as f64);
        let ty = fade(gy - iy as f64);

        let at = |i: usize, j: usize| self.values[i * side + j];
        let lo = at(ix, iy) + (at(ix, iy + 1) - at(ix, iy)) * ty;
        let hi = at(ix + 1, iy) + (at(ix + 1, iy + 1) - at(ix + 1, iy)) * ty;
        lo + (hi - lo) * tx
    }
}

/// A volcano-shaped synthetic terrain over `[0, 1] x [0, 1]`: a rounded
/// cone with a centered cavity and a linear tilt, roughened by three
/// octaves of lattice noise at amplitudes 1, 0.5 and 0.125 of the noise
/// factor.
#[derive(Debug, Clone)]
pub struct Volcano {
    height: f64,
    cavity_depth: f64,
    slope: f64,
    noise_amplitude: f64,
    octaves: [LatticeNoise; 3],
}

impl Volcano {
    /// Build a terrain generator. A greater `height` gives a taller
    /// mountain, a greater `cavity_depth` a deeper crater, a greater
    /// `slope` a more lopsided mountain, and a greater `noise_amplitude`
    /// a rougher surface.
    ///
    /// # Errors
    /// * If `height` or `slope` is negative
    /// * If `cavity_depth` is negative or exceeds `height`
    pub fn new(
        height: f64,
        cavity_depth: f64,
        slope: f64,
        noise_amplitude: f64,
        seed: u64,
    ) -> Result<Self, FieldError> {
        if height < 0.0 {
            return Err(FieldError::Parameter {
                name: "height",
                value: height,
            });
        }
        if cavity_depth < 0.0 || cavity_depth > height {
            return Err(FieldError::Parameter {
                name: "cavity_depth",
                value: cavity_depth,
            });
        }
        if slope < 0.0 {
            return Err(FieldError::Parameter {
                name: "slope",
                value: slope,
            });
        }

        Ok(Self {
            height,
            cavity_depth,
            slope,
            noise_amplitude,
            octaves: [
                LatticeNoise::new(seed, 3),
                LatticeNoise::new(seed.wrapping_add(1), 6),
                LatticeNoise::new(seed.wrapping_add(2), 12),
            ],
        })
    }

    /// Terrain height at `(x, y)`, both in `[0, 1]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // The base silhouette lives on [-1, 1]; noise stays in unit coordinates
        let sx = (x - 0.5) * 2.0;
        let sy = (y - 0.5) * 2.0;
        self.base_shape(sx, sy) + self.noise(x, y)
    }

    fn base_shape(&self, x: f64, y: f64) -> f64 {
        let mountain = cone(x, y, self.height, 1.0);
        let cavity = cone(x, y, self.height - self.cavity_depth, 10.0);
        mountain - cavity - self.slope * (x + y)
    }

    fn noise(&self, x: f64, y: f64) -> f64 {
        let [coarse, mid, fine] = &self.octaves;
        self.noise_amplitude
            * (coarse.sample(x, y) + 0.5 * mid.sample(x, y) + 0.125 * fine.sample(x, y))
    }
}

/// Rounded cone `height * exp(-narrowness * r^2)` centered on the origin.
fn cone(x: f64, y: f64, height: f64, narrowness: f64) -> f64 {
    height * (-narrowness * (x * x + y * y)).exp()
}

/// Truncated Gaussian cap over the unit disc, zero outside it.
///
/// The volume over `[-1, 1] x [-1, 1]` is `(e - 1) / (2 * (e - 2))`.
pub fn gaussian_cap(x: f64, y: f64) -> f64 {
    let r2 = x * x + y * y;
    if r2 <= 1.0 {
        (-r2).exp() * E / (2.0 * PI * (E - 2.0))
    } else {
        0.0
    }
}

/// Radial sinc ripple `sin(4*pi*r^2) / (4*pi*r^2)`.
///
/// The origin itself evaluates as 0/0; sample on grids that avoid r = 0.
pub fn wavelet(x: f64, y: f64) -> f64 {
    let c = 4.0 * PI;
    let r2 = x * x + y * y;
    (c * r2).sin() / (c * r2)
}

/// Separable field: an exponential-plus-sine profile in x added to a
/// cubic bump in y.
pub fn asymmetric(x: f64, y: f64) -> f64 {
    let c1 = 4.0 / (1.0 - (-2.0_f64).exp());
    let c2 = 4.0 * PI;
    let c3 = 4.0 / c2;

    let fx = (-x).exp() * c1 + (c2 * x).sin() * c3;
    let gy = (y - 1.0) * (y - 1.0) * (2.0 - y) * 0.375;
    fx + gy
}
