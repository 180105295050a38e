//! Rectangular sample grids of a two-dimensional scalar field.

use num_traits::Float;

use crate::errors::{IntegrationError, Result};

/// Samples of a scalar field on a rectangular grid.
///
/// Values are stored flat in row-major order with x varying slowest:
/// `zs[i * ny + j] = f(xs[i], ys[j])`. Coordinates are expected ordered
/// but need not be evenly spaced; nothing beyond matching shapes is
/// enforced here, since each integration rule validates what it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
    zs: Vec<T>,
}

impl<T: Float> SampleGrid<T> {
    /// Assemble a grid from coordinate arrays and a flat row-major value array.
    ///
    /// # Errors
    /// * If `zs.len() != xs.len() * ys.len()`
    pub fn new(xs: Vec<T>, ys: Vec<T>, zs: Vec<T>) -> Result<Self> {
        if zs.len() != xs.len() * ys.len() {
            return Err(IntegrationError::Shape {
                reason: "value count does not match grid dimensions",
            });
        }
        Ok(Self { xs, ys, zs })
    }

    /// Tabulate `f` at every grid point.
    pub fn from_fn<F>(xs: Vec<T>, ys: Vec<T>, f: F) -> Self
    where
        F: Fn(T, T) -> T,
    {
        let mut zs = Vec::with_capacity(xs.len() * ys.len());
        for &x in &xs {
            for &y in &ys {
                zs.push(f(x, y));
            }
        }
        Self { xs, ys, zs }
    }

    /// Number of x-coordinates (rows).
    pub fn nx(&self) -> usize {
        self.xs.len()
    }

    /// Number of y-coordinates (columns).
    pub fn ny(&self) -> usize {
        self.ys.len()
    }

    /// First-axis coordinates.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Second-axis coordinates.
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Flat row-major values.
    pub fn zs(&self) -> &[T] {
        &self.zs
    }

    /// Values at `xs[i]` across all of `ys`.
    pub fn row(&self, i: usize) -> &[T] {
        let ny = self.ys.len();
        &self.zs[i * ny..(i + 1) * ny]
    }

    /// A new grid with the coordinate roles swapped and the values
    /// transposed to match.
    pub fn transposed(&self) -> Self {
        let (nx, ny) = (self.xs.len(), self.ys.len());
        let mut zs = Vec::with_capacity(nx * ny);
        for j in 0..ny {
            for i in 0..nx {
                zs.push(self.zs[i * ny + j]);
            }
        }
        Self {
            xs: self.ys.clone(),
            ys: self.xs.clone(),
            zs,
        }
    }
}
