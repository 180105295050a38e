//! Piecewise-quadratic interpolation of ordered samples.

use itertools::Itertools;
use num_traits::Float;

use crate::errors::{IntegrationError, Result};

/// A piecewise-quadratic interpolant through a set of ordered samples.
///
/// Piece `i` is valid on `[intervals[i], intervals[i+1])` and is expressed
/// in the local coordinate `t = x - intervals[i]` as `a*t^2 + b*t + c`.
/// The curve passes through every sample and is continuous in value and
/// first derivative at each knot; curvature is not matched.
///
/// Coefficients are derived once at construction and never mutated.
/// Evaluation outside the knot range is an error, not an extrapolation.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticSpline<T: Float> {
    intervals: Vec<T>,
    coefficients: Vec<[T; 3]>,
}

impl<T: Float> QuadraticSpline<T> {
    /// Build a spline through the samples `(xs[i], ys[i])`.
    ///
    /// Slopes are carried across the knots by a forward recurrence:
    /// starting from the secant slope of the first pair, each piece takes
    /// `z1 = -z0 + 2 * (y1 - y0) / dx`, which pins both the value and the
    /// first derivative at the shared knot.
    ///
    /// # Errors
    /// * If `xs` and `ys` have different lengths
    /// * If fewer than two samples are given
    /// * If `xs` is not strictly increasing
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(IntegrationError::Construction {
                reason: "x and y sample counts differ",
            });
        }
        if xs.len() < 2 {
            return Err(IntegrationError::Construction {
                reason: "at least two knots required",
            });
        }
        if xs.iter().tuple_windows().any(|(&a, &b)| b <= a) {
            return Err(IntegrationError::Construction {
                reason: "knots must be strictly increasing",
            });
        }

        let two = T::one() + T::one();
        let mut coefficients = Vec::with_capacity(xs.len() - 1);
        let mut z0 = (ys[1] - ys[0]) / (xs[1] - xs[0]);
        for i in 0..xs.len() - 1 {
            let dx = xs[i + 1] - xs[i];
            let z1 = -z0 + two * (ys[i + 1] - ys[i]) / dx;
            coefficients.push([(z1 - z0) / (two * dx), z0, ys[i]]);
            z0 = z1;
        }

        Ok(Self {
            intervals: xs.to_vec(),
            coefficients,
        })
    }

    /// Evaluate the interpolant at a point.
    ///
    /// The containing piece is found by bisection: the largest index `i`
    /// with `intervals[i] <= x`, clipped to the interior so the last knot
    /// evaluates on the final piece.
    ///
    /// # Errors
    /// * If `x` is outside the spline's domain
    #[inline]
    pub fn eval_one(&self, x: T) -> Result<T> {
        let (lower, upper) = self.domain();
        if x < lower || x > upper {
            return Err(IntegrationError::domain(x, lower, upper));
        }

        let i = (self.intervals.partition_point(|v| *v <= x))
            .saturating_sub(1)
            .min(self.intervals.len() - 2);

        let t = x - self.intervals[i];
        let [a, b, c] = self.coefficients[i];
        Ok((a * t + b) * t + c)
    }

    /// Evaluate the interpolant at a set of points.
    ///
    /// # Errors
    /// * If `xs` and `out` have different lengths
    /// * If any point is outside the spline's domain
    pub fn eval(&self, xs: &[T], out: &mut [T]) -> Result<()> {
        if xs.len() != out.len() {
            return Err(IntegrationError::Shape {
                reason: "input and output lengths differ",
            });
        }

        for i in 0..xs.len() {
            out[i] = self.eval_one(xs[i])?;
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of points, allocating
    /// for the output values for convenience.
    pub fn eval_alloc(&self, xs: &[T]) -> Result<Vec<T>> {
        let mut out = vec![T::zero(); xs.len()];
        self.eval(xs, &mut out)?;
        Ok(out)
    }

    /// Lower and upper bounds of the interpolated region.
    pub fn domain(&self) -> (T, T) {
        (self.intervals[0], self.intervals[self.intervals.len() - 1])
    }

    /// Knot x-values, strictly increasing.
    pub fn intervals(&self) -> &[T] {
        &self.intervals
    }

    /// Per-piece `[a, b, c]` triples in local coordinates.
    pub fn coefficients(&self) -> &[[T; 3]] {
        &self.coefficients
    }
}
