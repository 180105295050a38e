//! Closed-form integration of piecewise-quadratic interpolants.

use num_traits::Float;

use crate::errors::{IntegrationError, Result};
use crate::spline::QuadraticSpline;

/// Definite integral of `spline` from the antiderivative of each quadratic
/// piece: `a*dx^3/3 + b*dx^2/2 + c*dx` over the piece's full width.
///
/// `start` and `stop` default to the spline's domain bounds. The selected
/// interval range is `[i, j)` with both endpoints resolved by lower-bound
/// bisection against the knots, and every selected interval contributes
/// over its full width: the result is exact only when `start` and `stop`
/// coincide with knots, and approximate when they fall inside a piece.
/// Bounds that select no intervals integrate to zero.
///
/// # Errors
/// * If `start` is below or `stop` is above the spline's domain
pub fn integrate_spline<T>(
    spline: &QuadraticSpline<T>,
    start: Option<T>,
    stop: Option<T>,
) -> Result<T>
where
    T: Float,
{
    let (lower, upper) = spline.domain();
    let start = start.unwrap_or(lower);
    let stop = stop.unwrap_or(upper);
    if start < lower {
        return Err(IntegrationError::domain(start, lower, upper));
    }
    if stop > upper {
        return Err(IntegrationError::domain(stop, lower, upper));
    }

    let intervals = spline.intervals();
    let coefficients = spline.coefficients();
    let i = intervals.partition_point(|v| *v < start);
    let j = intervals.partition_point(|v| *v < stop);

    let two = T::one() + T::one();
    let three = two + T::one();

    let mut total = T::zero();
    for k in i..j {
        let dx = intervals[k + 1] - intervals[k];
        let [a, b, c] = coefficients[k];
        total = total + a * dx * dx * dx / three + b * dx * dx / two + c * dx;
    }

    Ok(total)
}
