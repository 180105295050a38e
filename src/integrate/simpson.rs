//! Composite Simpson-style quadrature over evenly spaced samples.

use num_traits::Float;

use crate::errors::{IntegrationError, Result};
use crate::utils::{chunked, uniform_spacing};

/// Absolute tolerance applied when checking samples for uniform spacing.
pub const SPACING_ATOL: f64 = 1e-4;

/// Definite integral of the samples `ys` taken at locations `xs` using a
/// grouped-triple Simpson weighting.
///
/// `start` and `stop` default to the sampled range. The selected samples
/// are taken in consecutive, non-overlapping groups of three weighted
/// `1-4-1`; a trailing group of one or two samples contributes its
/// unweighted sum. The accumulated total is scaled by `spacing / 2`.
///
/// # Errors
/// * If `xs` and `ys` have different lengths, or fewer than two samples
/// * If `xs` is not evenly spaced within [`SPACING_ATOL`]
/// * If `start` or `stop` fall outside the sampled range
pub fn integrate_simpson<T>(xs: &[T], ys: &[T], start: Option<T>, stop: Option<T>) -> Result<T>
where
    T: Float,
{
    if xs.len() != ys.len() {
        return Err(IntegrationError::Shape {
            reason: "x and y sample counts differ",
        });
    }
    if xs.len() < 2 {
        return Err(IntegrationError::Shape {
            reason: "at least two samples required",
        });
    }

    let atol = T::from(SPACING_ATOL).ok_or(IntegrationError::Shape {
        reason: "spacing tolerance is not representable",
    })?;
    let spacing = uniform_spacing(xs, atol).ok_or(IntegrationError::Shape {
        reason: "uneven spacing",
    })?;

    let (lower, upper) = (xs[0], xs[xs.len() - 1]);
    let start = start.unwrap_or(lower);
    let stop = stop.unwrap_or(upper);
    if start < lower {
        return Err(IntegrationError::domain(start, lower, upper));
    }
    if stop > upper {
        return Err(IntegrationError::domain(stop, lower, upper));
    }

    // Lower-bound search for start, inclusive upper-bound search for stop
    let i = xs.partition_point(|v| *v < start);
    let j = xs.partition_point(|v| *v <= stop);

    let two = T::one() + T::one();
    let four = two + two;

    let mut total = T::zero();
    for group in chunked(&ys[i..j], 3) {
        if group.complete {
            total = total + group.vals[0] + four * group.vals[1] + group.vals[2];
        } else {
            // Leftover samples carry no Simpson weighting
            total = group.vals.iter().fold(total, |acc, &y| acc + y);
        }
    }

    Ok(total * spacing / two)
}
