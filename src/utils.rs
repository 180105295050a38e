//! Convenience methods for constructing and inspecting sample sequences
//! in a way that echoes, but does not exactly match, methods common in
//! scripting languages.
use itertools::Itertools;
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// A fixed-size run of consecutive samples.
///
/// A sequence whose length is not a multiple of the group size yields its
/// leftover samples as a final group with `complete` unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'a, T> {
    pub vals: &'a [T],
    pub complete: bool,
}

/// Splits a slice into consecutive, non-overlapping groups of `n` samples,
/// flagging the trailing partial group if one exists.
pub fn chunked<'a, T>(vals: &'a [T], n: usize) -> impl Iterator<Item = Group<'a, T>> + 'a {
    vals.chunks(n).map(move |vals| Group {
        vals,
        complete: vals.len() == n,
    })
}

/// Detects whether `xs` is ascending with uniform spacing, comparing each
/// consecutive difference against the first within an absolute tolerance.
///
/// Returns the spacing of the first pair on success, and `None` for
/// sequences that are too short, non-ascending, or unevenly spaced.
pub fn uniform_spacing<T>(xs: &[T], atol: T) -> Option<T>
where
    T: Float,
{
    if xs.len() < 2 {
        return None;
    }

    let spacing = xs[1] - xs[0];
    if spacing <= T::zero() {
        return None;
    }

    let uniform = xs
        .iter()
        .tuple_windows()
        .all(|(&a, &b)| ((b - a) - spacing).abs() <= atol);

    uniform.then_some(spacing)
}
