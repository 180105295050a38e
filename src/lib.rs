//! Numerical integration of sampled one- and two-dimensional scalar
//! fields, for comparing a spline-based rule against a direct quadrature
//! rule on the same data.
//!
//! A [`QuadraticSpline`] interpolates ordered samples with quadratic
//! pieces that match value and first derivative at each knot; its definite
//! integral has a closed form ([`integrate_spline`]). Evenly spaced
//! samples can instead be integrated directly with a grouped-triple
//! Simpson rule ([`integrate_simpson`]). [`integrate_grid`] composes
//! either rule along both axes of a [`SampleGrid`] to estimate the volume
//! under a sampled surface.
//!
//! The two rules intentionally differ at the edges: the spline rule
//! rounds interior integration bounds out to whole pieces, and the
//! Simpson rule leaves trailing sample groups unweighted. Their results,
//! and the two axis orders of the 2D reduction, therefore agree only in
//! the limit of dense sampling; convergence toward a common value is the
//! correctness signal.
//!
//! # Example
//! ```rust
//! use quadvol::utils::linspace;
//! use quadvol::{integrate_grid, AxisOrder, Method, SampleGrid};
//!
//! // Sample f(x, y) = x + y on a 100x100 grid over the unit square
//! let xs = linspace(0.0, 1.0, 100);
//! let ys = linspace(0.0, 1.0, 100);
//! let grid = SampleGrid::from_fn(xs, ys, |x, y| x + y);
//!
//! // Volume under the sampled surface; the exact value is 1.0
//! let v: f64 = integrate_grid(&grid, AxisOrder::XFirst, Method::AnalyticSpline).unwrap();
//! assert!((v - 1.0).abs() < 1e-9);
//! ```

pub mod errors;
pub mod field;
pub mod grid;
pub mod integrate;
pub mod io;
pub mod spline;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use errors::{FieldError, GridIoError, IntegrationError};
pub use grid::SampleGrid;
pub use integrate::analytic::integrate_spline;
pub use integrate::multi::{integrate_grid, AxisOrder, Method};
pub use integrate::simpson::integrate_simpson;
pub use spline::QuadraticSpline;
