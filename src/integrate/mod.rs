//! One-dimensional integration of sampled data, and its composition into
//! two-dimensional volume estimates.
//!
//! Two 1D rules are provided: closed-form integration of a
//! [`QuadraticSpline`](crate::spline::QuadraticSpline) built from the
//! samples ([`analytic`]), and a grouped-triple Simpson rule applied
//! directly to evenly spaced samples ([`simpson`]). [`multi`] reduces a 2D
//! grid to a scalar by applying either rule along each axis in turn.

pub mod analytic;
pub mod multi;
pub mod simpson;
