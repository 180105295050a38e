//! Reading and writing grids as comma-separated `x,y,z` records.
//!
//! The on-disk form is one fixed-precision record per grid point, one file
//! per field, in row-major order with x varying slowest. Reconstruction
//! infers the grid shape from the record stream alone.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use num_traits::Float;

use crate::errors::{GridIoError, Result};
use crate::grid::SampleGrid;

/// Decimal digits written after the point by default.
pub const DEFAULT_DECIMALS: usize = 6;

/// Write one `x,y,z` record per grid point with `decimals` digits after
/// the point, outer loop over x, inner loop over y.
pub fn write_grid<T, W>(grid: &SampleGrid<T>, mut out: W, decimals: usize) -> Result<(), GridIoError>
where
    T: Float + Display,
    W: Write,
{
    for i in 0..grid.nx() {
        let x = grid.xs()[i];
        let row = grid.row(i);
        for (j, &y) in grid.ys().iter().enumerate() {
            writeln!(out, "{:.p$},{:.p$},{:.p$}", x, y, row[j], p = decimals)?;
        }
    }
    Ok(())
}

/// Write a grid to the file at `path`, creating or truncating it.
pub fn write_grid_file<T>(grid: &SampleGrid<T>, path: &Path, decimals: usize) -> Result<(), GridIoError>
where
    T: Float + Display,
{
    write_grid(grid, BufWriter::new(File::create(path)?), decimals)
}

/// Read `x,y,z` records and reconstruct the grid they were written from.
///
/// Records are consumed in a single pass into flat buffers, then reshaped
/// once. The inner-axis length is inferred from the first repeat of the
/// leading y value, which requires at least two distinct x rows and a y
/// sequence that repeats identically for every row.
///
/// # Errors
/// * On underlying I/O failures
/// * If a record does not parse as three comma-separated numbers
/// * If the y sequence never repeats, or the record count does not divide
///   into whole rows
pub fn read_grid<T, R>(input: R) -> Result<SampleGrid<T>, GridIoError>
where
    T: Float + FromStr,
    R: BufRead,
{
    let mut xs: Vec<T> = Vec::new();
    let mut ys: Vec<T> = Vec::new();
    let mut zs: Vec<T> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let record = (|| -> Option<(T, T, T)> {
            let mut fields = line.split(',');
            let x = fields.next()?.trim().parse().ok()?;
            let y = fields.next()?.trim().parse().ok()?;
            let z = fields.next()?.trim().parse().ok()?;
            fields.next().is_none().then_some((x, y, z))
        })();

        let (x, y, z) = record.ok_or(GridIoError::Malformed { line: idx + 1 })?;
        xs.push(x);
        ys.push(y);
        zs.push(z);
    }

    // The first repeat of the leading y value marks the inner-axis length
    let ny = match ys.iter().skip(1).position(|y| *y == ys[0]) {
        Some(p) => p + 1,
        None => {
            return Err(GridIoError::Layout {
                reason: "y sequence never repeats",
            })
        }
    };

    let nx = zs.len() / ny;
    if nx * ny != zs.len() {
        return Err(GridIoError::Layout {
            reason: "record count is not a whole number of rows",
        });
    }

    let xs: Vec<T> = xs.into_iter().step_by(ny).collect();
    ys.truncate(ny);
    SampleGrid::new(xs, ys, zs).map_err(|_| GridIoError::Layout {
        reason: "record count is not rectangular",
    })
}

/// Read a grid from the file at `path`.
pub fn read_grid_file<T>(path: &Path) -> Result<SampleGrid<T>, GridIoError>
where
    T: Float + FromStr,
{
    read_grid(BufReader::new(File::open(path)?))
}
