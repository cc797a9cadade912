//! Per-dimension normalization for point sets.
//!
//! DBSCAN's epsilon is a single radius applied to every dimension, so
//! dimensions with wildly different scales distort neighborhoods. These
//! helpers rescale each dimension independently, in place.

use crate::error::{Error, Result};

/// Scale every dimension to `[0, 1]` (min-max normalization).
///
/// A dimension with zero range collapses to `0.0` for all points.
pub fn normalize_minmax(data: &mut [Vec<f64>]) -> Result<()> {
    let dims = check_rectangular(data)?;

    let mut min = vec![f64::INFINITY; dims];
    let mut max = vec![f64::NEG_INFINITY; dims];
    for point in data.iter() {
        for d in 0..dims {
            min[d] = min[d].min(point[d]);
            max[d] = max[d].max(point[d]);
        }
    }

    for point in data.iter_mut() {
        for d in 0..dims {
            let range = max[d] - min[d];
            point[d] = if range > 0.0 {
                (point[d] - min[d]) / range
            } else {
                0.0
            };
        }
    }
    Ok(())
}

/// Center every dimension to mean 0 and standard deviation 1 (z-score).
///
/// Uses the population standard deviation. A zero-variance dimension
/// collapses to `0.0` for all points.
pub fn normalize_zscore(data: &mut [Vec<f64>]) -> Result<()> {
    let dims = check_rectangular(data)?;
    let n = data.len() as f64;

    let mut mean = vec![0.0; dims];
    for point in data.iter() {
        for d in 0..dims {
            mean[d] += point[d];
        }
    }
    for m in &mut mean {
        *m /= n;
    }

    let mut stdev = vec![0.0; dims];
    for point in data.iter() {
        for d in 0..dims {
            let diff = point[d] - mean[d];
            stdev[d] += diff * diff;
        }
    }
    for s in &mut stdev {
        *s = (*s / n).sqrt();
    }

    for point in data.iter_mut() {
        for d in 0..dims {
            point[d] = if stdev[d] > 0.0 {
                (point[d] - mean[d]) / stdev[d]
            } else {
                0.0
            };
        }
    }
    Ok(())
}

fn check_rectangular(data: &[Vec<f64>]) -> Result<usize> {
    let Some(first) = data.first() else {
        return Err(Error::EmptyInput);
    };
    let dims = first.len();
    if dims == 0 {
        return Err(Error::ZeroDimensional);
    }
    for point in data {
        if point.len() != dims {
            return Err(Error::DimensionMismatch {
                expected: dims,
                found: point.len(),
            });
        }
    }
    Ok(dims)
}
