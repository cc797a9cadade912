//! Epsilon estimation via the k-distance heuristic.
//!
//! Plotting each point's distance to its k-th nearest neighbor, sorted, tends
//! to show an "elbow" near a good epsilon (Ester et al. suggest k = 4 for 2D
//! data). This module computes the k-distances and picks the 95th percentile
//! as a rough stand-in for the elbow.
//!
//! This is a heuristic with no guarantee beyond "a plausible starting epsilon";
//! inspect [`EpsEstimate::k_distances`] and adjust.

use crate::error::{Error, Result};
use crate::metric::euclidean;

/// Result of a k-distance scan over a dataset.
#[derive(Debug, Clone)]
pub struct EpsEstimate {
    /// Distance from each point to its k-th nearest neighbor (self excluded),
    /// in input order.
    pub k_distances: Vec<f64>,
    /// The `k` that was used.
    pub k: usize,
    /// 95th percentile of the k-distances.
    pub suggested_eps: f64,
}

/// Estimate a starting epsilon from the k-distance distribution.
///
/// Distances are Euclidean. Requires `1 <= k < data.len()` and rectangular
/// input. O(n² log n); intended for offline parameter tuning, not hot paths.
pub fn estimate_eps(data: &[Vec<f64>], k: usize) -> Result<EpsEstimate> {
    let n = data.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    if k == 0 || k >= n {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "must satisfy 1 <= k < number of points",
        });
    }
    let dims = data[0].len();
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

    let mut k_distances = Vec::with_capacity(n);
    let mut dists = Vec::with_capacity(n - 1);
    for (i, point) in data.iter().enumerate() {
        dists.clear();
        for (j, other) in data.iter().enumerate() {
            if i != j {
                dists.push(euclidean(point, other));
            }
        }
        // k-th smallest; a full sort would also work but is not needed.
        let (_, kth, _) = dists.select_nth_unstable_by(k - 1, f64::total_cmp);
        k_distances.push(*kth);
    }

    let mut sorted = k_distances.clone();
    sorted.sort_unstable_by(f64::total_cmp);
    let elbow = ((0.95 * n as f64) as usize).min(n - 1);

    Ok(EpsEstimate {
        k_distances,
        k,
        suggested_eps: sorted[elbow],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k_distance_values() {
        // Colinear points at x = 0, 1, 3, 6.
        let data = vec![vec![0.0], vec![1.0], vec![3.0], vec![6.0]];
        let est = estimate_eps(&data, 1).unwrap();
        assert_eq!(est.k, 1);
        assert_eq!(est.k_distances, vec![1.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_second_nearest() {
        let data = vec![vec![0.0], vec![1.0], vec![3.0], vec![6.0]];
        let est = estimate_eps(&data, 2).unwrap();
        assert_eq!(est.k_distances, vec![3.0, 2.0, 3.0, 5.0]);
    }

    #[test]
    fn test_suggested_eps_is_a_k_distance() {
        let data: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64 * 0.1, 0.0]).collect();
        let est = estimate_eps(&data, 4).unwrap();
        assert!(est
            .k_distances
            .iter()
            .any(|&d| (d - est.suggested_eps).abs() < 1e-15));
        assert!(est.suggested_eps > 0.0);
    }

    #[test]
    fn test_invalid_k() {
        let data = vec![vec![0.0], vec![1.0]];
        assert!(estimate_eps(&data, 0).is_err());
        assert!(estimate_eps(&data, 2).is_err());
    }

    #[test]
    fn test_empty() {
        assert!(estimate_eps(&[], 1).is_err());
    }
}
