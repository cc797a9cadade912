//! Distance metrics for dense vectors.
//!
//! All metrics are pure and symmetric. The clustering code treats a metric as a
//! single capability, `distance(a, b) -> f64`; the enum exists so the common
//! metrics stay allocation-free while still admitting an arbitrary callback.
//!
//! Only [`Metric::Euclidean`] can be accelerated by the k-d tree index: the
//! tree's pruning rule compares per-axis differences against epsilon, which is
//! only sound for a metric that dominates its per-axis projections.

use std::fmt;
use std::sync::Arc;

/// Signature for user-supplied distance functions.
///
/// Must be symmetric and non-negative for well-defined results. A negative
/// return value is treated as a failure sentinel and the pair is never
/// considered neighbors.
pub type DistanceFn = dyn Fn(&[f64], &[f64]) -> f64 + Send + Sync;

/// Distance metric used for neighborhood queries.
#[derive(Clone)]
pub enum Metric {
    /// Straight-line distance: `sqrt(Σ (aᵢ - bᵢ)²)`.
    Euclidean,
    /// City-block distance: `Σ |aᵢ - bᵢ|`.
    Manhattan,
    /// Generalized distance `(Σ |aᵢ - bᵢ|^p)^(1/p)`; `p` must be positive.
    ///
    /// `p = 1` is Manhattan, `p = 2` is Euclidean.
    Minkowski(f64),
    /// `1 - cos(a, b)`, in `[0, 2]`. A zero-norm vector is at distance 2
    /// (the maximum) from everything, including itself.
    Cosine,
    /// User-supplied distance function.
    Custom(Arc<DistanceFn>),
}

impl Metric {
    /// Compute the distance between two coordinate vectors.
    ///
    /// Both slices must have the same length; the clustering entry points
    /// validate this before any distance is computed.
    pub fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        match self {
            Metric::Euclidean => euclidean(a, b),
            Metric::Manhattan => a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum(),
            Metric::Minkowski(p) => {
                let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs().powf(*p)).sum();
                sum.powf(1.0 / p)
            }
            Metric::Cosine => cosine(a, b),
            Metric::Custom(f) => f(a, b),
        }
    }

    /// Whether the k-d tree index can answer range queries for this metric.
    pub(crate) fn index_accelerable(&self) -> bool {
        matches!(self, Metric::Euclidean)
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Euclidean
    }
}

impl fmt::Debug for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Euclidean => f.write_str("Euclidean"),
            Metric::Manhattan => f.write_str("Manhattan"),
            Metric::Minkowski(p) => f.debug_tuple("Minkowski").field(p).finish(),
            Metric::Cosine => f.write_str("Cosine"),
            Metric::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[inline]
pub(crate) fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 2.0;
    }
    1.0 - dot / (norm_a.sqrt() * norm_b.sqrt())
}
