//! Density-based clustering primitives.
//!
//! `denscan` is a small library implementing DBSCAN (Ester et al., 1996) over
//! dense `f64` vectors, with an optional k-d tree spatial index that brings the
//! neighbor search from O(n²) down to O(n log n) for the Euclidean metric.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`Dbscan`]: the clustering algorithm (builder-style parameters, optional
//!   noise labeling via [`DbscanExt`])
//! - [`KdTree`]: the spatial index used internally, exposed for direct range
//!   queries
//!
//! Supporting utilities:
//! - [`Metric`]: Euclidean, Manhattan, Minkowski, cosine, or a custom callback
//! - [`normalize`]: per-dimension min-max and z-score scaling
//! - [`estimate`]: a k-distance heuristic for picking a starting epsilon

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod estimate;
pub mod metric;
pub mod normalize;

pub use cluster::{Clustering, Dbscan, DbscanExt, DbscanFit, KdTree, NOISE};
pub use error::{Error, Result};
pub use estimate::{estimate_eps, EpsEstimate};
pub use metric::Metric;
