//! Density-based clustering over dense `f64` vectors.
//!
//! ## DBSCAN
//!
//! DBSCAN groups points whose neighborhoods are dense enough, discovers the
//! number of clusters on its own, and marks sparse stragglers as noise. The
//! only parameters are a neighborhood radius `eps` and a density threshold
//! `min_pts` (neighborhood size including the point itself).
//!
//! Two neighbor-search backends are available behind the same interface:
//!
//! - **Brute force** (default): O(n) per query, works with any [`Metric`].
//! - **K-d tree** ([`Dbscan::with_kdtree`]): O(log n) expected per query,
//!   Euclidean metric only. Both backends return identical neighborhoods, so
//!   clustering results never depend on which one ran.
//!
//! ## Usage
//!
//! ```rust
//! use denscan::{Dbscan, DbscanExt};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![0.2, 0.0],
//!     vec![10.0, 10.0],
//! ];
//!
//! let dbscan = Dbscan::new(0.5, 2).with_kdtree(true);
//! let labels = dbscan.fit_predict_with_noise(&data).unwrap();
//!
//! assert_eq!(labels[0], labels[1]); // dense pair clusters together
//! assert_eq!(labels[3], None);      // isolated point is noise
//! ```
//!
//! [`Metric`]: crate::Metric

mod dbscan;
mod kdtree;
mod neighbors;
mod traits;

pub use dbscan::{Dbscan, DbscanExt, DbscanFit, NOISE};
pub use kdtree::KdTree;
pub use traits::Clustering;
