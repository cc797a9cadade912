//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Determines the number of clusters automatically
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors.
//! - **MinPts**: Minimum neighborhood size (the point itself counts) for a
//!   point to be "core".
//! - **Core point**: Has at least MinPts points within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. For each unlabeled point P:
//!    - Find neighbors within ε (P included)
//!    - If |neighbors| < MinPts, mark as noise (may change later)
//!    - Else P is core: claim the whole neighborhood for a new cluster and
//!      expand from it
//! 2. Expansion via a growing seed worklist: each seed whose own neighborhood
//!    reaches MinPts pulls its unclassified and noise neighbors into the
//!    cluster; only previously-unclassified ones are queued for their own
//!    expansion. A border point absorbs the cluster id but never propagates —
//!    two border points of one cluster need not be within ε of each other,
//!    only transitively connected through core points.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) brute force, O(n log n) expected with the k-d tree index.
//! - **Space**: O(n) for labels and worklists.
//!
//! ## Determinism
//!
//! Points are visited in index order and every neighborhood is returned in
//! ascending index order, so two runs over the same input produce identical
//! labels and identical cluster numbering — whether or not the index is used.
//! Cluster ids count up from 0 in discovery order.
//!
//! ## Limitations
//!
//! - Struggles with clusters of varying density
//! - ε is sensitive and dataset-dependent; see [`crate::estimate_eps`]
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use super::kdtree::KdTree;
use super::neighbors::RegionQuery;
use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::metric::Metric;

/// Public label value marking noise points in [`Clustering::fit_predict`] output.
pub const NOISE: usize = usize::MAX;

/// Internal per-point state during a run.
///
/// `Unclassified -> Noise` may later be repaired to `Cluster` when an
/// expansion reaches the point; `Cluster` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Unclassified,
    Noise,
    Cluster(usize),
}

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighborhood.
    epsilon: f64,
    /// Minimum neighborhood size (self included) for core point classification.
    min_pts: usize,
    /// Distance metric for neighborhood queries.
    metric: Metric,
    /// Whether to build a k-d tree index (honored for Euclidean only).
    use_kdtree: bool,
}

/// Labels and cluster count from a completed DBSCAN run.
#[derive(Debug, Clone)]
pub struct DbscanFit {
    /// One label per input point; `None` marks noise.
    pub labels: Vec<Option<usize>>,
    /// Number of clusters discovered (noise excluded). Cluster ids are
    /// exactly `0..n_clusters`.
    pub n_clusters: usize,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer with the Euclidean metric and no index.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum neighborhood size (self included) to form a dense region.
    ///
    /// # Typical Values
    ///
    /// - `epsilon`: often read off a k-distance plot (see [`crate::estimate_eps`]).
    /// - `min_pts`: 2 × dimension is a common heuristic.
    pub fn new(epsilon: f64, min_pts: usize) -> Self {
        Self {
            epsilon,
            min_pts,
            metric: Metric::Euclidean,
            use_kdtree: false,
        }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum neighborhood size for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Set the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Enable or disable the k-d tree index.
    ///
    /// The index only accelerates the Euclidean metric; with any other metric
    /// this setting is silently ignored and queries stay brute force, which
    /// produces identical results either way.
    pub fn with_kdtree(mut self, use_kdtree: bool) -> Self {
        self.use_kdtree = use_kdtree;
        self
    }

    /// Run DBSCAN, returning per-point labels and the cluster count.
    pub fn fit(&self, data: &[Vec<f64>]) -> Result<DbscanFit> {
        let (labels, n_clusters) = self.cluster(data)?;
        let labels = labels
            .into_iter()
            .map(|l| match l {
                Label::Cluster(id) => Some(id),
                Label::Noise => None,
                Label::Unclassified => unreachable!("point left unclassified"),
            })
            .collect();
        Ok(DbscanFit { labels, n_clusters })
    }

    fn validate_params(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be positive and finite",
            });
        }
        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }
        if let Metric::Minkowski(p) = self.metric {
            if !p.is_finite() || p <= 0.0 {
                return Err(Error::InvalidParameter {
                    name: "minkowski_p",
                    message: "must be positive and finite",
                });
            }
        }
        Ok(())
    }

    /// Pre-scan the dataset: non-empty, rectangular, all coordinates finite.
    ///
    /// Clustering refuses to start on bad data rather than relying on the
    /// metric's failure sentinel mid-run.
    fn validate_data(data: &[Vec<f64>]) -> Result<()> {
        let Some(first) = data.first() else {
            return Err(Error::EmptyInput);
        };
        let dims = first.len();
        if dims == 0 {
            return Err(Error::ZeroDimensional);
        }
        for (i, point) in data.iter().enumerate() {
            if point.len() != dims {
                return Err(Error::DimensionMismatch {
                    expected: dims,
                    found: point.len(),
                });
            }
            for (d, c) in point.iter().enumerate() {
                if !c.is_finite() {
                    return Err(Error::NonFiniteCoordinate { point: i, dim: d });
                }
            }
        }
        Ok(())
    }

    /// The main loop: classify every point, expanding a cluster from each
    /// core point discovered in index order.
    fn cluster(&self, data: &[Vec<f64>]) -> Result<(Vec<Label>, usize)> {
        self.validate_params()?;
        Self::validate_data(data)?;
        let n = data.len();

        // Backend selection happens exactly once; the expansion below never
        // branches on it again.
        let query = if self.use_kdtree && self.metric.index_accelerable() {
            RegionQuery::Indexed(KdTree::build(data))
        } else {
            RegionQuery::Brute {
                data,
                metric: &self.metric,
            }
        };

        let mut labels = vec![Label::Unclassified; n];
        let mut neighbors: Vec<usize> = Vec::new();
        let mut seeds: Vec<usize> = Vec::new();
        let mut cluster_id = 0;

        for i in 0..n {
            if labels[i] != Label::Unclassified {
                continue;
            }

            query.neighbors(&data[i], self.epsilon, &mut neighbors);
            if neighbors.len() < self.min_pts {
                // Provisional: a later expansion may still absorb this point
                // as a border point.
                labels[i] = Label::Noise;
                continue;
            }

            self.expand_cluster(data, &query, i, cluster_id, &mut labels, &mut neighbors, &mut seeds);
            cluster_id += 1;
        }

        debug_assert!(labels.iter().all(|&l| l != Label::Unclassified));
        Ok((labels, cluster_id))
    }

    /// Grow cluster `cluster_id` outward from core point `point_idx`, whose
    /// neighborhood is already in `neighbors`.
    ///
    /// `seeds` is the worklist of points whose neighborhoods still need
    /// inspection; it only grows at the tail and each entry is processed once.
    #[allow(clippy::too_many_arguments)]
    fn expand_cluster(
        &self,
        data: &[Vec<f64>],
        query: &RegionQuery<'_>,
        point_idx: usize,
        cluster_id: usize,
        labels: &mut [Label],
        neighbors: &mut Vec<usize>,
        seeds: &mut Vec<usize>,
    ) {
        // The entire initial neighborhood joins the cluster at once. This is
        // where previously-marked noise points get promoted to border points.
        seeds.clear();
        seeds.extend_from_slice(neighbors);
        for &s in seeds.iter() {
            labels[s] = Label::Cluster(cluster_id);
        }

        // The originating point is labeled and its neighborhood is already in
        // the worklist; re-expanding it would be harmless but wasted work.
        if let Some(pos) = seeds.iter().position(|&s| s == point_idx) {
            seeds.swap_remove(pos);
        }

        let mut current = 0;
        while current < seeds.len() {
            let seed = seeds[current];
            current += 1;

            query.neighbors(&data[seed], self.epsilon, neighbors);
            if neighbors.len() < self.min_pts {
                // Border point: keeps the cluster id, propagates nothing.
                continue;
            }

            for &nb in neighbors.iter() {
                match labels[nb] {
                    Label::Unclassified => {
                        // Not seen before: joins the cluster and gets its own
                        // neighborhood examined later.
                        seeds.push(nb);
                        labels[nb] = Label::Cluster(cluster_id);
                    }
                    Label::Noise => {
                        // Density-reachable after all: border point.
                        labels[nb] = Label::Cluster(cluster_id);
                    }
                    Label::Cluster(_) => {}
                }
            }
        }
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

impl Clustering for Dbscan {
    /// Labels with noise mapped to [`NOISE`].
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        let fit = self.fit(data)?;
        Ok(fit.labels.into_iter().map(|l| l.unwrap_or(NOISE)).collect())
    }

    /// DBSCAN discovers clusters dynamically, so this returns 0.
    ///
    /// For the actual count, use [`Dbscan::fit`] and read `n_clusters`.
    fn n_clusters(&self) -> usize {
        0 // Unknown until fit
    }
}

/// Extended DBSCAN interface with noise detection.
pub trait DbscanExt {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&self, data: &[Vec<f64>]) -> Result<Vec<Option<usize>>>;

    /// Check if a [`Clustering::fit_predict`] label represents noise.
    fn is_noise(label: usize) -> bool {
        label == NOISE
    }
}

impl DbscanExt for Dbscan {
    fn fit_predict_with_noise(&self, data: &[Vec<f64>]) -> Result<Vec<Option<usize>>> {
        Ok(self.fit(data)?.labels)
    }
}
