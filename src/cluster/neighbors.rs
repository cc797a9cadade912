//! One neighbor-query capability, two implementations.
//!
//! The clustering engine asks a single question — "which point indices lie
//! within eps of this point, self included, ascending?" — and must behave
//! identically whether the answer comes from a brute-force scan or the k-d
//! tree. Funneling both through one type keeps the expansion logic in
//! `dbscan.rs` written exactly once.

use super::kdtree::KdTree;
use crate::metric::Metric;

/// Region query backend, chosen once per clustering call.
pub(crate) enum RegionQuery<'a> {
    /// Compare against every point with the configured metric. O(n) per query,
    /// works for any metric.
    Brute {
        data: &'a [Vec<f64>],
        metric: &'a Metric,
    },
    /// Pruned k-d tree search. Euclidean only.
    Indexed(KdTree<'a>),
}

impl RegionQuery<'_> {
    /// Collect all indices within `eps` of `query` into `out`, ascending.
    ///
    /// `out` is cleared first. The query point itself is included whenever its
    /// self-distance is within eps, which holds for every built-in metric on
    /// finite input except cosine on a zero-norm vector.
    pub(crate) fn neighbors(&self, query: &[f64], eps: f64, out: &mut Vec<usize>) {
        match self {
            RegionQuery::Brute { data, metric } => {
                out.clear();
                for (i, other) in data.iter().enumerate() {
                    let dist = metric.distance(query, other);
                    // Negative distances are a metric's failure sentinel.
                    if (0.0..=eps).contains(&dist) {
                        out.push(i);
                    }
                }
            }
            RegionQuery::Indexed(tree) => tree.range_query_into(query, eps, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_agree() {
        let data = vec![
            vec![0.0, 0.0],
            vec![0.5, 0.0],
            vec![1.0, 0.0],
            vec![4.0, 4.0],
            vec![0.0, 0.9],
        ];
        let metric = Metric::Euclidean;
        let brute = RegionQuery::Brute {
            data: &data,
            metric: &metric,
        };
        let indexed = RegionQuery::Indexed(KdTree::build(&data));

        let mut a = Vec::new();
        let mut b = Vec::new();
        for point in &data {
            for eps in [0.4, 1.0, 6.0] {
                brute.neighbors(point, eps, &mut a);
                indexed.neighbors(point, eps, &mut b);
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_brute_force_respects_metric() {
        let data = vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![3.0, 0.0]];
        let metric = Metric::Manhattan;
        let query = RegionQuery::Brute {
            data: &data,
            metric: &metric,
        };

        let mut out = Vec::new();
        // Manhattan distance to point 1 is 2.0; Euclidean would be ~1.41.
        query.neighbors(&data[0], 1.9, &mut out);
        assert_eq!(out, vec![0]);
        query.neighbors(&data[0], 2.0, &mut out);
        assert_eq!(out, vec![0, 1]);
    }

    #[test]
    fn test_negative_sentinel_excluded() {
        use std::sync::Arc;
        let data = vec![vec![0.0], vec![1.0]];
        let metric = Metric::Custom(Arc::new(|_: &[f64], _: &[f64]| -1.0));
        let query = RegionQuery::Brute {
            data: &data,
            metric: &metric,
        };
        let mut out = Vec::new();
        query.neighbors(&data[0], 10.0, &mut out);
        assert!(out.is_empty());
    }
}
