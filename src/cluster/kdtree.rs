//! A balanced k-d tree over borrowed points, for Euclidean range queries.
//!
//! The tree is built once per clustering call and discarded with it. Nodes
//! live in a flat arena addressed by index, so dropping the tree never
//! recurses no matter how deep it is.
//!
//! ## Construction
//!
//! The split dimension cycles with depth (`depth % dims`). At each level the
//! working index range is partitioned with an order-statistic selection so the
//! median lands at its final position — O(n) per level instead of the
//! O(n log n) a full sort would cost, for O(n log n) total build time.
//!
//! ## Range query
//!
//! Depth-first. Every visited node is tested against the query with the exact
//! Euclidean distance (so a point queried against itself is always a hit).
//! The child on the query's side of the splitting plane is visited first; the
//! far child is visited only when the perpendicular distance to the plane is
//! at most epsilon, since otherwise no point beyond the plane can be within
//! range. Results are sorted ascending so indexed and brute-force queries are
//! interchangeable.

use crate::metric::euclidean;

/// One arena slot: the point stored at this node, the dimension it splits on,
/// and the arena indices of its children.
#[derive(Debug, Clone, Copy)]
struct Node {
    point: usize,
    split_dim: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// A balanced k-d tree borrowing the point set it indexes.
///
/// Accelerates Euclidean range queries only; see
/// [`Dbscan::with_kdtree`](crate::Dbscan::with_kdtree) for how the clustering
/// driver falls back to brute force for other metrics.
#[derive(Debug)]
pub struct KdTree<'a> {
    points: &'a [Vec<f64>],
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl<'a> KdTree<'a> {
    /// Build a tree over `points`.
    ///
    /// All points must share the same nonzero dimensionality and contain only
    /// finite coordinates; the clustering driver validates this before
    /// building. An empty slice yields an empty tree.
    pub fn build(points: &'a [Vec<f64>]) -> Self {
        let dims = points.first().map_or(0, Vec::len);
        let mut tree = KdTree {
            points,
            nodes: Vec::with_capacity(points.len()),
            root: None,
        };
        if dims > 0 {
            let mut indices: Vec<usize> = (0..points.len()).collect();
            tree.root = tree.build_range(&mut indices, 0, dims);
        }
        tree
    }

    fn build_range(&mut self, indices: &mut [usize], depth: usize, dims: usize) -> Option<usize> {
        if indices.is_empty() {
            return None;
        }

        let split_dim = depth % dims;
        let median = indices.len() / 2;
        let points = self.points;
        indices.select_nth_unstable_by(median, |&a, &b| {
            points[a][split_dim].total_cmp(&points[b][split_dim])
        });

        let slot = self.nodes.len();
        self.nodes.push(Node {
            point: indices[median],
            split_dim,
            left: None,
            right: None,
        });

        let (below, rest) = indices.split_at_mut(median);
        let left = self.build_range(below, depth + 1, dims);
        let right = self.build_range(&mut rest[1..], depth + 1, dims);
        self.nodes[slot].left = left;
        self.nodes[slot].right = right;

        Some(slot)
    }

    /// All point indices within `eps` of `query` (inclusive), ascending.
    pub fn range_query(&self, query: &[f64], eps: f64) -> Vec<usize> {
        let mut out = Vec::new();
        self.range_query_into(query, eps, &mut out);
        out
    }

    /// As [`range_query`](Self::range_query), writing into a reusable buffer.
    ///
    /// The buffer is cleared first.
    pub fn range_query_into(&self, query: &[f64], eps: f64, out: &mut Vec<usize>) {
        out.clear();
        self.search(self.root, query, eps, out);
        out.sort_unstable();
    }

    fn search(&self, node: Option<usize>, query: &[f64], eps: f64, out: &mut Vec<usize>) {
        let Some(slot) = node else { return };
        let node = self.nodes[slot];
        let coords = &self.points[node.point];

        if euclidean(query, coords) <= eps {
            out.push(node.point);
        }

        // Signed offset from the splitting plane decides which side the query
        // is on; the far side can only hold neighbors if the plane itself is
        // within eps.
        let diff = query[node.split_dim] - coords[node.split_dim];
        let (near, far) = if diff < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        self.search(near, query, eps, out);
        if diff.abs() <= eps {
            self.search(far, query, eps, out);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(points: &[Vec<f64>], query: &[f64], eps: f64) -> Vec<usize> {
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| euclidean(query, p) <= eps)
            .map(|(i, _)| i)
            .collect()
    }

    fn grid_2d() -> Vec<Vec<f64>> {
        // 5x5 integer grid.
        let mut points = Vec::new();
        for x in 0..5 {
            for y in 0..5 {
                points.push(vec![x as f64, y as f64]);
            }
        }
        points
    }

    #[test]
    fn test_every_point_indexed() {
        let points = grid_2d();
        let tree = KdTree::build(&points);
        assert_eq!(tree.len(), points.len());
    }

    #[test]
    fn test_matches_brute_force_on_grid() {
        let points = grid_2d();
        let tree = KdTree::build(&points);

        for (i, point) in points.iter().enumerate() {
            for eps in [0.5, 1.0, 1.5, 2.5, 10.0] {
                let got = tree.range_query(point, eps);
                let want = brute_force(&points, point, eps);
                assert_eq!(got, want, "query {i} eps {eps}");
            }
        }
    }

    #[test]
    fn test_self_membership() {
        let points = grid_2d();
        let tree = KdTree::build(&points);
        for (i, point) in points.iter().enumerate() {
            let neighbors = tree.range_query(point, 0.0);
            assert!(neighbors.contains(&i));
        }
    }

    #[test]
    fn test_boundary_distance_included() {
        // Neighbor at exactly eps must be included (<=, not <).
        let points = vec![vec![0.0, 0.0], vec![3.0, 4.0]];
        let tree = KdTree::build(&points);
        assert_eq!(tree.range_query(&points[0], 5.0), vec![0, 1]);
        assert_eq!(tree.range_query(&points[0], 4.999), vec![0]);
    }

    #[test]
    fn test_pruning_does_not_drop_points_near_plane() {
        // Points straddling x = 0 within eps of each other. A wrong pruning
        // inequality (< instead of <=) or a wrong near/far choice drops the
        // far-side neighbor.
        let points = vec![
            vec![-0.1, 0.0],
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![5.0, 0.0],
            vec![-5.0, 0.0],
        ];
        let tree = KdTree::build(&points);
        assert_eq!(tree.range_query(&points[1], 0.1), vec![0, 1, 2]);
    }

    #[test]
    fn test_duplicate_points() {
        let points = vec![vec![1.0, 1.0]; 7];
        let tree = KdTree::build(&points);
        assert_eq!(tree.range_query(&points[0], 0.0), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_single_point() {
        let points = vec![vec![2.0, 3.0, 4.0]];
        let tree = KdTree::build(&points);
        assert_eq!(tree.range_query(&points[0], 1.0), vec![0]);
        assert_eq!(tree.range_query(&[100.0, 100.0, 100.0], 1.0), Vec::<usize>::new());
    }

    #[test]
    fn test_empty() {
        let points: Vec<Vec<f64>> = vec![];
        let tree = KdTree::build(&points);
        assert!(tree.range_query(&[0.0], 1.0).is_empty());
    }

    #[test]
    fn test_buffer_reuse_clears() {
        let points = grid_2d();
        let tree = KdTree::build(&points);
        let mut buf = vec![99, 98, 97];
        tree.range_query_into(&points[0], 1.0, &mut buf);
        assert_eq!(buf, brute_force(&points, &points[0], 1.0));
    }

    #[test]
    fn test_higher_dimensions() {
        // 3D lattice; exercises dimension cycling past depth 2.
        let mut points = Vec::new();
        for x in 0..3 {
            for y in 0..3 {
                for z in 0..3 {
                    points.push(vec![x as f64, y as f64, z as f64]);
                }
            }
        }
        let tree = KdTree::build(&points);
        for (i, point) in points.iter().enumerate() {
            for eps in [1.0, 1.8] {
                assert_eq!(
                    tree.range_query(point, eps),
                    brute_force(&points, point, eps),
                    "query {i} eps {eps}"
                );
            }
        }
    }
}
