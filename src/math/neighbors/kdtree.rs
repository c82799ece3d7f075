use super::super::distance::DistanceMetric;
use super::super::number::Float;
use super::super::point::Point;
use super::neighbor::Neighbor;
use super::search::NeighborSearch;
use std::cmp::Ordering;

/// The maximum number of points stored in a single leaf.
const LEAF_SIZE: usize = 16;

/// Node of a kd-tree, stored in a flat arena and addressed by index.
#[derive(Debug, Clone, Copy)]
enum KDNode<F> {
    /// A leaf holding the points at `order[start..end]`.
    Leaf { start: usize, end: usize },
    /// An internal node splitting the space at `split` along `axis`.
    Internal {
        axis: usize,
        split: F,
        left: usize,
        right: usize,
    },
}

/// Struct representing a kd-tree search over a borrowed set of points.
///
/// The tree is immutable once built. Points are split round-robin on the
/// component index, with the median found by `select_nth_unstable_by`.
///
/// # Type Parameters
/// * `F` - The float type used for calculations.
/// * `P` - The type of points used in the neighbor search algorithm.
#[derive(Debug)]
pub struct KDTreeSearch<'a, F, P>
where
    F: Float,
    P: Point<F>,
{
    nodes: Vec<KDNode<F>>,
    order: Vec<usize>,
    root: Option<usize>,
    points: &'a [P],
    metric: DistanceMetric,
}

impl<'a, F, P> KDTreeSearch<'a, F, P>
where
    F: Float,
    P: Point<F>,
{
    /// Builds a new `KDTreeSearch` over the given points.
    ///
    /// # Arguments
    /// * `points` - The dataset of points to index.
    /// * `metric` - The distance metric to use.
    ///
    /// # Returns
    /// A new `KDTreeSearch` instance.
    #[must_use]
    pub fn new(points: &'a [P], metric: DistanceMetric) -> Self {
        let mut order: Vec<usize> = (0..points.len()).collect();
        let mut nodes = Vec::new();
        let root = if points.is_empty() {
            None
        } else {
            Some(Self::build_node(points, &mut nodes, &mut order, 0, 0))
        };
        Self {
            nodes,
            order,
            root,
            points,
            metric,
        }
    }

    fn build_node(
        points: &[P],
        nodes: &mut Vec<KDNode<F>>,
        order: &mut [usize],
        offset: usize,
        depth: usize,
    ) -> usize {
        if order.len() <= LEAF_SIZE {
            nodes.push(KDNode::Leaf {
                start: offset,
                end: offset + order.len(),
            });
            return nodes.len() - 1;
        }

        let axis = depth % P::DIMENSION;
        let median = order.len() / 2;
        order.select_nth_unstable_by(median, |&index1, &index2| {
            points[index1][axis]
                .partial_cmp(&points[index2][axis])
                .unwrap_or(Ordering::Equal)
        });
        let split = points[order[median]][axis];

        let (lower, upper) = order.split_at_mut(median);
        let left = Self::build_node(points, nodes, lower, offset, depth + 1);
        let right = Self::build_node(points, nodes, upper, offset + median, depth + 1);
        nodes.push(KDNode::Internal {
            axis,
            split,
            left,
            right,
        });
        nodes.len() - 1
    }

    fn nearest_recursively(&self, node: usize, query: &P, best: &mut Option<Neighbor<F>>) {
        match self.nodes[node] {
            KDNode::Leaf { start, end } => {
                for &index in &self.order[start..end] {
                    let distance = self.metric.measure(&self.points[index], query);
                    let better = match best {
                        None => true,
                        Some(current) => {
                            distance < current.distance
                                || (distance == current.distance && index < current.index)
                        }
                    };
                    if better {
                        *best = Some(Neighbor::new(index, distance));
                    }
                }
            }
            KDNode::Internal {
                axis,
                split,
                left,
                right,
            } => {
                let delta = query[axis] - split;
                let (near, far) = if delta < F::zero() {
                    (left, right)
                } else {
                    (right, left)
                };
                self.nearest_recursively(near, query, best);

                let revisit = match best {
                    None => true,
                    Some(current) => self.metric.axis_bound(delta) <= current.distance,
                };
                if revisit {
                    self.nearest_recursively(far, query, best);
                }
            }
        }
    }

    fn radius_recursively(
        &self,
        node: usize,
        query: &P,
        radius: F,
        neighbors: &mut Vec<Neighbor<F>>,
    ) {
        match self.nodes[node] {
            KDNode::Leaf { start, end } => {
                for &index in &self.order[start..end] {
                    let distance = self.metric.measure(&self.points[index], query);
                    if distance <= radius {
                        neighbors.push(Neighbor::new(index, distance));
                    }
                }
            }
            KDNode::Internal {
                axis,
                split,
                left,
                right,
            } => {
                let delta = query[axis] - split;
                if self.metric.axis_bound(delta) <= radius {
                    self.radius_recursively(left, query, radius, neighbors);
                    self.radius_recursively(right, query, radius, neighbors);
                } else if delta < F::zero() {
                    self.radius_recursively(left, query, radius, neighbors);
                } else {
                    self.radius_recursively(right, query, radius, neighbors);
                }
            }
        }
    }
}

impl<'a, F, P> NeighborSearch<F, P> for KDTreeSearch<'a, F, P>
where
    F: Float,
    P: Point<F>,
{
    #[must_use]
    fn search_nearest(&self, query: &P) -> Option<Neighbor<F>> {
        let root = self.root?;
        let mut best = None;
        self.nearest_recursively(root, query, &mut best);
        best
    }

    #[must_use]
    fn search_radius(&self, query: &P, radius: F) -> Vec<Neighbor<F>> {
        let Some(root) = self.root else {
            return Vec::new();
        };
        if radius < F::zero() {
            return Vec::new();
        }

        let mut neighbors = Vec::new();
        self.radius_recursively(root, query, radius, &mut neighbors);
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::point::Point3;
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_points(n: usize, seed: u64) -> Vec<Point3<f64>> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| Point3(rng.gen(), rng.gen(), rng.gen()))
            .collect()
    }

    #[test]
    fn test_search_nearest_empty() {
        let points: Vec<Point3<f64>> = Vec::new();
        let search = KDTreeSearch::new(&points, DistanceMetric::Euclidean);
        assert!(search.search_nearest(&Point3(0.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_search_nearest_self_hit() {
        let points = random_points(1000, 17);
        let search = KDTreeSearch::new(&points, DistanceMetric::Euclidean);
        for (index, point) in points.iter().enumerate() {
            let nearest = search.search_nearest(point).unwrap();
            assert_eq!(nearest.index, index);
            assert_eq!(nearest.distance, 0.0);
        }
    }

    #[test]
    fn test_search_nearest_matches_linear_scan() {
        let points = random_points(256, 29);
        let queries = random_points(64, 31);
        let search = KDTreeSearch::new(&points, DistanceMetric::SquaredEuclidean);
        for query in &queries {
            let nearest = search.search_nearest(query).unwrap();
            let expected = points
                .iter()
                .enumerate()
                .map(|(index, point)| {
                    (
                        index,
                        DistanceMetric::SquaredEuclidean.measure(point, query),
                    )
                })
                .min_by(|(_, distance1), (_, distance2)| distance1.partial_cmp(distance2).unwrap())
                .unwrap();
            assert_eq!(nearest.index, expected.0);
            assert_eq!(nearest.distance, expected.1);
        }
    }

    #[test]
    fn test_search_nearest_ties_broken_by_lowest_index() {
        let points = vec![
            Point3(0.5, 0.5, 0.5),
            Point3(0.25, 0.25, 0.25),
            Point3(0.25, 0.25, 0.25),
        ];
        let search = KDTreeSearch::new(&points, DistanceMetric::Euclidean);
        let nearest = search.search_nearest(&Point3(0.25, 0.25, 0.25)).unwrap();
        assert_eq!(nearest.index, 1);
        assert_eq!(nearest.distance, 0.0);
    }

    #[test]
    fn test_search_radius_matches_linear_scan() {
        let points = random_points(512, 43);
        let queries = random_points(16, 47);
        let search = KDTreeSearch::new(&points, DistanceMetric::Euclidean);
        for query in &queries {
            let mut actual: Vec<usize> = search
                .search_radius(query, 0.25)
                .into_iter()
                .map(|neighbor| neighbor.index)
                .collect();
            actual.sort_unstable();

            let expected: Vec<usize> = points
                .iter()
                .enumerate()
                .filter(|(_, point)| DistanceMetric::Euclidean.measure(*point, query) <= 0.25)
                .map(|(index, _)| index)
                .collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_search_radius_negative_radius() {
        let points = random_points(32, 5);
        let search = KDTreeSearch::new(&points, DistanceMetric::Euclidean);
        assert!(search
            .search_radius(&Point3(0.5, 0.5, 0.5), -1.0)
            .is_empty());
    }

    #[test]
    fn test_search_radius_order_is_stable() {
        let points = random_points(512, 59);
        let search = KDTreeSearch::new(&points, DistanceMetric::Euclidean);
        let query = Point3(0.5, 0.5, 0.5);
        let first: Vec<usize> = search
            .search_radius(&query, 0.3)
            .into_iter()
            .map(|neighbor| neighbor.index)
            .collect();
        let second: Vec<usize> = search
            .search_radius(&query, 0.3)
            .into_iter()
            .map(|neighbor| neighbor.index)
            .collect();
        assert_eq!(first, second);
    }
}
